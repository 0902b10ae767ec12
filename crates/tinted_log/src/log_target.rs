use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tinted_core::utils::io_err_mapper;

use crate::{
    log_error::{LogError, LogResult},
    segment::{write_segments, Segment},
};

const STDOUT_NAME: &str = "<stdout>";

/// Destination for rendered segments.
pub trait LogTarget {
    /// Whether the configured token colors should reach this target. Targets
    /// that answer `false` get monochrome output.
    fn supports_color(&self) -> bool;

    fn write(&mut self, segments: &[Segment]) -> LogResult<()>;
}

/// Appends to a file, opening and closing it on every write.
#[derive(Debug, Clone)]
pub struct FileTarget {
    path: PathBuf,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogTarget for FileTarget {
    fn supports_color(&self) -> bool {
        false
    }

    fn write(&mut self, segments: &[Segment]) -> LogResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err_mapper::<_, LogError>(&self.path))?;

        // `file` is dropped, and closed, on both the error and the success path
        write_segments(&mut file, segments).map_err(io_err_mapper(&self.path))
    }
}

/// Standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalTarget;

impl LogTarget for TerminalTarget {
    fn supports_color(&self) -> bool {
        true
    }

    fn write(&mut self, segments: &[Segment]) -> LogResult<()> {
        write_segments(&mut io::stdout().lock(), segments).map_err(io_err_mapper(STDOUT_NAME))
    }
}

/// Any [`Write`] implementor, e.g. an in-memory buffer or a socket.
#[derive(Debug)]
pub struct WriterTarget<W: Write> {
    writer: W,
    color: bool,
    name: &'static str,
}

impl<W: Write> WriterTarget<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self {
            writer,
            color,
            name: "<writer>",
        }
    }

    pub fn with_name(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LogTarget for WriterTarget<W> {
    fn supports_color(&self) -> bool {
        self.color
    }

    fn write(&mut self, segments: &[Segment]) -> LogResult<()> {
        write_segments(&mut self.writer, segments).map_err(io_err_mapper(self.name))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::{log_error::LogError, segment::Segment};

    use super::{FileTarget, LogTarget, WriterTarget};

    fn line(text: &str) -> [Segment; 2] {
        [Segment::text(text, None), Segment::EndOfLine]
    }

    #[test]
    fn should_append_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.log");
        let mut target = FileTarget::new(&path);

        target.write(&line("first")).unwrap();
        target.write(&line("second")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first \nsecond \n");
    }

    #[test]
    fn should_report_path_of_failed_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("debug.log");
        let mut target = FileTarget::new(&path);

        match target.write(&line("lost")) {
            Err(LogError::Io { path: err_path, .. }) => assert_eq!(err_path, path),
            other => panic!("expected an io error, got {other:?}"),
        }
    }

    #[test]
    fn should_write_into_buffer() {
        let mut target = WriterTarget::new(Vec::new(), true);
        assert!(target.supports_color());

        target.write(&line("buffered")).unwrap();
        assert_eq!(target.into_inner(), b"buffered \n");
    }
}
