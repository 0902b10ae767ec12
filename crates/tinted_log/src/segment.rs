use std::{
    fmt::Display,
    io::{self, Write},
};

use crate::escape_code::{colorize, Color};

/// A piece of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// One resolved token.
    Text { text: String, color: Option<Color> },
    /// Closes the line of one message chunk.
    EndOfLine,
}

impl Segment {
    pub fn text(text: impl Into<String>, color: Option<Color>) -> Self {
        Self::Text {
            text: text.into(),
            color,
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Text { text, color } => f.write_str(&colorize(text, *color)),
            Segment::EndOfLine => Ok(()),
        }
    }
}

/// Writes every text segment followed by a single space and a newline for
/// every [`Segment::EndOfLine`].
pub fn write_segments<W: Write + ?Sized>(out: &mut W, segments: &[Segment]) -> io::Result<()> {
    for segment in segments {
        match segment {
            Segment::Text { .. } => write!(out, "{segment} ")?,
            Segment::EndOfLine => writeln!(out)?,
        }
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use crate::escape_code::{Color, RESET};

    use super::{write_segments, Segment};

    #[test]
    fn should_separate_segments_and_end_lines() {
        let segments = [
            Segment::text("a", None),
            Segment::text("b", Some(Color::Red)),
            Segment::EndOfLine,
            Segment::text("c", None),
            Segment::EndOfLine,
        ];

        let mut out = Vec::new();
        write_segments(&mut out, &segments).unwrap();

        let expected = format!("a \u{1b}[31mb{RESET} \nc \n");
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
