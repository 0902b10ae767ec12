use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tinted_core::utils::FromIoError;

pub type LogResult<T> = Result<T, LogError>;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Failed to write log to `{}`: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Invalid logger config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
    #[error("Invalid time format `{0}`")]
    InvalidTimeFormat(String),
}

impl FromIoError for LogError {
    fn io_err<P: AsRef<Path>>(path: P, err: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source: err,
        }
    }
}
