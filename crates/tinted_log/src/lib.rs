use std::fmt::Display;

mod default_logger;
pub use default_logger::{
    configure, configure_table, debug, default_logger, info, init_logging, set_colors, set_file,
    set_format,
};

pub mod chunker;
pub mod config;
pub mod escape_code;
pub mod format_token;
pub mod log_error;
pub mod log_target;
pub mod logger;
pub mod logger_builder;
pub mod segment;

pub mod macros;

pub use config::{ChunkWidth, ConfigOption, ConfigPatch, LoggerConfig};
pub use escape_code::Color;
pub use format_token::{FormatToken, MacroName, Template};
pub use log_error::{LogError, LogResult};
pub use logger::{Logger, Palette};
pub use segment::Segment;

/// Severity label passed to the `level` macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_uppercase())
    }
}

#[cfg(test)]
mod test {
    use crate::LogLevel;

    #[test]
    fn should_display_uppercase_labels() {
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
        assert_eq!(LogLevel::Info.to_string(), "INFO");
    }
}
