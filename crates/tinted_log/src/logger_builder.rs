use std::{marker::PhantomData, path::PathBuf};

use tinted_core::builder::BuilderTypeState;

use crate::{
    config::{ChunkWidth, LoggerConfig},
    format_token::{FormatToken, Template},
    logger::Logger,
};

pub struct HasTemplate;

pub struct NoTemplate;

impl BuilderTypeState for HasTemplate {}

impl BuilderTypeState for NoTemplate {}

/// Builds a [`Logger`] from the default config. A template with at least one
/// token is required before `build` becomes available.
pub struct LoggerBuilder<T: BuilderTypeState> {
    pub(crate) config: LoggerConfig,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: BuilderTypeState> LoggerBuilder<T> {
    pub fn new() -> LoggerBuilder<NoTemplate> {
        LoggerBuilder {
            config: LoggerConfig {
                template: Template::default(),
                ..Default::default()
            },
            _phantom: PhantomData,
        }
    }

    pub fn with_token(mut self, token: impl Into<FormatToken>) -> LoggerBuilder<HasTemplate> {
        self.config.template.push(token);

        LoggerBuilder {
            config: self.config,
            _phantom: PhantomData,
        }
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.config.user_name = user_name.into();
        self
    }

    pub fn with_max_chunk_width(mut self, width: ChunkWidth) -> Self {
        self.config.max_chunk_width = width;
        self
    }

    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.config.time_format = time_format.into();
        self
    }
}

impl LoggerBuilder<HasTemplate> {
    pub fn build(self) -> Logger {
        Logger::new(self.config)
    }
}

impl Default for LoggerBuilder<NoTemplate> {
    fn default() -> Self {
        LoggerBuilder::<NoTemplate>::new()
    }
}
