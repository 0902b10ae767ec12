use std::{fmt::Write, path::PathBuf};

use chrono::{DateTime, Local};

use crate::{
    chunker::chunk_message,
    config::{ConfigOption, ConfigPatch, LoggerConfig},
    format_token::{MacroContext, Template},
    log_error::LogResult,
    log_target::{FileTarget, LogTarget, TerminalTarget},
    logger_builder::{LoggerBuilder, NoTemplate},
    segment::Segment,
    LogLevel,
};

/// Which colors the rendered segments carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Every segment is plain text, whatever the template says.
    Monochrome,
    /// Each segment takes the color of its template token.
    Configured,
}

/// Expands the template of its [`LoggerConfig`] into colored segments and
/// hands them to a [`LogTarget`].
///
/// `debug` appends monochrome lines to the configured output file, `info`
/// prints colored lines to standard output.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> LoggerBuilder<NoTemplate> {
        LoggerBuilder::<NoTemplate>::new()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn debug(&self, message: &str) -> LogResult<()> {
        let mut target = FileTarget::new(&self.config.output_path);
        self.log_to(&mut target, LogLevel::Debug, message)
    }

    pub fn info(&self, message: &str) -> LogResult<()> {
        self.log_to(&mut TerminalTarget, LogLevel::Info, message)
    }

    /// Renders `message` at `level` and writes it to `target`. Colors are
    /// used only for [`LogLevel::Info`] on a target that supports them; debug
    /// output is always monochrome.
    pub fn log_to<T>(&self, target: &mut T, level: LogLevel, message: &str) -> LogResult<()>
    where
        T: LogTarget + ?Sized,
    {
        let palette = match level {
            LogLevel::Info if target.supports_color() => Palette::Configured,
            _ => Palette::Monochrome,
        };

        let segments = self.render(message, level, palette, Local::now());
        target.write(&segments)
    }

    /// Expands the template once per chunk of `message`, each expansion
    /// followed by [`Segment::EndOfLine`].
    pub fn render(
        &self,
        message: &str,
        level: LogLevel,
        palette: Palette,
        now: DateTime<Local>,
    ) -> Vec<Segment> {
        let LoggerConfig {
            user_name,
            template,
            max_chunk_width,
            time_format,
            ..
        } = &self.config;

        let time = format_time(&now, time_format);
        let chunks = chunk_message(message, *max_chunk_width);
        let mut segments = Vec::with_capacity(chunks.len() * (template.len() + 1));

        for chunk in chunks {
            let ctx = MacroContext {
                time: &time,
                user: user_name,
                level,
                chunk,
            };

            segments.extend(template.iter().map(|token| {
                let color = match palette {
                    Palette::Monochrome => None,
                    Palette::Configured => token.color,
                };

                Segment::text(token.name.resolve(&ctx), color)
            }));
            segments.push(Segment::EndOfLine);
        }

        segments
    }

    /// Updates the fields named by `options`; see [`LoggerConfig::apply`].
    pub fn configure<I>(&mut self, options: I) -> LogResult<()>
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        self.config.apply(options)
    }

    /// Updates the fields whose keys appear in `table`, ignoring other keys.
    pub fn configure_table(&mut self, table: &toml::Table) -> LogResult<()> {
        let patch = ConfigPatch::from_table(table)?;
        self.configure(patch.into_options())
    }

    pub fn set_file(&mut self, path: impl Into<PathBuf>) {
        self.config.output_path = path.into();
    }

    pub fn set_format(&mut self, template: Template) {
        self.config.template = template;
    }

    pub fn set_colors<I, S>(&mut self, colors: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.template.set_colors(colors);
    }
}

/// Formats `now` with a strftime pattern. A pattern chrono cannot render is
/// printed as is.
fn format_time(now: &DateTime<Local>, time_format: &str) -> String {
    let mut time = String::new();

    if write!(time, "{}", now.format(time_format)).is_err() {
        time.clear();
        time.push_str(time_format);
    }

    time
}
