use std::{env, num::NonZeroUsize, path::PathBuf};

use chrono::{
    format::{Item, StrftimeItems},
    Local,
};
use serde::Deserialize;
use tinted_config::ConfigSection;

use crate::{
    format_token::Template,
    log_error::{LogError, LogResult},
};

pub const DEFAULT_USER: &str = "root";
pub const DEFAULT_TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";
pub const DEFAULT_CHUNK_WIDTH: usize = 20;
pub const DEFAULT_TEMPLATE: [&str; 4] = ["time:blue", "user:magenta", "level:cyan", "message:black"];

/// Longest run of message characters printed on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "ChunkWidthRepr")]
pub enum ChunkWidth {
    Limited(NonZeroUsize),
    Unbounded,
}

impl ChunkWidth {
    /// `None` for a zero width.
    pub fn limited(width: usize) -> Option<Self> {
        NonZeroUsize::new(width).map(Self::Limited)
    }
}

impl Default for ChunkWidth {
    fn default() -> Self {
        Self::Limited(NonZeroUsize::new(DEFAULT_CHUNK_WIDTH).unwrap_or(NonZeroUsize::MIN))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChunkWidthRepr {
    Width(u64),
    Keyword(String),
}

const UNBOUNDED_KEYWORD: &str = "unbounded";

impl TryFrom<ChunkWidthRepr> for ChunkWidth {
    type Error = String;

    fn try_from(value: ChunkWidthRepr) -> Result<Self, Self::Error> {
        match value {
            ChunkWidthRepr::Keyword(keyword) if keyword.eq_ignore_ascii_case(UNBOUNDED_KEYWORD) => {
                Ok(Self::Unbounded)
            }
            ChunkWidthRepr::Keyword(keyword) => Err(format!(
                "chunk width must be a positive integer or `{UNBOUNDED_KEYWORD}`, got `{keyword}`"
            )),
            ChunkWidthRepr::Width(width) => usize::try_from(width)
                .ok()
                .and_then(Self::limited)
                .ok_or_else(|| format!("chunk width must be a positive integer, got {width}")),
        }
    }
}

/// Everything a [`Logger`](crate::Logger) reads when rendering a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub output_path: PathBuf,
    pub user_name: String,
    pub template: Template,
    pub max_chunk_width: ChunkWidth,
    pub time_format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            user_name: default_user_name(),
            template: DEFAULT_TEMPLATE.into_iter().collect(),
            max_chunk_width: ChunkWidth::default(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Applies every option in order. All of them are checked first, so a
    /// rejected option leaves the config untouched.
    pub fn apply<I>(&mut self, options: I) -> LogResult<()>
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        let options: Vec<ConfigOption> = options.into_iter().collect();

        for option in &options {
            if let ConfigOption::TimeFormat(format) = option {
                validate_time_format(format)?;
            }
        }

        for option in options {
            match option {
                ConfigOption::OutputPath(path) => self.output_path = path,
                ConfigOption::UserName(name) => self.user_name = name,
                ConfigOption::Template(template) => self.template = template,
                ConfigOption::MaxChunkWidth(width) => self.max_chunk_width = width,
                ConfigOption::TimeFormat(format) => self.time_format = format,
                ConfigOption::Colors(colors) => self.template.set_colors(colors),
            }
        }

        Ok(())
    }
}

/// A single field update for [`LoggerConfig::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOption {
    OutputPath(PathBuf),
    UserName(String),
    /// Replaces the whole template.
    Template(Template),
    MaxChunkWidth(ChunkWidth),
    /// A strftime pattern, see [`chrono::format::strftime`].
    TimeFormat(String),
    /// Re-colors the current template by position.
    Colors(Vec<String>),
}

/// Key-value form of the configuration, as read from TOML.
///
/// Keys are accepted in `snake_case` and `camelCase`, but a table may only
/// use one spelling per field: `userName` next to `user_name` is a duplicate
/// field error. Keys that are not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    #[serde(alias = "outputPath")]
    pub output_path: Option<PathBuf>,
    #[serde(alias = "userName")]
    pub user_name: Option<String>,
    pub template: Option<Template>,
    #[serde(alias = "maxChunkWidth")]
    pub max_chunk_width: Option<ChunkWidth>,
    #[serde(alias = "timeFormat")]
    pub time_format: Option<String>,
    pub colors: Option<Vec<String>>,
}

impl ConfigSection for ConfigPatch {
    fn section_name() -> &'static str {
        "log"
    }
}

impl ConfigPatch {
    pub fn from_table(table: &toml::Table) -> LogResult<Self> {
        Ok(toml::Value::Table(table.clone()).try_into()?)
    }

    /// Options in application order: colors come after the template they
    /// apply to.
    pub fn into_options(self) -> Vec<ConfigOption> {
        let ConfigPatch {
            output_path,
            user_name,
            template,
            max_chunk_width,
            time_format,
            colors,
        } = self;

        [
            output_path.map(ConfigOption::OutputPath),
            user_name.map(ConfigOption::UserName),
            template.map(ConfigOption::Template),
            max_chunk_width.map(ConfigOption::MaxChunkWidth),
            time_format.map(ConfigOption::TimeFormat),
            colors.map(ConfigOption::Colors),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

pub fn validate_time_format(format: &str) -> LogResult<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        Err(LogError::InvalidTimeFormat(format.to_string()))
    } else {
        Ok(())
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "LOGS {}.txt",
        Local::now().format(DEFAULT_TIME_FORMAT)
    ))
}

fn default_user_name() -> String {
    ["USER", "USERNAME"]
        .into_iter()
        .find_map(|var| env::var(var).ok().filter(|name| !name.is_empty()))
        .unwrap_or_else(|| DEFAULT_USER.to_string())
}
