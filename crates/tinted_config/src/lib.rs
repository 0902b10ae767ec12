use std::{
    env, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use toml::Table;

pub const CONFIG_PATH_VAR: &str = "TINTED_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "tinted.toml";

pub trait ConfigSection: for<'a> Deserialize<'a> + Default {
    fn section_name() -> &'static str;
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config `{}`: {source}", path.display())]
    FailedToRead { path: PathBuf, source: io::Error },
    #[error("Failed to parse config: {0}")]
    FailedToParse(#[from] toml::de::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Path of the config file: `$TINTED_CONFIG_PATH`, or `tinted.toml` in the
/// working directory.
pub fn config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Loads the config table from [`config_path`].
pub fn get_config() -> ConfigResult<Table> {
    load_config(config_path())
}

/// Reads and parses a TOML file. A file that does not exist is an empty table.
pub fn load_config<P: AsRef<Path>>(path: P) -> ConfigResult<Table> {
    let path = path.as_ref();

    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(contents.parse()?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Table::new()),
        Err(source) => Err(ConfigError::FailedToRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Deserializes the section `C` out of `config`, falling back to
/// `C::default()` when the section is absent.
pub fn get_config_section<C: ConfigSection>(config: &Table) -> ConfigResult<C> {
    if let Some(value) = config.get(C::section_name()) {
        value.clone().try_into().map_err(|err| err.into())
    } else {
        Ok(Default::default())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Section {
        name: Option<String>,
    }

    impl ConfigSection for Section {
        fn section_name() -> &'static str {
            "section"
        }
    }

    #[test]
    fn should_treat_missing_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let table = load_config(dir.path().join("absent.toml")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn should_report_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is = = not toml").unwrap();

        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::FailedToParse(_))));
    }

    #[test]
    fn should_read_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[section]\nname = \"value\"\nextra = 1").unwrap();

        let table = load_config(file.path()).unwrap();
        let section: Section = get_config_section(&table).unwrap();
        assert_eq!(section.name.as_deref(), Some("value"));
    }

    #[test]
    fn should_default_absent_section() {
        let section: Section = get_config_section(&Table::new()).unwrap();
        assert_eq!(section, Section::default());
    }
}
