use std::{
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock, PoisonError},
};

use crate::{
    config::ConfigOption, format_token::Template, log_error::LogResult, logger::Logger,
};

static DEFAULT_LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Installs `logger`, or `Logger::default()`, as the process-wide instance
/// behind the free functions of this crate.
///
/// Only the first call has an effect; returns whether this call installed
/// the instance. Using any free function before `init_logging` installs the
/// default logger.
pub fn init_logging(logger: Option<Logger>) -> bool {
    let mut installed = false;

    DEFAULT_LOGGER.get_or_init(|| {
        installed = true;
        Mutex::new(logger.unwrap_or_default())
    });

    installed
}

/// Locks the process-wide logger. Hold the guard only briefly: every free
/// function in this crate waits on it.
pub fn default_logger() -> MutexGuard<'static, Logger> {
    DEFAULT_LOGGER
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

pub fn debug(message: impl AsRef<str>) -> LogResult<()> {
    default_logger().debug(message.as_ref())
}

pub fn info(message: impl AsRef<str>) -> LogResult<()> {
    default_logger().info(message.as_ref())
}

pub fn configure<I>(options: I) -> LogResult<()>
where
    I: IntoIterator<Item = ConfigOption>,
{
    default_logger().configure(options)
}

pub fn configure_table(table: &toml::Table) -> LogResult<()> {
    default_logger().configure_table(table)
}

pub fn set_file(path: impl Into<PathBuf>) {
    default_logger().set_file(path);
}

pub fn set_format(template: Template) {
    default_logger().set_format(template);
}

pub fn set_colors<I, S>(colors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    default_logger().set_colors(colors);
}
