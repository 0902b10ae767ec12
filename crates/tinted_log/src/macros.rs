/// Formats its arguments and appends them to the default logger's file.
///
/// ```no_run
/// tinted_log::debug!("loaded {} entries", 42).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($($args:tt)*) => {
        $crate::debug(format!($($args)*))
    };
}

/// Formats its arguments and prints them through the default logger.
#[macro_export]
macro_rules! info {
    ($($args:tt)*) => {
        $crate::info(format!($($args)*))
    };
}
