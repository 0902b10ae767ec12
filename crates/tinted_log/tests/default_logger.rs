use std::fs;

use tinted_log::{ChunkWidth, ConfigOption, Logger, Template};

// The default logger is shared by the whole test binary, so everything that
// touches it lives in this one test.
#[test]
fn should_route_free_functions_through_default_logger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("default.log");

    let logger = Logger::builder()
        .with_user_name("tester")
        .with_token("user:magenta")
        .with_token("level")
        .with_token("message")
        .with_max_chunk_width(ChunkWidth::Unbounded)
        .build();

    assert!(tinted_log::init_logging(Some(logger)));
    assert!(!tinted_log::init_logging(None));
    assert_eq!(tinted_log::default_logger().config().user_name, "tester");

    tinted_log::set_file(&path);
    tinted_log::debug("first").unwrap();
    tinted_log::debug!("second {}", 2).unwrap();

    tinted_log::configure_table(&"userName = \"alice\"\nunknown = true".parse().unwrap()).unwrap();
    tinted_log::configure([ConfigOption::MaxChunkWidth(ChunkWidth::limited(3).unwrap())]).unwrap();
    tinted_log::set_format(Template::from_iter(["user:blue", "message"]));
    tinted_log::set_colors(["red"]);
    tinted_log::debug("abcdefg").unwrap();

    tinted_log::info("printed to stdout").unwrap();
    tinted_log::info!("{} too", "formatted").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "tester DEBUG first \n\
         tester DEBUG second 2 \n\
         alice abc \n\
         alice def \n\
         alice g \n"
    );

    let logger = tinted_log::default_logger();
    let template = &logger.config().template;
    let colors: Vec<_> = template.iter().map(|token| token.color).collect();
    assert_eq!(colors, [Some(tinted_log::Color::Red), None]);
}
