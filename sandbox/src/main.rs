use anyhow::{Context, Result};
use tinted_config::{config_path, get_config, get_config_section};
use tinted_log::{debug, info, ConfigPatch, Logger};

fn main() -> Result<()> {
    let config = get_config()
        .with_context(|| format!("Could not load `{}`", config_path().display()))?;
    let patch: ConfigPatch = get_config_section(&config)?;

    let mut logger = Logger::default();
    logger.configure(patch.into_options())?;
    tinted_log::init_logging(Some(logger));

    info!("sandbox started")?;
    info!("this message is long enough to be wrapped over several lines of output")?;
    let output_path = tinted_log::default_logger().config().output_path.clone();
    debug!("written to {}", output_path.display())?;

    tinted_log::set_colors(["green", "yellow"]);
    info!("recolored")?;

    Ok(())
}
