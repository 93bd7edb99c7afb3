//! log4rs setup.
//!
//! Logs always go to stderr; stdout is reserved for `--help` and `--version`.

use crate::config::Settings;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

pub const STDERR_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%S%.3f)} {h({l})} {t} - {m}{n}";

/// Console logger on stderr at the given root level.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Install the global logger.
///
/// Uses `settings.log_config` when that file exists, otherwise [`stderr_config`].
pub fn init(settings: &Settings) -> Result<(), Box<dyn Error>> {
    if settings.log_config.is_file() {
        log4rs::init_file(&settings.log_config, Default::default())?;
        log::debug!("logging from {}", settings.log_config.display());
    } else {
        log4rs::init_config(stderr_config(settings.log_level)?)?;
        log::debug!("logging to stderr at {}", settings.log_level);
    }
    Ok(())
}
