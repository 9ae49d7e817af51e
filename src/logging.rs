//! log4rs set-up.
//!
//! Results go to stdout, so every log record is sent to stderr.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_APPENDER: &str = "stderr";

/// Initialise logging from `config_file`, or with [`default_config`] when the
/// file does not exist.
pub fn init_logging(config_file: &Path) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        log4rs::init_file(config_file, Default::default())?;
        log::debug!("Logging configured from {}", config_file.display());
    } else {
        log4rs::init_config(default_config(LevelFilter::Warn)?)?;
    }
    Ok(())
}

/// Console logging to stderr at `level`.
pub fn default_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))?;
    Ok(config)
}
