//! File logging for demos and embedding applications.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config as LogConfig, WriteLogger};

use crate::config::Config;
use crate::error::LogInitError;

/// Send all `log` output at or below `level` to a file, truncating it.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LogInitError> {
    let file = File::create(path)?;
    WriteLogger::init(level, LogConfig::default(), file)?;
    Ok(())
}

/// Install the file logger described by `config`.
/// Returns `Ok(false)` when no log file is configured.
pub fn init_from_config(config: &Config) -> Result<bool, LogInitError> {
    match &config.log_file {
        Some(path) => {
            init_file_logger(path, config.log_level)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
