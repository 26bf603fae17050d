//! Platform logging initialization for cloudboard.
//!
//! The dashboard draws on the terminal, so logs only ever go to a file.

use std::fs::File;
use std::path::Path;

use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

use super::config::{DashboardConfig, LogDestination};

/// Initialize the global logger from the dashboard config.
pub fn initialize(config: &DashboardConfig) {
    let loggers: Vec<Box<dyn SharedLogger>> = match config.log_destination {
        LogDestination::Off => return,
        LogDestination::File => {
            match create_file_logger(&config.log_file, config.log_level.into(), build_config()) {
                Some(file_logger) => vec![file_logger],
                None => return,
            }
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(log::LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: log::LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
