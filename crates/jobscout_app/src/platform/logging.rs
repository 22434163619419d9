//! Log setup for jobscout_app.
//!
//! The TUI owns the terminal, so runtime logs go to a single file:
//! `./jobscout.log` in the current working directory.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

const LOG_PATH: &str = "./jobscout.log";

/// Installs the file logger. When the log file cannot be created the app
/// keeps running without logs instead of refusing to start.
pub fn initialize() {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let log_path = PathBuf::from(LOG_PATH);
    match File::create(&log_path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Info, config, file);
        }
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_path, err
            );
        }
    }
}
