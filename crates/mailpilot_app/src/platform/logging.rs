//! Platform logging initialization for mailpilot_app.
//!
//! The terminal belongs to the UI, so logs go to `./mailpilot.log` in the
//! current working directory. The level comes from `MAILPILOT_LOG`.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

pub const LOG_FILENAME: &str = "mailpilot.log";

/// Initialize the file logger. Returns the log path on success.
///
/// Failing to create the file is not fatal; the app runs without logs.
pub fn initialize() -> Option<PathBuf> {
    let level = mailpilot_logging::level_from_env(LevelFilter::Info);
    let path = PathBuf::from(".").join(LOG_FILENAME);
    let file = open_log_file(&path, level)?;
    WriteLogger::init(level, build_config(), file).ok()?;
    Some(path)
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("rustls")
        .build()
}

fn open_log_file(path: &Path, level: LevelFilter) -> Option<File> {
    if level == LevelFilter::Off {
        return None;
    }
    match File::create(path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
