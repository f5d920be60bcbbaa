// src/logging/mod.rs
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use env_logger::{Builder, Target};
use thiserror::Error;

use crate::core::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialized: {0}")]
    InitError(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Install the global logger.
///
/// Logs go to stderr unless `config.log_file` is set, in which case they are
/// appended to that file. Generated passwords are printed on stdout and are
/// never logged.
pub fn init(config: &Config) -> Result<()> {
    let mut builder = build(config)?;
    builder.try_init()?;
    log::debug!("Logging initialized at level {}", config.log_level);
    Ok(())
}

// Build the logger without installing it
fn build(config: &Config) -> Result<Builder> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);

    match &config.log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    Ok(builder)
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_log_file_creates_parents() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("logs").join("passgen.log");

        open_log_file(&path)?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_build_with_log_file() -> Result<()> {
        let dir = tempdir()?;
        let config = Config {
            log_file: Some(dir.path().join("app.log")),
            ..Config::default()
        };

        build(&config)?;
        assert!(dir.path().join("app.log").exists());
        Ok(())
    }
}
