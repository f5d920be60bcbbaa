// src/core/config.rs
use log::LevelFilter;
use std::env;
use std::path::PathBuf;

use crate::models::AutoConfig;

// Configuration for the password generator binary
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub max_password_length: usize,
    pub auto_length_min: usize,
    pub auto_length_max: usize,

    // Storage
    pub password_file: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 12,
            max_password_length: 128,
            auto_length_min: 12,
            auto_length_max: 18,

            // Storage
            password_file: PathBuf::from("passwords.txt"),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Also returns a message for every value that was set but rejected. No
    /// logger is installed yet at this point, so the caller reports them once
    /// logging is up.
    pub fn load() -> (Self, Vec<String>) {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset values keep their
    /// defaults; unparsable ones keep their defaults and add a warning.
    pub fn load_from<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        let lengths = [
            ("DEFAULT_PASSWORD_LENGTH", &mut config.default_password_length),
            ("MAX_PASSWORD_LENGTH", &mut config.max_password_length),
            ("AUTO_LENGTH_MIN", &mut config.auto_length_min),
            ("AUTO_LENGTH_MAX", &mut config.auto_length_max),
        ];
        for (key, field) in lengths {
            if let Some(val) = lookup(key) {
                match val.trim().parse() {
                    Ok(length) => *field = length,
                    Err(_) => warnings.push(format!(
                        "Ignoring invalid {} '{}', using {}",
                        key, val, field
                    )),
                }
            }
        }

        // Storage
        if let Some(file) = lookup("PASSWORD_FILE") {
            if !file.trim().is_empty() {
                config.password_file = PathBuf::from(file);
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_level_filter(&level) {
                Some(filter) => config.log_level = filter,
                None => warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }

    pub fn auto_config(&self) -> AutoConfig {
        AutoConfig {
            min_length: self.auto_length_min,
            max_length: self.auto_length_max,
        }
    }
}

pub fn parse_level_filter(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
