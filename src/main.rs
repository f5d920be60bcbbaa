use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use rust_passgen::cli::{self, Args};
use rust_passgen::core::Config;
use rust_passgen::logging;

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, config_warnings) = Config::load();

    match logging::init(&config) {
        Ok(()) => {
            for warning in &config_warnings {
                log::warn!("{}", warning);
            }
        }
        Err(e) => {
            eprintln!("⚠️ Failed to initialize logging: {}", e);
            for warning in &config_warnings {
                eprintln!("⚠️ {}", warning);
            }
        }
    }

    log::debug!("Loaded config: {:?}", config);

    match cli::run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
