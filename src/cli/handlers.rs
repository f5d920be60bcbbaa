// src/cli/handlers.rs
use serde::Serialize;
use std::path::Path;

use crate::cli::GenerateArgs;
use crate::core::Config;
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{PasswordGenerationOptions, StrengthReport};
use crate::utils::{render_options, render_report, save_password};

#[derive(Serialize)]
struct GenerationOutput<'a> {
    password: &'a str,
    options: &'a PasswordGenerationOptions,
    report: &'a StrengthReport,
}

/// Convert a user-supplied length. Zero and negative values are rejected the
/// same way the generator rejects a zero length.
pub fn checked_length(raw: i64) -> Result<usize, GeneratorError> {
    if raw <= 0 {
        return Err(GeneratorError::InvalidLength(format!(
            "length must be greater than zero, got {}",
            raw
        )));
    }
    usize::try_from(raw)
        .map_err(|_| GeneratorError::InvalidLength(format!("length {} is too large", raw)))
}

// Options from command line flags. No class flag means no class: the
// generator reports that instead of a default being picked here.
pub fn options_from_args(
    args: &GenerateArgs,
    config: &Config,
) -> Result<PasswordGenerationOptions, GeneratorError> {
    let length = match args.length {
        Some(raw) => checked_length(raw)?,
        None => config.default_password_length,
    };

    Ok(PasswordGenerationOptions {
        length,
        include_uppercase: args.all || args.upper,
        include_lowercase: args.all || args.lower,
        include_numbers: args.all || args.digits,
        include_symbols: args.all || args.symbols,
    })
}

pub fn handle_generate(
    args: &GenerateArgs,
    config: &Config,
    password_file: &Path,
    json: bool,
) -> anyhow::Result<()> {
    let options = options_from_args(args, config)?;
    let generator = PasswordGenerator::new();

    let password = generator.generate_password(&options)?;
    let report = generator.analyze_password_strength(&password);

    // A failed save must not leave a password on stdout
    if args.save {
        save_password(password_file, &password)?;
    }

    if json {
        print_json(&GenerationOutput {
            password: &password,
            options: &options,
            report: &report,
        })?;
    } else {
        println!("Generated Password: {}", password);
        print!("{}", render_report(&report));
        if args.save {
            println!("✅ Password saved to {}", password_file.display());
        }
    }

    Ok(())
}

pub fn handle_analyze(password: &str, json: bool) -> anyhow::Result<()> {
    let report = crate::strength::analyze(password);

    if json {
        print_json(&report)?;
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

pub fn handle_auto(config: &Config, save_to: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let generator = PasswordGenerator::new();

    let options = generator.random_options(&config.auto_config())?;
    let password = generator.generate_password(&options)?;
    let report = generator.analyze_password_strength(&password);

    if let Some(path) = save_to {
        save_password(path, &password)?;
    }

    if json {
        print_json(&GenerationOutput {
            password: &password,
            options: &options,
            report: &report,
        })?;
    } else {
        println!("Auto-selected configuration:");
        print!("{}", render_options(&options));
        println!("\nAuto-Generated Password: {}", password);
        print!("{}", render_report(&report));
        if let Some(path) = save_to {
            println!("✅ Password saved to {}", path.display());
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
