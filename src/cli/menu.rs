// src/cli/menu.rs
use inquire::{Confirm, InquireError, Password, Select, Text};
use std::path::Path;

use crate::core::Config;
use crate::generators::PasswordGenerator;
use crate::models::PasswordGenerationOptions;
use crate::utils::{render_options, render_report, save_password};

const GENERATE: &str = "🔐  Generate password (manual inputs)";
const CHECK: &str = "🔍  Check password strength";
const AUTO: &str = "🎲  Auto-generate password (computer chooses)";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(config: &Config, password_file: &Path) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 PASSWORD GENERATOR         ║");
    println!("╚══════════════════════════════════════╝");

    let generator = PasswordGenerator::new();

    loop {
        let selection = Select::new("Choose an option:", vec![GENERATE, CHECK, AUTO, EXIT])
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable();

        let result = match selection {
            Ok(Some(GENERATE)) => generate_manual(&generator, config, password_file),
            Ok(Some(CHECK)) => check_strength(&generator),
            Ok(Some(AUTO)) => generate_auto(&generator, config, password_file),
            Ok(Some(_)) | Ok(None) => break,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match result {
            Ok(()) => {}
            // Ctrl+C inside a sub-prompt returns to the main menu
            Err(InquireError::OperationInterrupted) | Err(InquireError::OperationCanceled) => {
                println!();
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("\n👋 Thanks for using the Password Generator. Goodbye!");
    Ok(())
}

fn generate_manual(
    generator: &PasswordGenerator,
    config: &Config,
    password_file: &Path,
) -> Result<(), InquireError> {
    let options = prompt_options(config)?;

    match generator.generate_password(&options) {
        Ok(password) => {
            println!("\nGenerated Password: {}", password);
            print!("{}", render_report(&generator.analyze_password_strength(&password)));
            offer_save(&password, password_file)?;
        }
        Err(e) => println!("❌ Failed to generate password: {}", e),
    }

    Ok(())
}

fn generate_auto(
    generator: &PasswordGenerator,
    config: &Config,
    password_file: &Path,
) -> Result<(), InquireError> {
    let generated = generator
        .random_options(&config.auto_config())
        .and_then(|options| generator.generate_password(&options).map(|pw| (options, pw)));

    match generated {
        Ok((options, password)) => {
            println!("\nAuto-selected configuration:");
            print!("{}", render_options(&options));
            println!("\nAuto-Generated Password: {}", password);
            print!("{}", render_report(&generator.analyze_password_strength(&password)));
            offer_save(&password, password_file)?;
        }
        Err(e) => println!("❌ Failed to generate password: {}", e),
    }

    Ok(())
}

fn check_strength(generator: &PasswordGenerator) -> Result<(), InquireError> {
    let password = Password::new("Enter a password to check strength:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    print!("{}", render_report(&generator.analyze_password_strength(&password)));
    Ok(())
}

// Ask until the answers form a usable configuration. A length too short for
// the selected classes sends the user back to the length question.
fn prompt_options(config: &Config) -> Result<PasswordGenerationOptions, InquireError> {
    loop {
        let length = prompt_length(config)?;
        let options = prompt_classes(length)?;

        match check_length_fits(&options) {
            Ok(()) => return Ok(options),
            Err(message) => println!("❗ {}", message),
        }
    }
}

fn prompt_length(config: &Config) -> Result<usize, InquireError> {
    let default_length = config.default_password_length.to_string();

    loop {
        let input = Text::new("Password length:")
            .with_default(&default_length)
            .prompt()?;

        match parse_length_input(&input, config.max_password_length) {
            Ok(length) => return Ok(length),
            Err(message) => println!("❗ {}", message),
        }
    }
}

fn prompt_classes(length: usize) -> Result<PasswordGenerationOptions, InquireError> {
    loop {
        let options = PasswordGenerationOptions {
            length,
            include_uppercase: confirm("Include uppercase letters?")?,
            include_lowercase: confirm("Include lowercase letters?")?,
            include_numbers: confirm("Include digits?")?,
            include_symbols: confirm("Include special characters?")?,
        };

        if options.has_any_class() {
            return Ok(options);
        }
        println!("❗ At least one character type must be selected. Try again.");
    }
}

fn confirm(message: &str) -> Result<bool, InquireError> {
    Confirm::new(message).with_default(true).prompt()
}

fn offer_save(password: &str, password_file: &Path) -> Result<(), InquireError> {
    let save = Confirm::new("Would you like to save this password?")
        .with_default(false)
        .prompt()?;

    if save {
        match save_password(password_file, password) {
            Ok(()) => println!("✅ Password saved to {}", password_file.display()),
            Err(e) => println!("❌ Failed to save password: {}", e),
        }
    }

    Ok(())
}

/// A length shorter than the number of selected classes cannot be satisfied.
pub fn check_length_fits(options: &PasswordGenerationOptions) -> Result<(), String> {
    let class_count = options.selected_classes().len();
    if options.length < class_count {
        return Err(format!(
            "A {}-character password cannot hold all {} selected character types. \
             Enter a longer length.",
            options.length, class_count
        ));
    }
    Ok(())
}

/// Parse a length typed at the prompt, accepting `1..=max`.
pub fn parse_length_input(input: &str, max: usize) -> Result<usize, String> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| "Invalid input. Please enter an integer.".to_string())?;

    if value < 1 || value as u64 > max as u64 {
        return Err(format!("Enter a value between 1 and {}.", max));
    }

    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length_input() {
        assert_eq!(parse_length_input("16", 128), Ok(16));
        assert_eq!(parse_length_input(" 1 ", 128), Ok(1));
        assert_eq!(parse_length_input("128", 128), Ok(128));
    }

    #[test]
    fn test_parse_length_input_rejects() {
        assert!(parse_length_input("0", 128).is_err());
        assert!(parse_length_input("-3", 128).is_err());
        assert!(parse_length_input("129", 128).is_err());
        assert_eq!(
            parse_length_input("twelve", 128),
            Err("Invalid input. Please enter an integer.".to_string())
        );
    }

    #[test]
    fn test_check_length_fits() {
        let mut options = PasswordGenerationOptions {
            length: 3,
            ..PasswordGenerationOptions::default()
        };
        let message = check_length_fits(&options).unwrap_err();
        assert!(message.starts_with("A 3-character password cannot hold all 4"));

        options.length = 4;
        assert_eq!(check_length_fits(&options), Ok(()));

        options.include_symbols = false;
        options.length = 3;
        assert_eq!(check_length_fits(&options), Ok(()));
    }
}
