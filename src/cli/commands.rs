// src/cli/commands.rs
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password from the selected character classes
    Generate(GenerateArgs),

    /// Check the strength of a password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Generate a password with a randomly chosen configuration
    Auto {
        /// Append the password to the password file
        #[arg(long)]
        save: bool,
    },

    /// Open the interactive menu
    Menu,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Include uppercase letters (A-Z)
    #[arg(long)]
    pub upper: bool,

    /// Include lowercase letters (a-z)
    #[arg(long)]
    pub lower: bool,

    /// Include digits (0-9)
    #[arg(long)]
    pub digits: bool,

    /// Include punctuation symbols
    #[arg(long)]
    pub symbols: bool,

    /// Include all four character classes
    #[arg(short, long)]
    pub all: bool,

    /// Append the password to the password file
    #[arg(long)]
    pub save: bool,
}
