// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

use crate::core::Config;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate random passwords and score their strength",
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// File that saved passwords are appended to
    #[arg(long, short, env = "PASSWORD_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Generation flags used when no subcommand is given
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Command to execute (generate when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

pub fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let password_file = args
        .file
        .clone()
        .unwrap_or_else(|| config.password_file.clone());

    match args.command {
        Some(CliCommand::Generate(generate)) => {
            handlers::handle_generate(&generate, config, &password_file, args.json)
        }
        None => handlers::handle_generate(&args.generate, config, &password_file, args.json),
        Some(CliCommand::Analyze { password }) => handlers::handle_analyze(&password, args.json),
        Some(CliCommand::Auto { save }) => {
            handlers::handle_auto(config, save.then_some(password_file.as_path()), args.json)
        }
        Some(CliCommand::Menu) => menu::run_cli_menu(config, &password_file),
    }
}
