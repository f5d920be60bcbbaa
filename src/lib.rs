//! Random password generation and strength analysis.
//!
//! Two independent pieces:
//! - [`generate_password`] builds a password that contains at least one
//!   character of every selected class, using a cryptographic RNG.
//! - [`analyze`] scores any string out of 10 and estimates its entropy.
//!
//! ```no_run
//! use rand::rngs::OsRng;
//! use rust_passgen::{analyze, generate_password, PasswordGenerationOptions};
//!
//! let password = generate_password(&PasswordGenerationOptions::default(), &mut OsRng)?;
//! let report = analyze(&password);
//! println!("{} ({:.2} bits)", report.verdict, report.entropy_bits);
//! # Ok::<(), rust_passgen::GeneratorError>(())
//! ```

pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod strength;
pub mod utils;

pub use crate::core::Config;
pub use generators::{
    generate_password, random_options, CharacterClass, GeneratorError, PasswordGenerator,
};
pub use models::{AutoConfig, PasswordGenerationOptions, StrengthReport, Verdict};
pub use strength::analyze;
