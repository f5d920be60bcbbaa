// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod password;

pub use charset::CharacterClass;
pub use password::{generate_password, random_options, PasswordGenerator};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("No character set selected for password generation")]
    InvalidConfiguration,

    #[error("Invalid password length: {0}")]
    InvalidLength(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
