// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::generators::charset::CharacterClass;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl PasswordGenerationOptions {
    /// Selected classes, in canonical order.
    pub fn selected_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Upper => self.include_uppercase,
            CharacterClass::Lower => self.include_lowercase,
            CharacterClass::Digits => self.include_numbers,
            CharacterClass::Special => self.include_symbols,
        }
    }

    pub fn has_any_class(&self) -> bool {
        self.include_uppercase
            || self.include_lowercase
            || self.include_numbers
            || self.include_symbols
    }
}

/// Range used when the configuration itself is picked at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoConfig {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for AutoConfig {
    fn default() -> Self {
        Self {
            min_length: 12,
            max_length: 18,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Verdict {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Weak => write!(f, "Weak"),
            Verdict::Moderate => write!(f, "Moderate"),
            Verdict::Strong => write!(f, "Strong"),
        }
    }
}

/// Result of analyzing a password.
///
/// `verdict` is derived from `score` and is the authoritative rating.
/// `entropy_verdict` is derived from `entropy_bits` alone and is only
/// informational; the two can disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub length: usize,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub entropy_bits: f64,
    pub score: u8,
    pub verdict: Verdict,
    pub entropy_verdict: Verdict,
    pub feedback: Vec<String>,
}
