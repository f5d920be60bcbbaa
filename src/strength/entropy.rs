// src/strength/entropy.rs
//! Entropy estimate from a password's observed character classes.
//!
//! This is an approximation under a uniform-random model. The real entropy
//! depends on how the password was produced, which the content alone cannot
//! reveal: `"Aaaaaaaa"` and a random 8-character mixed-case string get the same
//! estimate.

use crate::generators::charset::CharacterClass;
use crate::models::Verdict;

pub const STRONG_ENTROPY_BITS: f64 = 80.0;
pub const MODERATE_ENTROPY_BITS: f64 = 60.0;

/// Sum of the sizes of every class that appears at least once in `password`.
pub fn pool_size(password: &str) -> usize {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| password.chars().any(|c| class.contains(c)))
        .map(CharacterClass::size)
        .sum()
}

/// `log2(pool_size ^ length)`, computed as `length * log2(pool_size)` so long
/// passwords do not overflow.
pub fn calculate_entropy(length: usize, pool_size: usize) -> f64 {
    if length == 0 || pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

pub fn entropy_verdict(bits: f64) -> Verdict {
    if bits >= STRONG_ENTROPY_BITS {
        Verdict::Strong
    } else if bits >= MODERATE_ENTROPY_BITS {
        Verdict::Moderate
    } else {
        Verdict::Weak
    }
}
