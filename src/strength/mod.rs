// src/strength/mod.rs
//! Point-based password strength analysis.
//!
//! Seven independent checks contribute to a score out of [`MAX_SCORE`]. The
//! score maps to the authoritative [`Verdict`]; the entropy estimate maps to
//! a second, informational verdict reported next to it.

use std::collections::HashSet;
use std::fmt;

use crate::generators::charset::CharacterClass;
use crate::models::{StrengthReport, Verdict};

pub mod entropy;
pub mod patterns;

pub use entropy::{calculate_entropy, entropy_verdict, pool_size};
pub use patterns::{find_common_pattern, COMMON_PATTERNS};

pub const MAX_SCORE: u8 = 10;
pub const STRONG_SCORE: u8 = 8;
pub const MODERATE_SCORE: u8 = 5;

const CASE_VARIETY_POINTS: u8 = 2;
const DIVERSITY_RATIO: f64 = 0.7;
const UNIQUENESS_RATIO: f64 = 0.8;

/// Qualitative marker leading every feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Pass,
    Partial,
    Fail,
}

impl Marker {
    pub fn tag(self) -> &'static str {
        match self {
            Marker::Pass => "[PASS]",
            Marker::Partial => "[PARTIAL]",
            Marker::Fail => "[FAIL]",
        }
    }

    /// Marker a feedback line starts with, if any.
    pub fn of_line(line: &str) -> Option<Marker> {
        [Marker::Pass, Marker::Partial, Marker::Fail]
            .into_iter()
            .find(|marker| line.starts_with(marker.tag()))
    }

    fn from_check(passed: bool) -> Self {
        if passed {
            Marker::Pass
        } else {
            Marker::Fail
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

pub fn score_verdict(score: u8) -> Verdict {
    if score >= STRONG_SCORE {
        Verdict::Strong
    } else if score >= MODERATE_SCORE {
        Verdict::Moderate
    } else {
        Verdict::Weak
    }
}

/// Analyze any string. Never fails; the empty string yields a zero-entropy
/// `Weak` report.
pub fn analyze(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let has_upper = password.chars().any(|c| CharacterClass::Upper.contains(c));
    let has_lower = password.chars().any(|c| CharacterClass::Lower.contains(c));
    let has_digit = password.chars().any(|c| CharacterClass::Digits.contains(c));
    let has_special = password.chars().any(|c| CharacterClass::Special.contains(c));
    let distinct = password.chars().collect::<HashSet<_>>().len();

    let mut score = 0u8;
    let mut feedback = Vec::with_capacity(7);

    let (length_points, length_marker, length_note) = match length {
        n if n >= 16 => (3, Marker::Pass, "excellent, 16+"),
        n if n >= 12 => (2, Marker::Partial, "good, 12-15"),
        n if n >= 8 => (1, Marker::Partial, "acceptable, 8-11"),
        _ => (0, Marker::Fail, "too short, use at least 8"),
    };
    score += length_points;
    feedback.push(format!(
        "{} Length: {} characters ({})",
        length_marker, length, length_note
    ));

    let mixed_case = has_upper && has_lower;
    if mixed_case {
        score += CASE_VARIETY_POINTS;
        feedback.push(format!("{} Mixes uppercase and lowercase letters", Marker::Pass));
    } else {
        feedback.push(format!(
            "{} Does not mix uppercase and lowercase letters",
            Marker::Fail
        ));
    }

    if has_digit {
        score += 1;
    }
    feedback.push(format!(
        "{} {}",
        Marker::from_check(has_digit),
        if has_digit { "Contains digits" } else { "No digits" }
    ));

    if has_special {
        score += 1;
    }
    feedback.push(format!(
        "{} {}",
        Marker::from_check(has_special),
        if has_special {
            "Contains special characters"
        } else {
            "No special characters"
        }
    ));

    let diverse = distinct as f64 > DIVERSITY_RATIO * length as f64;
    if diverse {
        score += 1;
    }
    feedback.push(format!(
        "{} Character diversity: {} distinct of {}",
        Marker::from_check(diverse),
        distinct,
        length
    ));

    match find_common_pattern(password) {
        None => {
            score += 1;
            feedback.push(format!("{} No common patterns found", Marker::Pass));
        }
        Some(pattern) => {
            feedback.push(format!(
                "{} Contains common pattern \"{}\"",
                Marker::Fail,
                pattern
            ));
        }
    }

    let uniqueness = if length == 0 {
        0.0
    } else {
        distinct as f64 / length as f64
    };
    let unique = uniqueness > UNIQUENESS_RATIO;
    if unique {
        score += 1;
    }
    feedback.push(format!(
        "{} Uniqueness: {:.0}% of characters are distinct",
        Marker::from_check(unique),
        uniqueness * 100.0
    ));

    let entropy_bits = calculate_entropy(length, pool_size(password));

    StrengthReport {
        length,
        has_upper,
        has_lower,
        has_digit,
        has_special,
        entropy_bits,
        score,
        verdict: score_verdict(score),
        entropy_verdict: entropy_verdict(entropy_bits),
        feedback,
    }
}
