// src/generators/charset.rs
//! Character classes used to build password pools.
//!
//! The four classes are disjoint ASCII sets. The analyzer reuses them to
//! infer a pool size from a password's content, so both sides always agree
//! on what counts as a "special" character.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
/// The 32 printable ASCII punctuation characters.
pub const SPECIAL: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digits,
    Special,
}

impl CharacterClass {
    /// Canonical order. Generation draws mandatory characters in this order
    /// and the pool is concatenated in this order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    pub fn charset(self) -> &'static str {
        match self {
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn chars(self) -> Vec<char> {
        self.charset().chars().collect()
    }

    /// Number of characters in the class. All classes are ASCII, so this is
    /// also the byte length.
    pub fn size(self) -> usize {
        self.charset().len()
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharacterClass::Upper => c.is_ascii_uppercase(),
            CharacterClass::Lower => c.is_ascii_lowercase(),
            CharacterClass::Digits => c.is_ascii_digit(),
            CharacterClass::Special => c.is_ascii_punctuation(),
        }
    }

    /// Which class a character belongs to, if any. Whitespace, control
    /// characters and anything non-ASCII fall outside every class.
    pub fn classify(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Upper => write!(f, "uppercase (A-Z)"),
            CharacterClass::Lower => write!(f, "lowercase (a-z)"),
            CharacterClass::Digits => write!(f, "digits (0-9)"),
            CharacterClass::Special => write!(f, "special characters"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_class_sizes() {
        assert_eq!(CharacterClass::Upper.size(), 26);
        assert_eq!(CharacterClass::Lower.size(), 26);
        assert_eq!(CharacterClass::Digits.size(), 10);
        assert_eq!(CharacterClass::Special.size(), 32);
    }

    #[test]
    fn test_classes_are_disjoint() {
        let mut seen = HashSet::new();
        for class in CharacterClass::ALL {
            for c in class.chars() {
                assert!(seen.insert(c), "{:?} appears in more than one class", c);
            }
        }
        assert_eq!(seen.len(), 94);
    }

    #[test]
    fn test_contains_matches_charset() {
        for class in CharacterClass::ALL {
            for c in class.chars() {
                assert!(class.contains(c));
                assert_eq!(CharacterClass::classify(c), Some(class));
            }
        }
    }

    #[test]
    fn test_classify_outside_classes() {
        assert_eq!(CharacterClass::classify(' '), None);
        assert_eq!(CharacterClass::classify('\n'), None);
        assert_eq!(CharacterClass::classify('é'), None);
        assert_eq!(CharacterClass::classify('Ж'), None);
    }
}
