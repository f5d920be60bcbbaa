// src/generators/password.rs
use log::{debug, warn};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_core::CryptoRng;

use super::charset::CharacterClass;
use super::{GeneratorError, Result};
use crate::models::{AutoConfig, PasswordGenerationOptions, StrengthReport};

/// Generate a password that holds at least one character of every selected
/// class.
///
/// One character is drawn from each selected class, the rest are drawn from
/// the union of all selected classes, and the whole sequence is shuffled.
/// Every draw and the shuffle use `rng`, which must be a cryptographic
/// generator; passing a seedable statistical PRNG does not compile.
pub fn generate_password<R>(options: &PasswordGenerationOptions, rng: &mut R) -> Result<String>
where
    R: Rng + CryptoRng + ?Sized,
{
    let classes = options.selected_classes();
    if classes.is_empty() {
        warn!("Rejected password request: no character class selected");
        return Err(GeneratorError::InvalidConfiguration);
    }

    if options.length == 0 {
        warn!("Rejected password request: zero length");
        return Err(GeneratorError::InvalidLength(
            "length must be greater than zero".to_string(),
        ));
    }

    if options.length < classes.len() {
        warn!(
            "Rejected password request: length {} below {} selected classes",
            options.length,
            classes.len()
        );
        return Err(GeneratorError::InvalidLength(format!(
            "length {} is too short to include all {} selected character classes",
            options.length,
            classes.len()
        )));
    }

    let mut password: Vec<char> = Vec::with_capacity(options.length);

    // Mandatory characters, one per class
    for class in &classes {
        password.push(pick(&class.chars(), rng));
    }

    let pool: Vec<char> = classes.iter().flat_map(|class| class.charset().chars()).collect();
    let dist = Uniform::from(0..pool.len());
    for _ in classes.len()..options.length {
        password.push(pool[dist.sample(rng)]);
    }

    // Fisher-Yates, so the mandatory characters are not left at the front
    password.shuffle(rng);

    debug!(
        "Generated password of length {} from {} classes (pool size {})",
        password.len(),
        classes.len(),
        pool.len()
    );

    Ok(password.into_iter().collect())
}

/// Pick a random configuration: a length within `auto`'s bounds and a random
/// subset of classes, redrawn until at least one class is selected.
pub fn random_options<R>(auto: &AutoConfig, rng: &mut R) -> Result<PasswordGenerationOptions>
where
    R: Rng + CryptoRng + ?Sized,
{
    if auto.min_length < CharacterClass::ALL.len() {
        return Err(GeneratorError::InvalidLength(format!(
            "automatic length range must start at {} or more, got {}",
            CharacterClass::ALL.len(),
            auto.min_length
        )));
    }
    if auto.min_length > auto.max_length {
        return Err(GeneratorError::InvalidLength(format!(
            "automatic length range {}..={} is empty",
            auto.min_length, auto.max_length
        )));
    }

    let length = rng.gen_range(auto.min_length..=auto.max_length);

    loop {
        let options = PasswordGenerationOptions {
            length,
            include_uppercase: rng.gen_bool(0.5),
            include_lowercase: rng.gen_bool(0.5),
            include_numbers: rng.gen_bool(0.5),
            include_symbols: rng.gen_bool(0.5),
        };

        if options.has_any_class() {
            debug!("Auto-selected configuration: {:?}", options);
            return Ok(options);
        }
    }
}

fn pick<R: Rng + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.gen_range(0..chars.len())]
}

/// Generator bound to the operating system's random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        generate_password(options, &mut OsRng)
    }

    pub fn random_options(&self, auto: &AutoConfig) -> Result<PasswordGenerationOptions> {
        random_options(auto, &mut OsRng)
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthReport {
        crate::strength::analyze(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn options(
        length: usize,
        upper: bool,
        lower: bool,
        digits: bool,
        symbols: bool,
    ) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: digits,
            include_symbols: symbols,
        }
    }

    #[test]
    fn test_password_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for length in [4, 5, 12, 16, 64, 1000] {
            let pwd =
                generate_password(&options(length, true, true, true, true), &mut rng).unwrap();
            assert_eq!(pwd.chars().count(), length);
        }
    }

    #[test]
    fn test_only_uppercase() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let pwd = generate_password(&options(10, true, false, false, false), &mut rng).unwrap();
        assert!(pwd.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_length_equal_to_class_count() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let pwd = generate_password(&options(4, true, true, true, true), &mut rng).unwrap();
        for class in CharacterClass::ALL {
            assert_eq!(pwd.chars().filter(|c| class.contains(*c)).count(), 1);
        }
    }

    #[test]
    fn test_no_class_selected_fails_before_length_check() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for length in [0, 1, 10] {
            let none = options(length, false, false, false, false);
            let err = generate_password(&none, &mut rng).unwrap_err();
            assert_eq!(err, GeneratorError::InvalidConfiguration);
        }
    }

    #[test]
    fn test_zero_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let err = generate_password(&options(0, true, true, true, true), &mut rng).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidLength(_)));
    }

    #[test]
    fn test_length_below_class_count() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let err = generate_password(&options(3, true, true, true, true), &mut rng).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidLength(_)));

        assert!(generate_password(&options(2, false, false, true, true), &mut rng).is_ok());
    }

    #[test]
    fn test_same_seed_same_password() {
        let opts = options(24, true, true, true, true);
        let a = generate_password(&opts, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        let b = generate_password(&opts, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mandatory_characters_are_not_pinned_to_front() {
        // Digits-only pool plus one mandatory uppercase: the uppercase letter
        // must show up at more than one position across runs.
        let opts = options(8, true, false, true, false);
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let mut positions = std::collections::HashSet::new();
        for _ in 0..50 {
            let pwd = generate_password(&opts, &mut rng).unwrap();
            if let Some(pos) = pwd.chars().position(|c| c.is_ascii_uppercase()) {
                positions.insert(pos);
            }
        }
        assert!(positions.len() > 1);
    }

    #[test]
    fn test_random_options_within_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let auto = AutoConfig::default();
        for _ in 0..100 {
            let opts = random_options(&auto, &mut rng).unwrap();
            assert!((auto.min_length..=auto.max_length).contains(&opts.length));
            assert!(opts.has_any_class());
            assert!(generate_password(&opts, &mut rng).is_ok());
        }
    }

    #[test]
    fn test_random_options_rejects_bad_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let too_short = AutoConfig { min_length: 2, max_length: 10 };
        assert!(matches!(
            random_options(&too_short, &mut rng),
            Err(GeneratorError::InvalidLength(_))
        ));

        let inverted = AutoConfig { min_length: 20, max_length: 12 };
        assert!(matches!(
            random_options(&inverted, &mut rng),
            Err(GeneratorError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_generator_uses_os_rng() {
        let generator = PasswordGenerator::new();
        let pwd = generator.generate_password(&PasswordGenerationOptions::default()).unwrap();
        assert_eq!(pwd.len(), 12);
        let report = generator.analyze_password_strength(&pwd);
        assert_eq!(report.length, 12);
    }
}
