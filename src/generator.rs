//! Strong password generator.
//!
//! Builds a password from per-category minimums, fills the remaining length
//! from the union of the requested categories and shuffles the result.

use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

use crate::charset::{Category, LOWER};
use crate::error::{Result, StrengthError};

/// Password length used when none (or zero) is configured.
pub const DEFAULT_LENGTH: usize = 9;

/// Longest password the generator will build.
pub const MAX_LENGTH: usize = 4096;

/// Minimum count requested for a category when the caller leaves it unset.
pub const fn default_minimum(category: Category) -> usize {
    match category {
        Category::Upper => 2,
        Category::Lower => 3,
        Category::Numbers => 2,
        Category::Special => 2,
    }
}

/// Requested minimum number of characters per category.
///
/// `None` falls back to the category default, while `Some(0)` excludes
/// the category entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterCounts {
    pub upper: Option<usize>,
    pub lower: Option<usize>,
    pub numbers: Option<usize>,
    pub special: Option<usize>,
}

impl CharacterCounts {
    pub fn with_upper(mut self, count: usize) -> Self {
        self.upper = Some(count);
        self
    }

    pub fn with_lower(mut self, count: usize) -> Self {
        self.lower = Some(count);
        self
    }

    pub fn with_numbers(mut self, count: usize) -> Self {
        self.numbers = Some(count);
        self
    }

    pub fn with_special(mut self, count: usize) -> Self {
        self.special = Some(count);
        self
    }

    fn requested(&self, category: Category) -> Option<usize> {
        match category {
            Category::Upper => self.upper,
            Category::Lower => self.lower,
            Category::Numbers => self.numbers,
            Category::Special => self.special,
        }
    }

    /// The minimum for `category`, falling back to its default.
    pub fn minimum(&self, category: Category) -> usize {
        self.requested(category)
            .unwrap_or_else(|| default_minimum(category))
    }
}

/// Configuration for [`generate_strong_password`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordConfig {
    pub length: Option<usize>,
    pub char_counts: Option<CharacterCounts>,
}

impl PasswordConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_char_counts(mut self, counts: CharacterCounts) -> Self {
        self.char_counts = Some(counts);
        self
    }

    /// Applies defaults and validates that the minimums fit in the length.
    ///
    /// A length of zero is treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`StrengthError::LengthTooLong`] when the length exceeds
    /// [`MAX_LENGTH`], and [`StrengthError::ConfigError`] when the resolved
    /// minimums add up to more than the resolved length.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let length = self.length.filter(|&n| n > 0).unwrap_or(DEFAULT_LENGTH);
        if length > MAX_LENGTH {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Rejected password config: length {} exceeds {}",
                length,
                MAX_LENGTH
            );
            return Err(StrengthError::LengthTooLong {
                length,
                max: MAX_LENGTH,
            });
        }

        let counts = self.char_counts.unwrap_or_default();
        let minimums = Category::ALL.map(|category| (category, counts.minimum(category)));

        let requested = minimums
            .iter()
            .fold(0usize, |acc, &(_, n)| acc.saturating_add(n));
        if requested > length {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Rejected password config: {} required characters for length {}",
                requested,
                length
            );
            return Err(StrengthError::ConfigError { requested, length });
        }

        Ok(ResolvedConfig { length, minimums })
    }
}

/// A validated configuration with every default applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub length: usize,
    minimums: [(Category, usize); 4],
}

impl ResolvedConfig {
    pub fn minimum(&self, category: Category) -> usize {
        self.minimums
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |&(_, n)| n)
    }

    /// Sum of the per-category minimums.
    pub fn required(&self) -> usize {
        self.minimums.iter().map(|&(_, n)| n).sum()
    }

    /// Categories with a positive minimum, in generation order.
    pub fn included(&self) -> impl Iterator<Item = Category> + '_ {
        self.minimums
            .iter()
            .filter(|&&(_, n)| n > 0)
            .map(|&(c, _)| c)
    }
}

/// Generates a strong password using the operating system's secure RNG.
///
/// # Errors
///
/// Returns [`StrengthError::ConfigError`] if the configured minimums
/// exceed the configured length, or [`StrengthError::LengthTooLong`] if the
/// length exceeds [`MAX_LENGTH`].
///
/// # Example
///
/// ```rust
/// use pwd_strength_tester::{generate_strong_password, CharacterCounts, PasswordConfig};
/// use secrecy::ExposeSecret;
///
/// let config = PasswordConfig::new()
///     .with_length(16)
///     .with_char_counts(CharacterCounts::default().with_special(0));
/// let password = generate_strong_password(&config).unwrap();
/// assert_eq!(password.expose_secret().len(), 16);
/// ```
pub fn generate_strong_password(config: &PasswordConfig) -> Result<SecretString> {
    generate_strong_password_with_rng(config, &mut OsRng)
}

/// Generates a strong password drawing every character and the final
/// shuffle from `rng`.
///
/// # Errors
///
/// Same as [`generate_strong_password`].
pub fn generate_strong_password_with_rng<R: Rng + ?Sized>(
    config: &PasswordConfig,
    rng: &mut R,
) -> Result<SecretString> {
    let resolved = config.resolve()?;
    let mut chars: Vec<u8> = Vec::with_capacity(resolved.length);

    for category in resolved.included() {
        push_random(
            rng,
            category.charset().as_bytes(),
            resolved.minimum(category),
            &mut chars,
        );
    }

    let remaining = resolved.length - chars.len();
    if remaining > 0 {
        let pool: Vec<u8> = resolved
            .included()
            .flat_map(|category| category.charset().bytes())
            .collect();
        let pool = if pool.is_empty() { LOWER.as_bytes() } else { &pool[..] };
        push_random(rng, pool, remaining, &mut chars);
    }

    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::trace!("Generated password of length {}", chars.len());

    // Every character set is ASCII.
    let password: String = chars.into_iter().map(char::from).collect();
    Ok(SecretString::new(password.into()))
}

fn push_random<R: Rng + ?Sized>(rng: &mut R, set: &[u8], count: usize, out: &mut Vec<u8>) {
    out.extend((0..count).map(|_| set[rng.gen_range(0..set.len())]));
}
