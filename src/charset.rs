//! Character classes used for scoring and generation.

/// ASCII uppercase letters.
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII lowercase letters.
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII digits.
pub const NUMBERS: &str = "0123456789";
/// Symbols drawn by the generator for the special category.
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// The four character categories, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Upper,
    Lower,
    Numbers,
    Special,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Upper,
        Category::Lower,
        Category::Numbers,
        Category::Special,
    ];

    /// Characters the generator draws from for this category.
    pub const fn charset(self) -> &'static str {
        match self {
            Category::Upper => UPPER,
            Category::Lower => LOWER,
            Category::Numbers => NUMBERS,
            Category::Special => SPECIAL,
        }
    }

    /// Whether `c` counts toward this category when scoring.
    ///
    /// Letters and digits are ASCII only. A special character is anything
    /// that is neither an ASCII word character (letter, digit, `_`) nor
    /// whitespace, so `_` and non-ASCII letters fall on opposite sides.
    pub fn matches(self, c: char) -> bool {
        match self {
            Category::Upper => c.is_ascii_uppercase(),
            Category::Lower => c.is_ascii_lowercase(),
            Category::Numbers => c.is_ascii_digit(),
            Category::Special => !(c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace()),
        }
    }
}

/// Observed number of characters per category in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterTally {
    pub upper: usize,
    pub lower: usize,
    pub numbers: usize,
    pub special: usize,
}

impl CharacterTally {
    pub fn of(password: &str) -> Self {
        let mut tally = Self::default();
        for c in password.chars() {
            for category in Category::ALL {
                if category.matches(c) {
                    *tally.get_mut(category) += 1;
                }
            }
        }
        tally
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Upper => self.upper,
            Category::Lower => self.lower,
            Category::Numbers => self.numbers,
            Category::Special => self.special,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Upper => &mut self.upper,
            Category::Lower => &mut self.lower,
            Category::Numbers => &mut self.numbers,
            Category::Special => &mut self.special,
        }
    }

    /// True when every category occurs at least once.
    pub fn has_all(&self) -> bool {
        Category::ALL.iter().all(|&c| self.get(c) > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_mixed_password() {
        let tally = CharacterTally::of("Ab1!cD2@ e");
        assert_eq!(
            tally,
            CharacterTally {
                upper: 2,
                lower: 3,
                numbers: 2,
                special: 2,
            }
        );
        assert!(tally.has_all());
    }

    #[test]
    fn test_underscore_and_whitespace_are_not_special() {
        let tally = CharacterTally::of("a_b c\td");
        assert_eq!(tally.special, 0);
        assert_eq!(tally.lower, 4);
    }

    #[test]
    fn test_non_ascii_letters_count_as_special() {
        let tally = CharacterTally::of("éÉ");
        assert_eq!(tally.special, 2);
        assert_eq!(tally.upper, 0);
        assert_eq!(tally.lower, 0);
    }

    #[test]
    fn test_generator_sets_match_their_category() {
        for category in [Category::Upper, Category::Lower, Category::Numbers] {
            assert!(category.charset().chars().all(|c| category.matches(c)));
        }
        // '_' is drawn as a symbol but scored as a word character.
        assert!(SPECIAL.chars().filter(|&c| c != '_').all(|c| Category::Special.matches(c)));
    }
}
