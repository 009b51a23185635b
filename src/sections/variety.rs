//! Character variety section - scores uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};

use super::SectionScore;
use crate::charset::{Category, CharacterTally};
use crate::rules::SCORING_RULES;

/// Scores the character classes present in the password.
///
/// Every class that occurs earns its base bonus, and a further bonus once
/// its count reaches the class threshold. A password using all four
/// classes earns the all-types bonus as well.
pub fn character_variety_section(password: &SecretString) -> SectionScore {
    let tally = CharacterTally::of(password.expose_secret());

    let mut score: SectionScore = Category::ALL
        .iter()
        .map(|&category| class_score(category, tally.get(category)))
        .sum();

    if tally.has_all() {
        score += SCORING_RULES.all_types;
    }
    score
}

fn class_score(category: Category, count: usize) -> SectionScore {
    let rule = SCORING_RULES.class(category);
    match count {
        0 => 0,
        n if n >= rule.threshold => rule.one_char + rule.multiple_chars,
        _ => rule.one_char,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_section_single_class() {
        assert_eq!(character_variety_section(&secret("ab")), 10);
        assert_eq!(character_variety_section(&secret("abc")), 15);
        assert_eq!(character_variety_section(&secret("A")), 15);
        assert_eq!(character_variety_section(&secret("AB")), 20);
    }

    #[test]
    fn test_variety_section_digits_and_special() {
        assert_eq!(character_variety_section(&secret("1")), 10);
        assert_eq!(character_variety_section(&secret("12")), 15);
        assert_eq!(character_variety_section(&secret("!")), 5);
        assert_eq!(character_variety_section(&secret("!?")), 10);
    }

    #[test]
    fn test_variety_section_all_categories() {
        // 15 + 10 + 10 + 5 + all-types 15
        assert_eq!(character_variety_section(&secret("Aa1!")), 55);
        // 20 + 15 + 15 + 10 + 15
        assert_eq!(character_variety_section(&secret("ABabc12!?")), 75);
    }

    #[test]
    fn test_variety_section_missing_special() {
        // Underscore and spaces are not special.
        assert_eq!(character_variety_section(&secret("Aa1_ ")), 35);
    }
}
