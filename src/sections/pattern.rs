//! Pattern analysis section - penalizes ascending digit and letter runs.

use secrecy::{ExposeSecret, SecretString};

use super::SectionScore;
use crate::rules::SCORING_RULES;

const RUN_LENGTH: usize = 3;

/// Penalizes ascending three-character runs.
///
/// A digit run such as `456` and a letter run such as `xyz` (any case) are
/// penalized independently, so a password can take both penalties but
/// never the same one twice.
pub fn pattern_analysis_section(password: &SecretString) -> SectionScore {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < RUN_LENGTH {
        return 0;
    }

    let mut score = 0;
    if has_ascending_run(&chars, |c| c.is_ascii_digit()) {
        score += SCORING_RULES.consecutive;
    }
    if has_ascending_run(&chars, |c| c.is_ascii_alphabetic()) {
        score += SCORING_RULES.consecutive;
    }
    score
}

/// True if some window of `RUN_LENGTH` characters, all accepted by
/// `class`, climbs by exactly one code point per step (letters compared
/// case-insensitively).
fn has_ascending_run(chars: &[char], class: impl Fn(char) -> bool) -> bool {
    chars.windows(RUN_LENGTH).any(|window| {
        window.iter().all(|&c| class(c))
            && window.windows(2).all(|w| {
                let prev = w[0].to_ascii_lowercase() as u32;
                let curr = w[1].to_ascii_lowercase() as u32;
                curr == prev + 1
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_pattern_section_sequential_numbers() {
        assert_eq!(pattern_analysis_section(&secret("test456")), -10);
    }

    #[test]
    fn test_pattern_section_sequential_letters_any_case() {
        assert_eq!(pattern_analysis_section(&secret("xyz")), -10);
        assert_eq!(pattern_analysis_section(&secret("XYZ")), -10);
        assert_eq!(pattern_analysis_section(&secret("xYz")), -10);
        assert_eq!(pattern_analysis_section(&secret("qrs")), -10);
    }

    #[test]
    fn test_pattern_section_both_penalties() {
        assert_eq!(pattern_analysis_section(&secret("abc123")), -20);
    }

    #[test]
    fn test_pattern_section_penalty_applied_once() {
        assert_eq!(pattern_analysis_section(&secret("123456789")), -10);
    }

    #[test]
    fn test_pattern_section_descending_is_fine() {
        assert_eq!(pattern_analysis_section(&secret("cba321")), 0);
    }

    #[test]
    fn test_pattern_section_no_wraparound_or_mixed_runs() {
        // 9 -> 0 and z -> a do not continue a run, nor does a digit/letter mix.
        assert_eq!(pattern_analysis_section(&secret("890yza")), 0);
        assert_eq!(pattern_analysis_section(&secret("78a9")), 0);
        // '9' ':' ';' climb by one but are not all digits.
        assert_eq!(pattern_analysis_section(&secret("9:;")), 0);
        // 'Z' '[' '\' likewise are not all letters.
        assert_eq!(pattern_analysis_section(&secret("YZ[")), 0);
    }

    #[test]
    fn test_pattern_section_strong_password() {
        assert_eq!(pattern_analysis_section(&secret("PasswordKxMnPq")), 0);
    }

    #[test]
    fn test_pattern_section_too_short() {
        assert_eq!(pattern_analysis_section(&secret("ab")), 0);
    }
}
