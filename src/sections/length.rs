//! Length section - rewards passwords that reach the length thresholds.

use secrecy::{ExposeSecret, SecretString};

use super::SectionScore;
use crate::rules::SCORING_RULES;

/// Scores the password length.
///
/// Reaching the minimum length earns its bonus, and reaching the extra
/// length earns a further bonus on top. Length is counted in characters,
/// not bytes or UTF-16 units, so a symbol outside the BMP counts once.
pub fn length_section(password: &SecretString) -> SectionScore {
    let len = password.expose_secret().chars().count();
    let mut score = 0;
    if len >= SCORING_RULES.min_length.threshold {
        score += SCORING_RULES.min_length.score;
        if len >= SCORING_RULES.extra_length.threshold {
            score += SCORING_RULES.extra_length.score;
        }
    }
    score
}
