//! Strength tiers and their score thresholds.

use std::fmt;

/// Strength classification of a score, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

/// Tiers from strongest to weakest. Thresholds strictly decrease.
pub static TIERS: [StrengthTier; 5] = [
    StrengthTier::VeryStrong,
    StrengthTier::Strong,
    StrengthTier::Medium,
    StrengthTier::Weak,
    StrengthTier::VeryWeak,
];

impl StrengthTier {
    /// Minimum score a password needs to reach this tier.
    pub const fn min_score(self) -> u8 {
        match self {
            StrengthTier::VeryStrong => 90,
            StrengthTier::Strong => 70,
            StrengthTier::Medium => 50,
            StrengthTier::Weak => 30,
            StrengthTier::VeryWeak => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StrengthTier::VeryStrong => "Very Strong",
            StrengthTier::Strong => "Strong",
            StrengthTier::Medium => "Medium",
            StrengthTier::Weak => "Weak",
            StrengthTier::VeryWeak => "Very Weak",
        }
    }

    /// Returns the highest tier whose threshold does not exceed `score`.
    pub fn from_score(score: u8) -> Self {
        TIERS
            .iter()
            .copied()
            .find(|tier| score >= tier.min_score())
            .unwrap_or(StrengthTier::VeryWeak)
    }

    /// Weak and Very Weak passwords get a generated replacement.
    pub fn needs_suggestion(self) -> bool {
        self < StrengthTier::Medium
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
