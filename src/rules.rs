//! Point values and thresholds used by the scoring sections.

use crate::charset::Category;

/// Bonus awarded once a password reaches a length threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    pub score: i32,
    pub threshold: usize,
}

/// Bonus for a character class: `one_char` for any occurrence, plus
/// `multiple_chars` once the count reaches `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRule {
    pub one_char: i32,
    pub multiple_chars: i32,
    pub threshold: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub min_length: LengthRule,
    pub extra_length: LengthRule,
    pub upper: ClassRule,
    pub lower: ClassRule,
    pub numbers: ClassRule,
    pub special: ClassRule,
    pub all_types: i32,
    pub consecutive: i32,
}

impl ScoringRules {
    pub const fn class(&self, category: Category) -> &ClassRule {
        match category {
            Category::Upper => &self.upper,
            Category::Lower => &self.lower,
            Category::Numbers => &self.numbers,
            Category::Special => &self.special,
        }
    }
}

pub static SCORING_RULES: ScoringRules = ScoringRules {
    min_length: LengthRule {
        score: 15,
        threshold: 8,
    },
    extra_length: LengthRule {
        score: 10,
        threshold: 12,
    },
    upper: ClassRule {
        one_char: 15,
        multiple_chars: 5,
        threshold: 2,
    },
    lower: ClassRule {
        one_char: 10,
        multiple_chars: 5,
        threshold: 3,
    },
    numbers: ClassRule {
        one_char: 10,
        multiple_chars: 5,
        threshold: 2,
    },
    special: ClassRule {
        one_char: 5,
        multiple_chars: 5,
        threshold: 2,
    },
    all_types: 15,
    consecutive: -10,
};

/// Lowest possible score.
pub const MIN_SCORE: i32 = 0;
/// Highest possible score.
pub const MAX_SCORE: i32 = 100;
