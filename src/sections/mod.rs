//! Password scoring sections
//!
//! Each section scores one aspect of the password and returns its point
//! contribution. The evaluator sums the contributions and clamps the total.

mod length;
mod pattern;
mod variety;

pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::character_variety_section;

/// Points contributed by a single section. Negative values are penalties.
pub type SectionScore = i32;
