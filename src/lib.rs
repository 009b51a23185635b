//! Password strength checking library
//!
//! This library scores passwords with a fixed point-based heuristic,
//! classifies them into five strength tiers and suggests a freshly
//! generated strong password whenever the checked one is weak.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async checking with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_strength_tester::{check, generate_strong_password, PasswordConfig, StrengthTier};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("Password123!".to_string().into());
//! let result = check(&password).expect("password is not empty");
//! assert_eq!(result.strength, StrengthTier::Strong);
//! assert!(result.suggestion.is_none());
//!
//! let weak = SecretString::new("123456".to_string().into());
//! let result = check(&weak).expect("password is not empty");
//! assert!(result.suggestion.is_some());
//!
//! let generated = generate_strong_password(&PasswordConfig::new().with_length(16))
//!     .expect("default minimums fit in 16 characters");
//! assert_eq!(generated.expose_secret().len(), 16);
//! ```

// Internal modules
mod charset;
mod error;
mod evaluator;
mod generator;
mod rules;
mod sections;
mod tier;

// Public API
pub use charset::{Category, CharacterTally, LOWER, NUMBERS, SPECIAL, UPPER};
pub use error::{Result, StrengthError};
pub use evaluator::{
    PasswordStrengthResult, ScoreBreakdown, check, check_with_rng, score_breakdown,
};
pub use generator::{
    CharacterCounts, DEFAULT_LENGTH, MAX_LENGTH, PasswordConfig, ResolvedConfig, default_minimum,
    generate_strong_password, generate_strong_password_with_rng,
};
pub use rules::{ClassRule, LengthRule, SCORING_RULES, ScoringRules};
pub use tier::{StrengthTier, TIERS};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, check_tx};
