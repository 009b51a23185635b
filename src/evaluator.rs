//! Password strength evaluator - main evaluation logic.

use rand::Rng;
use rand::rngs::OsRng;
use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::{Result, StrengthError};
use crate::generator::{PasswordConfig, generate_strong_password_with_rng};
use crate::rules::{MAX_SCORE, MIN_SCORE};
use crate::sections::{
    SectionScore, character_variety_section, length_section, pattern_analysis_section,
};
use crate::tier::StrengthTier;

/// Delay before [`check_tx`] evaluates, so rapid edits can cancel it.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Outcome of checking a password.
#[derive(Debug)]
pub struct PasswordStrengthResult {
    pub strength: StrengthTier,
    /// Clamped score in `0..=100`.
    pub score: u8,
    /// Generated replacement, present only for Weak and Very Weak passwords.
    pub suggestion: Option<SecretString>,
}

/// Raw point contribution of each scoring section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub length: SectionScore,
    pub variety: SectionScore,
    pub pattern: SectionScore,
}

impl ScoreBreakdown {
    /// Unclamped sum of all sections.
    pub fn raw_total(&self) -> i32 {
        self.length + self.variety + self.pattern
    }

    /// Final score, clamped to `0..=100`.
    pub fn score(&self) -> u8 {
        // The clamp keeps the value inside u8 range.
        self.raw_total().clamp(MIN_SCORE, MAX_SCORE) as u8
    }
}

/// Runs every scoring section and returns their individual contributions.
///
/// # Errors
///
/// Returns [`StrengthError::InvalidInput`] if the password is empty.
pub fn score_breakdown(password: &SecretString) -> Result<ScoreBreakdown> {
    if password.expose_secret().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password check rejected: empty password");
        return Err(StrengthError::InvalidInput);
    }

    Ok(ScoreBreakdown {
        length: run_section("length", length_section, password),
        variety: run_section("variety", character_variety_section, password),
        pattern: run_section("pattern", pattern_analysis_section, password),
    })
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn run_section(
    section_name: &str,
    section_fn: fn(&SecretString) -> SectionScore,
    password: &SecretString,
) -> SectionScore {
    let points = section_fn(password);
    #[cfg(feature = "tracing")]
    tracing::debug!("Section {} contributed {} points", section_name, points);
    points
}

/// Checks password strength, suggesting a replacement for weak passwords.
///
/// Suggestions are drawn from the operating system's secure RNG.
///
/// # Errors
///
/// Returns [`StrengthError::InvalidInput`] if the password is empty.
pub fn check(password: &SecretString) -> Result<PasswordStrengthResult> {
    check_with_rng(password, &mut OsRng)
}

/// Same as [`check`], drawing any suggestion from `rng`.
pub fn check_with_rng<R: Rng + ?Sized>(
    password: &SecretString,
    rng: &mut R,
) -> Result<PasswordStrengthResult> {
    let score = score_breakdown(password)?.score();
    let strength = StrengthTier::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!("Password scored {} ({})", score, strength);

    let suggestion = if strength.needs_suggestion() {
        Some(generate_strong_password_with_rng(
            &PasswordConfig::default(),
            rng,
        )?)
    } else {
        None
    };

    Ok(PasswordStrengthResult {
        strength,
        score,
        suggestion,
    })
}

/// Async version that waits [`DEBOUNCE`] and sends the result via channel.
///
/// Nothing is sent if `token` is cancelled before the debounce elapses.
#[cfg(feature = "async")]
pub async fn check_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<PasswordStrengthResult>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password check cancelled during debounce");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    if let Err(e) = tx.send(check(password)).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password check result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
