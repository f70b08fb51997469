use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use solace_core::models::assessment::RiskTier;

/// Valid range for a single item answer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerScale {
    pub min: u8,
    pub max: u8,
}

impl AnswerScale {
    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Every supported questionnaire scores items 0–3.
pub const ANSWER_SCALE: AnswerScale = AnswerScale { min: 0, max: 3 };

/// Legend re-stated whenever the user is prompted for an item score.
pub const ANSWER_LEGEND: &str =
    "0 = Not at all, 1 = Several days, 2 = More than half the days, 3 = Nearly every day";

/// Rejected item input. Recovered locally by re-prompting; never fatal.
#[derive(Debug, Clone, Error)]
#[error("expected an integer from 0 to 3, got {input:?}")]
pub struct InvalidAnswer {
    pub input: String,
}

/// Parse a free-text reply as an item score on the 0–3 scale.
///
/// Strict integer parse of the trimmed input; anything non-numeric or
/// outside the scale is rejected.
pub fn parse_answer(raw: &str) -> Result<u8, InvalidAnswer> {
    let value: u8 = raw
        .trim()
        .parse()
        .map_err(|_| InvalidAnswer { input: raw.to_string() })?;
    if !ANSWER_SCALE.contains(value) {
        return Err(InvalidAnswer { input: raw.to_string() });
    }
    Ok(value)
}

/// Bucket a questionnaire total into a risk tier.
///
/// Cut points are the published full-instrument bands (0–27 PHQ-9,
/// 0–21 GAD-7); the 5-item short form reuses them unchanged.
pub fn classify(total: u8) -> RiskTier {
    match total {
        0..=4 => RiskTier::Low,
        5..=9 => RiskTier::Medium,
        10..=14 => RiskTier::High,
        _ => RiskTier::Critical,
    }
}
