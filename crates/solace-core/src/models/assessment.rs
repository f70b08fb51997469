use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The screening questionnaires the chatbot can administer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum QuestionnaireKind {
    #[serde(rename = "PHQ-9")]
    Phq9,
    #[serde(rename = "GAD-7")]
    Gad7,
}

impl QuestionnaireKind {
    /// Maximum total on the full clinical instrument: 27 for the 9-item
    /// PHQ-9, 21 for the 7-item GAD-7. Reported alongside scores even
    /// though this deployment administers a 5-item short form.
    pub fn canonical_max(&self) -> u8 {
        match self {
            QuestionnaireKind::Phq9 => 27,
            QuestionnaireKind::Gad7 => 21,
        }
    }
}

impl std::fmt::Display for QuestionnaireKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            QuestionnaireKind::Phq9 => "PHQ-9",
            QuestionnaireKind::Gad7 => "GAD-7",
        })
    }
}

/// Severity bucket derived from a questionnaire total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    /// High and critical outcomes trigger a follow-up escalation notice.
    pub fn needs_escalation(&self) -> bool {
        matches!(self, RiskTier::High | RiskTier::Critical)
    }
}

/// The immutable outcome of a completed questionnaire session.
///
/// Produced exactly once when the final question is scored, then attached
/// to the conversation message that reports it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub kind: QuestionnaireKind,
    /// Sum of the collected item scores.
    pub total: u8,
    /// Full-instrument maximum shown next to the total (27 or 21).
    pub canonical_max: u8,
    pub tier: RiskTier,
    pub completed_at: jiff::Timestamp,
}
