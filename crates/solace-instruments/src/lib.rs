//! solace-instruments
//!
//! Screening questionnaire definitions. Pure data — the prompts, answer
//! scale, scoring thresholds, and interpretation text for each supported
//! instrument.

pub mod questionnaires;
pub mod scoring;

use solace_core::models::assessment::{QuestionnaireKind, RiskTier};

/// Trait implemented by each screening questionnaire.
pub trait Questionnaire: Send + Sync {
    /// Unique identifier for this questionnaire (e.g., "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// The closed kind backing this definition.
    fn kind(&self) -> QuestionnaireKind;

    /// Question prompts, asked in order. Each is answered on the 0–3 scale.
    fn prompts(&self) -> &[&str];

    /// The result message reported when a completed session lands at `tier`.
    fn interpretation(&self, tier: RiskTier) -> &'static str;
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    vec![
        Box::new(questionnaires::phq9::Phq9),
        Box::new(questionnaires::gad7::Gad7),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: &str) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}

/// The definition backing a questionnaire kind.
pub fn questionnaire_for(kind: QuestionnaireKind) -> Box<dyn Questionnaire> {
    match kind {
        QuestionnaireKind::Phq9 => Box::new(questionnaires::phq9::Phq9),
        QuestionnaireKind::Gad7 => Box::new(questionnaires::gad7::Gad7),
    }
}
