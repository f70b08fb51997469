use solace_core::models::assessment::{QuestionnaireKind, RiskTier};

use crate::Questionnaire;

/// GAD-7: Generalized Anxiety Disorder scale.
///
/// Administered here as a 5-item short form while keeping the published
/// 0–21 severity bands and reporting 21 as the displayed maximum.
pub struct Gad7;

const PROMPTS: [&str; 5] = [
    "Over the last 2 weeks, how often have you been bothered by feeling nervous, anxious, or on edge?",
    "Over the last 2 weeks, how often have you not been able to stop or control worrying?",
    "Over the last 2 weeks, how often have you been worrying too much about different things?",
    "Over the last 2 weeks, how often have you had trouble relaxing?",
    "Over the last 2 weeks, how often have you been so restless that it's hard to sit still?",
];

impl Questionnaire for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn kind(&self) -> QuestionnaireKind {
        QuestionnaireKind::Gad7
    }

    fn prompts(&self) -> &[&str] {
        &PROMPTS
    }

    fn interpretation(&self, tier: RiskTier) -> &'static str {
        match tier {
            RiskTier::Low => {
                "Your GAD-7 score indicates minimal anxiety symptoms. Keep practicing \
                 relaxation techniques and maintaining healthy coping strategies."
            }
            RiskTier::Medium => {
                "Your GAD-7 score indicates mild anxiety symptoms. Let's work on some \
                 anxiety management techniques together."
            }
            RiskTier::High => {
                "Your GAD-7 score indicates moderate anxiety symptoms. I recommend \
                 speaking with a counselor about these feelings."
            }
            RiskTier::Critical => {
                "Your GAD-7 score indicates severe anxiety symptoms. Please consider \
                 seeking immediate professional support."
            }
        }
    }
}
