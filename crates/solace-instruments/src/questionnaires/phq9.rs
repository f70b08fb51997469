use solace_core::models::assessment::{QuestionnaireKind, RiskTier};

use crate::Questionnaire;

/// PHQ-9: Patient Health Questionnaire, depression module.
///
/// Administered here as a 5-item short form while keeping the published
/// 0–27 severity bands and reporting 27 as the displayed maximum.
pub struct Phq9;

const PROMPTS: [&str; 5] = [
    "Over the last 2 weeks, how often have you been bothered by little interest or pleasure in doing things?",
    "Over the last 2 weeks, how often have you felt down, depressed, or hopeless?",
    "Over the last 2 weeks, how often have you had trouble falling or staying asleep, or sleeping too much?",
    "Over the last 2 weeks, how often have you felt tired or had little energy?",
    "Over the last 2 weeks, how often have you had poor appetite or been overeating?",
];

impl Questionnaire for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn kind(&self) -> QuestionnaireKind {
        QuestionnaireKind::Phq9
    }

    fn prompts(&self) -> &[&str] {
        &PROMPTS
    }

    fn interpretation(&self, tier: RiskTier) -> &'static str {
        match tier {
            RiskTier::Low => {
                "Your PHQ-9 score indicates minimal depression symptoms. That's great! \
                 Continue with healthy habits like regular sleep, exercise, and social connections."
            }
            RiskTier::Medium => {
                "Your PHQ-9 score indicates mild depression symptoms. Consider speaking \
                 with a counselor and practicing self-care strategies I can teach you."
            }
            RiskTier::High => {
                "Your PHQ-9 score indicates moderate depression symptoms. I strongly \
                 recommend scheduling an appointment with a mental health professional. \
                 Would you like me to help you find resources?"
            }
            RiskTier::Critical => {
                "Your PHQ-9 score indicates severe depression symptoms. Please seek \
                 immediate professional help. I can connect you with emergency resources if needed."
            }
        }
    }
}
