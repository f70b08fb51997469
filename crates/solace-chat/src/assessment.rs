//! Assessment session state machine.
//!
//! A session drives one questionnaire to completion: one integer score per
//! question in order, then a total, a risk tier, and the interpretation
//! message. The session is an explicit value owned by the conversation
//! controller; scoring the final question finishes it, and the owner drops
//! it the moment [`SubmitOutcome::Completed`] is returned.

use jiff::Timestamp;

use solace_core::models::assessment::{AssessmentResult, QuestionnaireKind};
use solace_instruments::scoring::{self, ANSWER_LEGEND};
use solace_instruments::{questionnaire_for, Questionnaire};

/// In-progress questionnaire state. The index of the next unanswered
/// question is always `scores.len()`, so it cannot drift out of step with
/// the collected answers.
pub struct AssessmentSession {
    questionnaire: Box<dyn Questionnaire>,
    scores: Vec<u8>,
}

/// What the engine emits for one submitted answer.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input rejected; session unchanged. Does not consume a turn.
    Clarification(String),
    /// Score recorded; here is the next prompt.
    NextPrompt(String),
    /// Final question scored; the session is finished and must be dropped.
    Completed {
        message: String,
        result: AssessmentResult,
    },
}

impl AssessmentSession {
    /// Begin a fresh session and produce the intro message (scale legend
    /// plus question 1). No failure mode.
    pub fn start(kind: QuestionnaireKind) -> (Self, String) {
        let questionnaire = questionnaire_for(kind);
        let intro = format!(
            "Let's start the {} assessment. I'll ask you {} questions. \
             Please rate each on a scale of 0-3: {}.\n\nQuestion 1: {}",
            questionnaire.name(),
            questionnaire.prompts().len(),
            ANSWER_LEGEND,
            questionnaire.prompts()[0],
        );
        (
            Self {
                questionnaire,
                scores: Vec::new(),
            },
            intro,
        )
    }

    pub fn kind(&self) -> QuestionnaireKind {
        self.questionnaire.kind()
    }

    /// Number of questions scored so far.
    pub fn questions_answered(&self) -> usize {
        self.scores.len()
    }

    /// A session is complete once every prompt has been scored.
    pub fn is_complete(&self) -> bool {
        self.scores.len() == self.questionnaire.prompts().len()
    }

    /// Record one free-text reply.
    ///
    /// Invalid input (non-integer, or outside 0–3) leaves the session
    /// untouched and asks again. A valid score either advances to the next
    /// prompt or, on the final question, closes out the session with a
    /// total and risk tier.
    pub fn submit_answer(&mut self, raw: &str) -> SubmitOutcome {
        let score = match scoring::parse_answer(raw) {
            Ok(score) => score,
            Err(_) => {
                return SubmitOutcome::Clarification(format!(
                    "Please respond with a number from 0-3: {ANSWER_LEGEND}"
                ));
            }
        };

        self.scores.push(score);
        let prompts = self.questionnaire.prompts();

        if self.scores.len() < prompts.len() {
            let next = self.scores.len();
            return SubmitOutcome::NextPrompt(format!("Question {}: {}", next + 1, prompts[next]));
        }

        let total: u8 = self.scores.iter().sum();
        let tier = scoring::classify(total);
        let result = AssessmentResult {
            kind: self.kind(),
            total,
            canonical_max: self.kind().canonical_max(),
            tier,
            completed_at: Timestamp::now(),
        };

        SubmitOutcome::Completed {
            message: self.questionnaire.interpretation(tier).to_string(),
            result,
        }
    }
}
