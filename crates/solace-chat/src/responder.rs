//! Free-text support responses.
//!
//! While no assessment is running, user text goes to a [`SupportResponder`].
//! Two implementations exist: the keyword-matched [`CannedResponder`] here,
//! and the delegating [`crate::remote::RemoteResponder`].

use async_trait::async_trait;
use rand::Rng;

use crate::error::ChatError;

/// A (user, assistant) turn pair, oldest first — the shape the remote
/// endpoint expects conversation history in.
pub type TurnPair = (String, String);

/// Produces a support reply for one free-text user message.
#[async_trait]
pub trait SupportResponder: Send + Sync {
    async fn respond(&self, message: &str, history: &[TurnPair]) -> Result<String, ChatError>;
}

const ANXIETY_KEYWORDS: [&str; 6] = ["anxious", "anxiety", "worried", "panic", "nervous", "fear"];
const DEPRESSION_KEYWORDS: [&str; 6] =
    ["depressed", "sad", "hopeless", "worthless", "empty", "down"];
const STRESS_KEYWORDS: [&str; 5] =
    ["stressed", "overwhelmed", "pressure", "tension", "burnt out"];

pub const ANXIETY_RESPONSES: [&str; 3] = [
    "I understand you're feeling anxious. Let's try a simple breathing exercise: Breathe in for 4 counts, hold for 4, exhale for 6. Repeat this 3 times.",
    "Anxiety can feel overwhelming, but you're not alone. Would you like me to guide you through a grounding technique called 5-4-3-2-1?",
    "Thank you for sharing how you feel. Here's a quick mindfulness tip: Name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, and 1 you can taste.",
];

pub const DEPRESSION_RESPONSES: [&str; 3] = [
    "I hear that you're struggling right now. Your feelings are valid, and it's brave of you to reach out. Would you like to try a brief mood-boosting activity?",
    "Depression can make everything feel difficult. Let's start small - can you think of one tiny thing that brought you even a moment of comfort today?",
    "You've taken an important step by talking about this. Sometimes when we're feeling low, gentle movement can help. Would you like some simple stretching suggestions?",
];

pub const STRESS_RESPONSES: [&str; 3] = [
    "Stress is your body's natural response, but we can learn to manage it better. Let's try the STOP technique: Stop, Take a breath, Observe your thoughts, Proceed mindfully.",
    "I can sense you're feeling overwhelmed. Here's a quick stress relief technique: Progressive muscle relaxation. Start by tensing your shoulders for 5 seconds, then release.",
    "Stress affects us all. Would you like me to suggest some time management techniques or would you prefer a guided meditation script?",
];

pub const GENERAL_RESPONSES: [&str; 3] = [
    "Thank you for trusting me with your feelings. Remember, seeking help is a sign of strength, not weakness.",
    "I'm here to support you through this conversation. Would you like to tell me more about what's been on your mind lately?",
    "Your mental health matters, and you deserve support. Is there a particular area of your wellbeing you'd like to focus on today?",
];

/// Locally generated support replies keyed off simple keyword detection,
/// with a uniformly random pick within the matched topic.
pub struct CannedResponder;

impl CannedResponder {
    fn responses_for(text: &str) -> &'static [&'static str] {
        let lower = text.to_lowercase();
        if ANXIETY_KEYWORDS.iter().any(|k| lower.contains(k)) {
            &ANXIETY_RESPONSES
        } else if DEPRESSION_KEYWORDS.iter().any(|k| lower.contains(k)) {
            &DEPRESSION_RESPONSES
        } else if STRESS_KEYWORDS.iter().any(|k| lower.contains(k)) {
            &STRESS_RESPONSES
        } else {
            &GENERAL_RESPONSES
        }
    }
}

#[async_trait]
impl SupportResponder for CannedResponder {
    async fn respond(&self, message: &str, _history: &[TurnPair]) -> Result<String, ChatError> {
        let options = Self::responses_for(message);
        let pick = rand::thread_rng().gen_range(0..options.len());
        Ok(options[pick].to_string())
    }
}
