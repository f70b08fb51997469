//! Delayed escalation notices for high-risk assessment outcomes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

use solace_core::models::assessment::RiskTier;
use solace_core::models::message::ChatMessage;

/// Delay between the result message and the follow-up notice.
pub const ESCALATION_DELAY: Duration = Duration::from_secs(2);

/// The follow-up recommendation for an assessment outcome, if any.
pub fn escalation_notice(tier: RiskTier) -> Option<&'static str> {
    match tier {
        RiskTier::High => Some(
            "📞 I recommend booking an appointment with one of our counselors. \
             Would you like me to help you schedule a confidential session?",
        ),
        RiskTier::Critical => Some(
            "🚨 URGENT: If you're having thoughts of self-harm, please contact emergency \
             services immediately at 911 or go to your nearest emergency room. You can also \
             reach the 988 Suicide & Crisis Lifeline by calling or texting 988.",
        ),
        RiskTier::Low | RiskTier::Medium => None,
    }
}

/// Schedule the notice for `tier`, if it has one, onto the shared log.
///
/// Fire-and-forget with respect to the main flow: the returned handle is
/// owned by the controller, but the task appends on its own schedule with
/// no ordering guarantee relative to later user input.
pub fn schedule_notice(
    log: Arc<Mutex<Vec<ChatMessage>>>,
    tier: RiskTier,
    delay: Duration,
) -> Option<JoinHandle<()>> {
    let notice = escalation_notice(tier)?;
    Some(tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        log.lock().await.push(ChatMessage::assistant(notice));
        info!(?tier, "escalation notice delivered");
    }))
}
