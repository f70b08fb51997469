use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a crisis resource is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContactKind {
    Hotline,
    Text,
    Chat,
    Local,
}

/// An entry in the crisis support directory.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrisisResource {
    pub name: String,
    pub kind: ContactKind,
    pub contact: String,
    pub description: String,
    pub availability: String,
    pub languages: Vec<String>,
}

/// The built-in crisis support directory served to the frontend.
pub fn crisis_resources() -> Vec<CrisisResource> {
    fn entry(
        name: &str,
        kind: ContactKind,
        contact: &str,
        description: &str,
        availability: &str,
        languages: &[&str],
    ) -> CrisisResource {
        CrisisResource {
            name: name.to_string(),
            kind,
            contact: contact.to_string(),
            description: description.to_string(),
            availability: availability.to_string(),
            languages: languages.iter().map(|l| l.to_string()).collect(),
        }
    }

    vec![
        entry(
            "National Suicide Prevention Lifeline",
            ContactKind::Hotline,
            "988",
            "Free and confidential emotional support for people in suicidal crisis",
            "24/7",
            &["English", "Spanish"],
        ),
        entry(
            "Crisis Text Line",
            ContactKind::Text,
            "Text HOME to 741741",
            "Free, 24/7 support for those in crisis via text message",
            "24/7",
            &["English"],
        ),
        entry(
            "SAMHSA National Helpline",
            ContactKind::Hotline,
            "1-800-662-4357",
            "Treatment referral and information service for mental health",
            "24/7",
            &["English", "Spanish"],
        ),
        entry(
            "Campus Counseling Center",
            ContactKind::Local,
            "(555) 123-4567",
            "On-campus mental health services and emergency support",
            "Mon-Fri 8AM-5PM, Emergency 24/7",
            &["English", "Hindi"],
        ),
        entry(
            "Vandrevala Foundation Helpline",
            ContactKind::Hotline,
            "1860-2662-345",
            "Mental health support and crisis intervention in India",
            "24/7",
            &["English", "Hindi", "Tamil", "Telugu"],
        ),
        entry(
            "iCall Psychosocial Helpline",
            ContactKind::Hotline,
            "9152987821",
            "Psychosocial support and crisis intervention",
            "Mon-Sat 8AM-10PM",
            &["English", "Hindi", "Marathi"],
        ),
    ]
}
