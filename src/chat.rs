//! Chat assistant replies.
//!
//! Replies are fixed templates: either a recommendation built from the
//! matched medicine or a fallback asking the user to see a doctor. The
//! `<br>` tags and `**bold**` markers are rendered by the browser chat box.

use crate::matcher::Matcher;
use crate::models::MedicineRecord;

/// Reply sent when no symptom keyword matches.
pub const FALLBACK_REPLY: &str = "I'm not sure. Please consult a doctor. <br>Try describing your symptom simply, like 'headache', 'fever', or 'stomach pain'.";

pub fn recommendation_reply(med: &MedicineRecord) -> String {
    format!(
        "Based on your symptoms, I recommend **{}**. <br>It treats: {}. <br>(Dosage: {})",
        med.name, med.usage, med.dosage
    )
}

pub fn compose_reply(matched: Option<&MedicineRecord>) -> String {
    match matched {
        Some(med) => recommendation_reply(med),
        None => FALLBACK_REPLY.to_string(),
    }
}

/// Match `message` against the catalog and build the reply text.
pub fn reply_to(matcher: &Matcher, message: &str) -> String {
    let matched = matcher.match_symptom(message);
    match matched {
        Some(med) => tracing::debug!(medicine = %med.name, "Chat message matched"),
        None => tracing::debug!("Chat message matched no symptom"),
    }
    compose_reply(matched)
}
