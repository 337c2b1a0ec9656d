//! Text for sharing an event's roster through messaging apps.

use serde::Serialize;

use crate::calendar::display_date;
use crate::database::models::EventDetail;

const WHATSAPP_SHARE_URL: &str = "https://wa.me/";
const NO_ASSIGNMENTS: &str = "No assignments yet";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
    pub url: String,
    pub whatsapp_url: String,
}

pub fn share_url(base_url: &str, detail: &EventDetail) -> String {
    format!(
        "{}/share/{}",
        base_url.trim_end_matches('/'),
        detail.event.id
    )
}

pub fn share_message(detail: &EventDetail, base_url: &str) -> ShareMessage {
    let url = share_url(base_url, detail);
    let members = if detail.assignments.is_empty() {
        NO_ASSIGNMENTS.to_string()
    } else {
        detail
            .assignments
            .iter()
            .map(|a| a.member.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let text = format!(
        "🏛️ {}\n📅 {}\n👥 {}\n🎯 {} Team\n\nView full details: {}",
        detail.event.title,
        display_date(detail.event.event_date),
        members,
        detail.team.name,
        url
    );

    // Encoding a single pair cannot fail.
    let query = serde_urlencoded::to_string([("text", text.as_str())]).unwrap_or_default();

    ShareMessage {
        title: format!("{} - {}", detail.event.title, detail.team.name),
        whatsapp_url: format!("{}?{}", WHATSAPP_SHARE_URL, query),
        text,
        url,
    }
}
