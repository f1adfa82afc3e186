use serde::{Deserialize, Serialize};

use crate::util::date::EMPTY_PLACEHOLDER;

/// A message as the messaging endpoints return it.
///
/// Inbox, thread and broadcast payloads disagree on field names, so each
/// concept has a primary field and a fallback; the accessors pick the first
/// one that is present and non-empty.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageSummary {
    /// Numeric in the inbox, string in threads.
    #[serde(default)]
    pub id: Option<serde_json::Value>,

    #[serde(default, rename = "asunto")]
    pub subject: Option<String>,

    #[serde(default, rename = "contenido")]
    pub content: Option<String>,
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default, rename = "emisor")]
    pub sender: Option<String>,
    #[serde(default, rename = "remitente")]
    pub remitter: Option<String>,

    #[serde(default, rename = "fecha")]
    pub date: Option<String>,
    #[serde(default, rename = "fecha_envio")]
    pub sent_at: Option<String>,

    #[serde(default, rename = "curso")]
    pub course: Option<String>,
    #[serde(default, rename = "curso_asociado")]
    pub linked_course: Option<String>,
}

fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .flatten()
        .map(String::as_str)
        .find(|value| !value.is_empty())
}

impl MessageSummary {
    pub fn subject_or_default(&self) -> String {
        first_present(&[&self.subject])
            .unwrap_or("Mensaje")
            .to_string()
    }

    pub fn body_or_placeholder(&self) -> String {
        first_present(&[&self.content, &self.body])
            .unwrap_or(EMPTY_PLACEHOLDER)
            .to_string()
    }

    pub fn sender_or_placeholder(&self) -> String {
        first_present(&[&self.sender, &self.remitter])
            .unwrap_or(EMPTY_PLACEHOLDER)
            .to_string()
    }

    /// Raw date string, empty when neither field is set.
    pub fn date_raw(&self) -> String {
        first_present(&[&self.date, &self.sent_at])
            .unwrap_or_default()
            .to_string()
    }

    pub fn course_label(&self) -> Option<String> {
        first_present(&[&self.course, &self.linked_course]).map(str::to_string)
    }
}
