//! Email subjects and HTML bodies for new contacts and reviews.
//!
//! User input reaches two hostile contexts here: the `Subject` header, where
//! a newline would start a new header, and the HTML body. Subjects go
//! through [`sanitize_subject`]; every interpolated field goes through
//! [`escape_html`].

use serde::{Deserialize, Serialize};

use crate::models::contacts;
use crate::models::reviews::Review;

pub const MAX_SUBJECT_LENGTH: usize = 200;

const SUBJECT_PREFIX: &str = "[JEN Site]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub subject: String,
    pub html: String,
}

/// Collapse CR/LF and whitespace runs to single spaces, trim, and cap the
/// length at [`MAX_SUBJECT_LENGTH`] characters.
pub fn sanitize_subject(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(MAX_SUBJECT_LENGTH)
        .collect()
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A contact submission as seen by the notifier. Every field is optional so
/// that partial webhook payloads still format.
#[derive(Debug, Clone, Default)]
pub struct ContactRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub preferred_contact: Option<String>,
    pub service: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
}

impl From<&contacts::Model> for ContactRecord {
    fn from(m: &contacts::Model) -> Self {
        Self {
            name: Some(m.name.clone()),
            email: Some(m.email.clone()),
            phone: Some(m.phone.clone()),
            preferred_contact: Some(m.preferred_contact.as_str().to_string()),
            service: Some(m.service.clone()),
            project_type: m.project_type.clone(),
            budget: m.budget.clone(),
            timeline: m.timeline.clone(),
            message: Some(m.message.clone()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReviewRecord {
    pub name: Option<String>,
    pub service: Option<String>,
    pub rating: Option<i64>,
    pub text: Option<String>,
}

impl From<&Review> for ReviewRecord {
    fn from(m: &Review) -> Self {
        Self {
            name: Some(m.name.clone()),
            service: Some(m.service.as_str().to_string()),
            rating: Some(i64::from(m.rating)),
            text: Some(m.text.clone()),
        }
    }
}

/// Read one webhook column as text. Numbers and booleans are stringified;
/// null or missing columns are `None`. A badly typed column never blanks
/// its neighbours.
fn json_text(row: &serde_json::Value, key: &str) -> Option<String> {
    match row.get(key)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl ContactRecord {
    pub fn from_json(row: &serde_json::Value) -> Self {
        Self {
            name: json_text(row, "name"),
            email: json_text(row, "email"),
            phone: json_text(row, "phone"),
            preferred_contact: json_text(row, "preferred_contact"),
            service: json_text(row, "service"),
            project_type: json_text(row, "project_type"),
            budget: json_text(row, "budget"),
            timeline: json_text(row, "timeline"),
            message: json_text(row, "message"),
        }
    }
}

impl ReviewRecord {
    pub fn from_json(row: &serde_json::Value) -> Self {
        let rating = row.get("rating").and_then(|r| match r {
            serde_json::Value::String(s) => s.trim().parse().ok(),
            other => other.as_i64().or_else(|| other.as_f64().map(|f| f as i64)),
        });
        Self {
            name: json_text(row, "name"),
            service: json_text(row, "service"),
            rating,
            text: json_text(row, "text"),
        }
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn optional_line(label: &str, value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| format!("<p><strong>{label}:</strong> {}</p>", escape_html(v)))
}

fn preformatted(text: &str) -> String {
    format!(
        "<pre style=\"white-space:pre-wrap;font-family:inherit;\">{}</pre>",
        escape_html(text)
    )
}

pub fn format_contact_email(record: &ContactRecord) -> EmailMessage {
    let name = sanitize_subject(field(&record.name));
    let email = escape_html(field(&record.email));

    let mut lines = vec![
        "<h2>New contact form submission</h2>".to_string(),
        format!("<p><strong>Name:</strong> {}</p>", escape_html(&name)),
        format!("<p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>"),
        format!(
            "<p><strong>Phone:</strong> {}</p>",
            escape_html(field(&record.phone))
        ),
        format!(
            "<p><strong>Preferred contact:</strong> {}</p>",
            escape_html(field(&record.preferred_contact))
        ),
        format!(
            "<p><strong>Service:</strong> {}</p>",
            escape_html(field(&record.service))
        ),
    ];
    lines.extend(optional_line("Project type", &record.project_type));
    lines.extend(optional_line("Budget", &record.budget));
    lines.extend(optional_line("Timeline", &record.timeline));
    lines.push("<p><strong>Message:</strong></p>".to_string());
    lines.push(preformatted(field(&record.message)));

    EmailMessage {
        subject: format!("{SUBJECT_PREFIX} New contact: {name}"),
        html: lines.join("\n"),
    }
}

pub fn format_review_email(record: &ReviewRecord) -> EmailMessage {
    let name = sanitize_subject(field(&record.name));
    let lines = [
        "<h2>New review</h2>".to_string(),
        format!("<p><strong>Name:</strong> {}</p>", escape_html(&name)),
        format!(
            "<p><strong>Service:</strong> {}</p>",
            escape_html(field(&record.service))
        ),
        format!("<p><strong>Rating:</strong> {}/5</p>", record.rating.unwrap_or(0)),
        "<p><strong>Review:</strong></p>".to_string(),
        preformatted(field(&record.text)),
    ];

    EmailMessage {
        subject: format!("{SUBJECT_PREFIX} New review from {name}"),
        html: lines.join("\n"),
    }
}

// ---------------------------------------------------------------------------
// Database webhook events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TableEvent {
    Insert,
    Update,
    Delete,
}

impl TableEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

/// Generic notice for tables without a dedicated template: the event name
/// and an escaped JSON dump of the row.
pub fn format_change_email(
    table: Option<&str>,
    event: TableEvent,
    data: Option<&serde_json::Value>,
) -> EmailMessage {
    let table_name = table.unwrap_or("unknown");
    let subject = match table {
        Some(t @ ("projects" | "project_images")) => {
            format!("{SUBJECT_PREFIX} Change: {t} {}", event.as_str())
        }
        _ => format!("{SUBJECT_PREFIX} {table_name} - {}", event.as_str()),
    };
    let dump = data
        .and_then(|d| serde_json::to_string_pretty(d).ok())
        .unwrap_or_else(|| "{}".to_string());

    EmailMessage {
        subject: sanitize_subject(&subject),
        html: format!(
            "<p>Table: {}, Event: {}</p><pre>{}</pre>",
            escape_html(table_name),
            event.as_str(),
            escape_html(&dump)
        ),
    }
}

/// Email for a row-level webhook event.
///
/// Inserts into `contact_submissions` and `reviews` use the dedicated
/// templates; updates keep the body but say "updated" in the subject.
pub fn format_table_event(
    table: Option<&str>,
    event: TableEvent,
    data: Option<&serde_json::Value>,
) -> EmailMessage {
    let row_event = matches!(event, TableEvent::Insert | TableEvent::Update);

    match (table, data) {
        (Some("contact_submissions"), Some(data)) if row_event => {
            let record = ContactRecord::from_json(data);
            let mut message = format_contact_email(&record);
            if event == TableEvent::Update {
                message.subject = sanitize_subject(&format!(
                    "{SUBJECT_PREFIX} Contact updated: {}",
                    field(&record.name)
                ));
            }
            message
        }
        (Some("reviews"), Some(data)) if row_event => {
            let record = ReviewRecord::from_json(data);
            let mut message = format_review_email(&record);
            if event == TableEvent::Update {
                message.subject = sanitize_subject(&format!(
                    "{SUBJECT_PREFIX} Review updated: {}",
                    field(&record.name)
                ));
            }
            message
        }
        _ => format_change_email(table, event, data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_mixed_whitespace() {
        assert_eq!(sanitize_subject("  a\t\tb \r\n\r\n c  "), "a b c");
    }

    #[test]
    fn sanitize_counts_characters_not_bytes() {
        let subject = sanitize_subject(&"é".repeat(250));
        assert_eq!(subject.chars().count(), MAX_SUBJECT_LENGTH);
    }

    #[test]
    fn ampersand_is_escaped_once() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }
}
