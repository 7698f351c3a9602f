pub mod dispatch;
pub mod format;

pub use dispatch::{NotifyConfig, NotifyError, Notifier};
pub use format::{
    ContactRecord, EmailMessage, ReviewRecord, escape_html, format_contact_email,
    format_review_email, sanitize_subject,
};
