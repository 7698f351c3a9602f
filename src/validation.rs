//! Form validation for the public contact and review forms.
//!
//! Every rule is checked independently so a visitor sees all problems at
//! once. Nothing here touches the database.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const NAME_MAX: usize = 200;
pub const MESSAGE_MIN: usize = 20;
pub const MESSAGE_MAX: usize = 10_000;
pub const REVIEW_TEXT_MAX: usize = 5_000;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

// ASCII digits only; `\d` would also accept other Unicode digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9 ()+\-]+$").expect("valid regex"));

/// Field-keyed error messages plus an overall verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValidation<F: Ord> {
    pub errors: BTreeMap<F, &'static str>,
    pub valid: bool,
}

impl<F: Ord> FormValidation<F> {
    fn from_errors(errors: BTreeMap<F, &'static str>) -> Self {
        let valid = errors.is_empty();
        Self { errors, valid }
    }

    pub fn error(&self, field: F) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactFormFields<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub service: &'a str,
    pub message: &'a str,
}

/// `local@domain.tld` shape: one `@`, a `.` after it, no whitespace.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Digits, spaces, hyphens, parentheses and `+` only, with at least ten digits.
pub fn validate_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    digits >= 10 && PHONE_RE.is_match(phone)
}

pub fn validate_contact_form(data: &ContactFormFields<'_>) -> FormValidation<ContactField> {
    let mut errors = BTreeMap::new();

    let name = data.name.trim();
    if name.is_empty() {
        errors.insert(ContactField::Name, "Name is required");
    } else if name.chars().count() > NAME_MAX {
        errors.insert(ContactField::Name, "Name is too long");
    }

    if data.email.trim().is_empty() {
        errors.insert(ContactField::Email, "Email is required");
    } else if !validate_email(data.email) {
        errors.insert(ContactField::Email, "Please enter a valid email address");
    }

    if data.phone.trim().is_empty() {
        errors.insert(ContactField::Phone, "Phone number is required");
    } else if !validate_phone(data.phone) {
        errors.insert(ContactField::Phone, "Please enter a valid phone number");
    }

    if data.service.is_empty() {
        errors.insert(ContactField::Service, "Please select a service");
    }

    let message = data.message.trim();
    let message_len = message.chars().count();
    if message.is_empty() {
        errors.insert(ContactField::Message, "Please tell us about your project");
    } else if message_len < MESSAGE_MIN {
        errors.insert(
            ContactField::Message,
            "Please provide more details (at least 20 characters)",
        );
    } else if message_len > MESSAGE_MAX {
        errors.insert(
            ContactField::Message,
            "Message is too long (max 10,000 characters)",
        );
    }

    FormValidation::from_errors(errors)
}

// ---------------------------------------------------------------------------
// Review form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewField {
    Name,
    Rating,
    Text,
}

#[derive(Debug, Clone, Copy)]
pub struct ReviewFormFields<'a> {
    pub name: &'a str,
    pub rating: i32,
    pub text: &'a str,
}

pub fn validate_review(data: &ReviewFormFields<'_>) -> FormValidation<ReviewField> {
    let mut errors = BTreeMap::new();

    let name = data.name.trim();
    if name.is_empty() {
        errors.insert(ReviewField::Name, "Name is required");
    } else if name.chars().count() > NAME_MAX {
        errors.insert(ReviewField::Name, "Name is too long");
    }

    if !(1..=5).contains(&data.rating) {
        errors.insert(ReviewField::Rating, "Please select a rating");
    }

    let text = data.text.trim();
    if text.is_empty() {
        errors.insert(ReviewField::Text, "Please share your experience");
    } else if text.chars().count() > REVIEW_TEXT_MAX {
        errors.insert(ReviewField::Text, "Review is too long (max 5,000 characters)");
    }

    FormValidation::from_errors(errors)
}
