use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validation::ContactFormFields;

/// How the visitor wants to be reached, stored as a lowercase string.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    #[default]
    #[sea_orm(string_value = "email")]
    Email,
    #[sea_orm(string_value = "phone")]
    Phone,
    #[sea_orm(string_value = "either")]
    Either,
}

impl PreferredContact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Either => "either",
        }
    }
}

/// SeaORM entity for the `contact_submissions` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_contact: PreferredContact,
    pub service: String,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body of `POST /api/contact`.
///
/// Missing text fields decode as empty so the validator can report them.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmissionInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub preferred_contact: PreferredContact,
    #[serde(default)]
    pub service: String,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmissionInput {
    /// The subset of fields the contact form validator checks.
    pub fn form_fields(&self) -> ContactFormFields<'_> {
        ContactFormFields {
            name: &self.name,
            email: &self.email,
            phone: &self.phone,
            service: &self.service,
            message: &self.message,
        }
    }
}
