use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validation::ReviewFormFields;

/// Which service a review is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "kebab-case")]
pub enum ReviewService {
    #[sea_orm(string_value = "basement")]
    Basement,
    #[sea_orm(string_value = "kitchen")]
    Kitchen,
    #[sea_orm(string_value = "bathroom")]
    Bathroom,
    #[sea_orm(string_value = "living-room")]
    LivingRoom,
    #[sea_orm(string_value = "other")]
    Other,
}

impl ReviewService {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basement => "basement",
            Self::Kitchen => "kitchen",
            Self::Bathroom => "bathroom",
            Self::LivingRoom => "living-room",
            Self::Other => "other",
        }
    }
}

/// SeaORM entity for the `reviews` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub service: ReviewService,
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub helpful: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body of `POST /api/reviews` and `POST /api/admin/reviews`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewInput {
    pub name: String,
    pub service: ReviewService,
    pub rating: i32,
    pub text: String,
}

impl ReviewInput {
    pub fn form_fields(&self) -> ReviewFormFields<'_> {
        ReviewFormFields {
            name: &self.name,
            rating: self.rating,
            text: &self.text,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewListQuery {
    pub service: Option<ReviewService>,
}

/// A review as the public site displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    pub service: ReviewService,
    pub rating: i32,
    /// `YYYY-MM-DD` portion of the creation timestamp.
    pub date: String,
    pub text: String,
    pub helpful: i32,
}

impl From<Model> for Review {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            service: m.service,
            rating: m.rating,
            date: m.created_at.format("%Y-%m-%d").to_string(),
            text: m.text,
            helpful: m.helpful.unwrap_or(0),
        }
    }
}

/// Aggregate shown above the review list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub average: f64,
    pub total: usize,
}

/// Average rating rounded to one decimal place.
pub fn summarize_reviews(reviews: &[Review]) -> ReviewSummary {
    if reviews.is_empty() {
        return ReviewSummary {
            average: 0.0,
            total: 0,
        };
    }
    let sum: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
    let mean = sum as f64 / reviews.len() as f64;
    ReviewSummary {
        average: (mean * 10.0).round() / 10.0,
        total: reviews.len(),
    }
}
