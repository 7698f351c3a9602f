use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Room type a portfolio project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    #[sea_orm(string_value = "basement")]
    Basement,
    #[sea_orm(string_value = "kitchen")]
    Kitchen,
    #[sea_orm(string_value = "bathroom")]
    Bathroom,
    #[sea_orm(string_value = "living-room")]
    LivingRoom,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basement => "basement",
            Self::Kitchen => "kitchen",
            Self::Bathroom => "bathroom",
            Self::LivingRoom => "living-room",
        }
    }
}

/// SeaORM entity for the `projects` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub category: ProjectCategory,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_images::Entity")]
    Images,
}

impl Related<super::project_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub category: ProjectCategory,
    pub description: Option<String>,
    /// Appended after the last project when omitted.
    pub sort_order: Option<i32>,
}

/// Field-level patch; each present field is written independently.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub category: Option<ProjectCategory>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectListQuery {
    pub category: Option<ProjectCategory>,
}

/// A gallery entry with its before/after photo URLs in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectView {
    pub id: Uuid,
    pub category: ProjectCategory,
    pub title: String,
    pub description: String,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

/// Admin listing entry: the stored project plus its image rows.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithImages {
    #[serde(flatten)]
    pub project: Model,
    pub before: Vec<super::project_images::Model>,
    pub after: Vec<super::project_images::Model>,
}
