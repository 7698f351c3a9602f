use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub const MESSAGE_MAX: usize = 2_000;
pub const STACK_MAX: usize = 10_000;
pub const URL_MAX: usize = 2_000;
pub const USER_AGENT_MAX: usize = 2_000;

/// SeaORM entity for the `error_logs` table (write-only sink).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "error_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub stack: Option<String>,
    pub url: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// A client-side error report.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateErrorLog {
    pub message: String,
    pub stack: Option<String>,
    pub url: Option<String>,
    pub user_agent: Option<String>,
}
