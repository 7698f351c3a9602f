use sea_orm::*;
use uuid::Uuid;

use crate::models::error_logs::{
    self, CreateErrorLog, MESSAGE_MAX, STACK_MAX, URL_MAX, USER_AGENT_MAX,
};
use crate::models::{non_empty, trim_to};

/// Build the row to insert; every text field is trimmed and capped.
pub fn prepare_error_log(input: CreateErrorLog) -> error_logs::ActiveModel {
    error_logs::ActiveModel {
        id: Set(Uuid::new_v4()),
        message: Set(trim_to(&input.message, MESSAGE_MAX)),
        stack: Set(non_empty(input.stack).map(|s| trim_to(&s, STACK_MAX))),
        url: Set(non_empty(input.url).map(|u| trim_to(&u, URL_MAX))),
        user_agent: Set(non_empty(input.user_agent).map(|ua| trim_to(&ua, USER_AGENT_MAX))),
        created_at: Set(chrono::Utc::now()),
    }
}

/// Store a client error report.
pub async fn insert_error_log(
    db: &DatabaseConnection,
    input: CreateErrorLog,
) -> Result<error_logs::Model, DbErr> {
    prepare_error_log(input).insert(db).await
}
