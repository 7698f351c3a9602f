use sea_orm::*;
use uuid::Uuid;

use crate::models::admin_users;

/// Whether the auth user has a row in `admin_users`.
pub async fn is_admin(db: &DatabaseConnection, user_id: Uuid) -> Result<bool, DbErr> {
    Ok(admin_users::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .is_some())
}
