pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_contact_submissions_table;
mod m20250301_000002_create_reviews_table;
mod m20250301_000003_create_projects_table;
mod m20250301_000004_create_project_images_table;
mod m20250301_000005_create_admin_users_table;
mod m20250301_000006_create_error_logs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_contact_submissions_table::Migration),
            Box::new(m20250301_000002_create_reviews_table::Migration),
            Box::new(m20250301_000003_create_projects_table::Migration),
            Box::new(m20250301_000004_create_project_images_table::Migration),
            Box::new(m20250301_000005_create_admin_users_table::Migration),
            Box::new(m20250301_000006_create_error_logs_table::Migration),
        ]
    }
}
