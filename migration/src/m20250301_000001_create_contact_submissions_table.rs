use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `contact_submissions` table and its columns.
#[derive(DeriveIden)]
enum ContactSubmissions {
    Table,
    Id,
    Name,
    Email,
    Phone,
    PreferredContact,
    Service,
    ProjectType,
    Budget,
    Timeline,
    Message,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContactSubmissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContactSubmissions::Name).string_len(200).not_null())
                    .col(ColumnDef::new(ContactSubmissions::Email).string_len(255).not_null())
                    .col(ColumnDef::new(ContactSubmissions::Phone).string_len(50).not_null())
                    .col(
                        ColumnDef::new(ContactSubmissions::PreferredContact)
                            .string()
                            .not_null()
                            .default("email"),
                    )
                    .col(ColumnDef::new(ContactSubmissions::Service).string().not_null())
                    .col(ColumnDef::new(ContactSubmissions::ProjectType).string().null())
                    .col(ColumnDef::new(ContactSubmissions::Budget).string().null())
                    .col(ColumnDef::new(ContactSubmissions::Timeline).string().null())
                    .col(ColumnDef::new(ContactSubmissions::Message).text().not_null())
                    .col(
                        ColumnDef::new(ContactSubmissions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Admin inbox lists newest first.
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_submissions_created_at")
                    .table(ContactSubmissions::Table)
                    .col(ContactSubmissions::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactSubmissions::Table).to_owned())
            .await
    }
}
