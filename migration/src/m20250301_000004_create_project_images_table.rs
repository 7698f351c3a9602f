use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `project_images` table and its columns.
#[derive(DeriveIden)]
enum ProjectImages {
    Table,
    Id,
    ProjectId,
    Url,
    Label,
    SortOrder,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectImages::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(ProjectImages::Url).text().not_null())
                    .col(ColumnDef::new(ProjectImages::Label).string().not_null())
                    .col(
                        ColumnDef::new(ProjectImages::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProjectImages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_images_project_id")
                            .from(ProjectImages::Table, ProjectImages::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Ordering is scoped per (project, label).
        manager
            .create_index(
                Index::create()
                    .name("idx_project_images_project_label_order")
                    .table(ProjectImages::Table)
                    .col(ProjectImages::ProjectId)
                    .col(ProjectImages::Label)
                    .col(ProjectImages::SortOrder)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectImages::Table).to_owned())
            .await
    }
}
