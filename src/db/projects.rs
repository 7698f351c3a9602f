use sea_orm::*;
use uuid::Uuid;

use crate::gallery::{group_project_images, join_project_images, next_sort_order};
use crate::models::project_images::{self, CreateProjectImage};
use crate::models::projects::{
    self, CreateProject, ProjectCategory, ProjectView, ProjectWithImages, UpdateProject,
};

async fn get_projects(
    db: &DatabaseConnection,
    category: Option<ProjectCategory>,
) -> Result<Vec<projects::Model>, DbErr> {
    let mut query = projects::Entity::find();
    if let Some(category) = category {
        query = query.filter(projects::Column::Category.eq(category));
    }
    query
        .order_by_asc(projects::Column::SortOrder)
        .all(db)
        .await
}

async fn get_all_images(db: &DatabaseConnection) -> Result<Vec<project_images::Model>, DbErr> {
    project_images::Entity::find()
        .order_by_asc(project_images::Column::SortOrder)
        .all(db)
        .await
}

/// Public gallery: projects by `sort_order` with their before/after URLs.
///
/// No projects (or a failed project query) returns an empty list without
/// querying images. A failed image query leaves every project without
/// photos. Both failures are logged, never returned.
pub async fn fetch_projects(
    db: &DatabaseConnection,
    category: Option<ProjectCategory>,
) -> Vec<ProjectView> {
    let projects = match get_projects(db, category).await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::warn!("Failed to fetch projects: {e}");
            return Vec::new();
        }
    };

    if projects.is_empty() {
        return Vec::new();
    }

    let images = get_all_images(db).await.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch project images: {e}");
        Vec::new()
    });

    join_project_images(projects, &images)
}

/// Admin listing: every project with its image rows. Errors are propagated.
pub async fn get_projects_with_images(
    db: &DatabaseConnection,
) -> Result<Vec<ProjectWithImages>, DbErr> {
    let projects = get_projects(db, None).await?;
    if projects.is_empty() {
        return Ok(Vec::new());
    }
    let images = get_all_images(db).await?;
    Ok(group_project_images(projects, &images))
}

/// Fetch a single project by ID.
pub async fn get_project_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<projects::Model>, DbErr> {
    projects::Entity::find_by_id(id).one(db).await
}

/// Insert a new project, appended after the last one unless a position is given.
pub async fn insert_project(
    db: &DatabaseConnection,
    input: CreateProject,
) -> Result<projects::Model, DbErr> {
    let sort_order = match input.sort_order {
        Some(sort_order) => sort_order,
        None => {
            let existing = projects::Entity::find().all(db).await?;
            next_sort_order(existing.iter().map(|p| p.sort_order))
        }
    };

    let new_project = projects::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title.trim().to_string()),
        category: Set(input.category),
        description: Set(input.description),
        sort_order: Set(sort_order),
        created_at: Set(chrono::Utc::now()),
    };

    new_project.insert(db).await
}

/// Update an existing project; only the fields present in `input` change.
pub async fn update_project(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateProject,
) -> Result<projects::Model, DbErr> {
    let project = projects::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Project not found".to_string()))?;

    let mut active: projects::ActiveModel = project.into();

    if let Some(title) = input.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(category) = input.category {
        active.category = Set(category);
    }
    if let Some(description) = input.description {
        active.description = Set(Some(description));
    }
    if let Some(sort_order) = input.sort_order {
        active.sort_order = Set(sort_order);
    }

    active.update(db).await
}

/// Delete a project and its images.
///
/// Both deletes run in one transaction, so a failure leaves the project and
/// all of its images in place.
pub async fn delete_project(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    let txn = db.begin().await?;

    let images = project_images::Entity::delete_many()
        .filter(project_images::Column::ProjectId.eq(id))
        .exec(&txn)
        .await?;
    let project = projects::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;
    tracing::info!(
        "Deleted project {id} with {} image(s)",
        images.rows_affected
    );
    Ok(project)
}

/// Append an image to the end of the project's before- or after-set.
pub async fn insert_image(
    db: &DatabaseConnection,
    project_id: Uuid,
    input: CreateProjectImage,
) -> Result<project_images::Model, DbErr> {
    let siblings = project_images::Entity::find()
        .filter(project_images::Column::ProjectId.eq(project_id))
        .filter(project_images::Column::Label.eq(input.label))
        .all(db)
        .await?;

    let new_image = project_images::ActiveModel {
        id: Set(Uuid::new_v4()),
        project_id: Set(project_id),
        url: Set(input.url.trim().to_string()),
        label: Set(input.label),
        sort_order: Set(next_sort_order(siblings.iter().map(|i| i.sort_order))),
        created_at: Set(chrono::Utc::now()),
    };

    new_image.insert(db).await
}

/// Delete a single image by ID.
pub async fn delete_image(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    project_images::Entity::delete_by_id(id).exec(db).await
}
