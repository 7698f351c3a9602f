//! Builds the public gallery from the flat `projects` and `project_images`
//! tables.
//!
//! Galleries are small, so each project scans the full image list; there is
//! no index.

use uuid::Uuid;

use crate::models::project_images::{self, ImageLabel};
use crate::models::projects::{self, ProjectView, ProjectWithImages};

/// Images of one project with the given label, ascending by `sort_order`.
///
/// The sort is stable, so rows sharing a `sort_order` keep their input order.
pub fn images_for(
    images: &[project_images::Model],
    project_id: Uuid,
    label: ImageLabel,
) -> Vec<&project_images::Model> {
    let mut matching: Vec<&project_images::Model> = images
        .iter()
        .filter(|i| i.project_id == project_id && i.label == label)
        .collect();
    matching.sort_by_key(|i| i.sort_order);
    matching
}

fn urls_for(images: &[project_images::Model], project_id: Uuid, label: ImageLabel) -> Vec<String> {
    images_for(images, project_id, label)
        .into_iter()
        .map(|i| i.url.clone())
        .collect()
}

/// Attach ordered `before`/`after` URL lists to every project.
///
/// A label with no images yields an empty list.
pub fn join_project_images(
    projects: Vec<projects::Model>,
    images: &[project_images::Model],
) -> Vec<ProjectView> {
    projects
        .into_iter()
        .map(|p| ProjectView {
            before: urls_for(images, p.id, ImageLabel::Before),
            after: urls_for(images, p.id, ImageLabel::After),
            id: p.id,
            category: p.category,
            title: p.title,
            description: p.description.unwrap_or_default(),
        })
        .collect()
}

/// Same join as [`join_project_images`] but keeps the full image rows for the
/// admin screens.
pub fn group_project_images(
    projects: Vec<projects::Model>,
    images: &[project_images::Model],
) -> Vec<ProjectWithImages> {
    projects
        .into_iter()
        .map(|project| ProjectWithImages {
            before: images_for(images, project.id, ImageLabel::Before)
                .into_iter()
                .cloned()
                .collect(),
            after: images_for(images, project.id, ImageLabel::After)
                .into_iter()
                .cloned()
                .collect(),
            project,
        })
        .collect()
}

/// Position for an image or project appended after `existing`.
pub fn next_sort_order(existing: impl IntoIterator<Item = i32>) -> i32 {
    existing.into_iter().max().map_or(1, |max| max + 1)
}
