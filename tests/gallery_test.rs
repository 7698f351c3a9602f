use chrono::Utc;
use uuid::Uuid;

use jen_site_backend::gallery::{images_for, join_project_images, next_sort_order};
use jen_site_backend::models::project_images::{self, ImageLabel};
use jen_site_backend::models::projects::{self, ProjectCategory};

fn project(title: &str, description: Option<&str>) -> projects::Model {
    projects::Model {
        id: Uuid::new_v4(),
        title: title.to_string(),
        category: ProjectCategory::Kitchen,
        description: description.map(str::to_string),
        sort_order: 1,
        created_at: Utc::now(),
    }
}

fn image(project_id: Uuid, url: &str, label: ImageLabel, sort_order: i32) -> project_images::Model {
    project_images::Model {
        id: Uuid::new_v4(),
        project_id,
        url: url.to_string(),
        label,
        sort_order,
        created_at: Utc::now(),
    }
}

#[test]
fn images_are_split_by_label_and_ordered() {
    let p = project("Kitchen refresh", Some("New cabinets"));
    let images = vec![
        image(p.id, "b2", ImageLabel::Before, 2),
        image(p.id, "a1", ImageLabel::After, 1),
        image(p.id, "b1", ImageLabel::Before, 1),
    ];

    let views = join_project_images(vec![p.clone()], &images);

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].id, p.id);
    assert_eq!(views[0].before, vec!["b1", "b2"]);
    assert_eq!(views[0].after, vec!["a1"]);
    assert_eq!(views[0].description, "New cabinets");
}

#[test]
fn images_never_cross_projects() {
    let first = project("First", None);
    let second = project("Second", None);
    let images = vec![
        image(second.id, "s-before", ImageLabel::Before, 1),
        image(first.id, "f-after", ImageLabel::After, 1),
    ];

    let views = join_project_images(vec![first, second], &images);

    assert!(views[0].before.is_empty());
    assert_eq!(views[0].after, vec!["f-after"]);
    assert_eq!(views[1].before, vec!["s-before"]);
    assert!(views[1].after.is_empty());
}

#[test]
fn missing_description_becomes_empty_string() {
    let views = join_project_images(vec![project("Bare", None)], &[]);
    assert_eq!(views[0].description, "");
    assert!(views[0].before.is_empty() && views[0].after.is_empty());
}

#[test]
fn project_order_is_preserved() {
    let titles = ["c", "a", "b"];
    let views = join_project_images(titles.iter().map(|t| project(t, None)).collect(), &[]);
    let out: Vec<&str> = views.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(out, titles);
}

#[test]
fn equal_sort_orders_keep_input_order() {
    let p = project("Ties", None);
    let images = vec![
        image(p.id, "first", ImageLabel::Before, 1),
        image(p.id, "second", ImageLabel::Before, 1),
    ];
    let urls: Vec<&str> = images_for(&images, p.id, ImageLabel::Before)
        .into_iter()
        .map(|i| i.url.as_str())
        .collect();
    assert_eq!(urls, ["first", "second"]);
}

#[test]
fn next_position_follows_the_highest() {
    assert_eq!(next_sort_order(Vec::new()), 1);
    assert_eq!(next_sort_order([1, 4, 2]), 5);
}
