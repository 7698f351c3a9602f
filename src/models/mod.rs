pub mod admin_users;
pub mod contacts;
pub mod error_logs;
pub mod project_images;
pub mod projects;
pub mod reviews;

/// Keep the first `max` characters of the trimmed input.
///
/// Counts Unicode scalar values, so multi-byte input is never split.
pub fn trim_to(input: &str, max: usize) -> String {
    input.trim().chars().take(max).collect()
}

/// Empty strings from optional form selects are stored as NULL.
pub fn non_empty(input: Option<String>) -> Option<String> {
    input.filter(|s| !s.is_empty())
}
