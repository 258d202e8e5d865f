//! Workspace path helpers.
//!
//! Workspace paths are absolute and slash-separated (`/Users/alice/etl`).
//! The service owns path validation; these helpers only split paths.

/// Returns the folder containing `path`, or `None` when `path` sits directly
/// under the root (or is the root itself).
#[must_use]
pub fn parent_dir(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => None,
        Some(idx) => Some(&trimmed[..idx]),
    }
}
