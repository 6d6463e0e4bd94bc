//! File name search.
//!
//! # Design Decisions
//! - Walk is depth-limited and never follows symlinks
//! - `node_modules` is skipped entirely
//! - Unreadable entries are skipped silently
//! - Match is a case-insensitive substring on file name or root-relative path

use std::path::Path;

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// Search response body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchResults {
    pub results: Vec<String>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl SearchResults {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            total: 0,
            query: None,
        }
    }
}

/// All files below `dir` as `/`-separated paths relative to `root`.
///
/// `dir` must lie inside `root`; both are expected in canonical form.
/// Symlinks are listed as entries but never followed.
pub fn collect_files(dir: &Path, root: &Path, max_depth: usize) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_skipped(entry))
        .filter_map(Result::ok)
        .filter(|entry| !entry.file_type().is_dir())
        .filter_map(|entry| relative_path(entry.path(), root))
        .collect();
    files.sort();
    files
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && SKIPPED_DIRS.iter().any(|skip| entry.file_name() == *skip)
}

fn relative_path(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(format!("/{}", parts.join("/")))
}

/// Filter `files` by `query`, keeping at most `limit` results.
pub fn filter_files(files: &[String], query: &str, limit: usize) -> SearchResults {
    let needle = query.to_lowercase();
    let matches: Vec<&String> = files
        .iter()
        .filter(|f| {
            let lowered = f.to_lowercase();
            let name = lowered.rsplit('/').next().unwrap_or(&lowered);
            name.contains(&needle) || lowered.contains(&needle)
        })
        .collect();

    SearchResults {
        total: matches.len(),
        results: matches.into_iter().take(limit).cloned().collect(),
        query: Some(query.to_string()),
    }
}
