use anyhow::Result;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Recursive file listing under `root`, hidden files excluded, sorted
/// shallow-first and then lexicographically so that later tie-breaks on
/// the listing are deterministic.
///
/// # Errors
/// Returns error if a directory cannot be read while walking.
pub fn list_paths_sorted_by_components(root: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .build();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort_by(compare_by_components);
    Ok(paths)
}

fn compare_by_components(a: &PathBuf, b: &PathBuf) -> Ordering {
    a.components()
        .count()
        .cmp(&b.components().count())
        .then_with(|| a.cmp(b))
}
