use std::collections::HashSet;
use std::path::{Path, PathBuf};

const BUILD_FILE_NAMES: [&str; 2] = ["build.gradle", "build.gradle.kts"];

fn is_build_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| BUILD_FILE_NAMES.contains(&name))
}

/// Filters a file listing down to root build files.
///
/// A build file only counts as a root when no ancestor directory carries a
/// build file of its own: module subprojects keep same-named build files
/// one or more directories deeper and must not shadow the root. Input
/// order is preserved, so a listing sorted by path components yields the
/// candidates in deterministic tie-break order.
#[must_use]
pub fn filter_root_build_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let build_dirs: HashSet<&Path> = paths
        .iter()
        .filter(|path| is_build_file(path))
        .filter_map(|path| path.parent())
        .collect();

    paths
        .iter()
        .filter(|path| is_build_file(path))
        .filter(|path| {
            // skip the file itself and its own directory
            !path
                .ancestors()
                .skip(2)
                .any(|ancestor| build_dirs.contains(ancestor))
        })
        .cloned()
        .collect()
}
