use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::ext::PathDisplayExt;

/// Lazily walks the directory `root` and yields every file whose name ends with `.{extension}`.
///
/// Entries inside a directory are visited in file-name order. Symlinked
/// directories are not descended into, but a symlink to a file is yielded as a
/// candidate. When `root` is itself a file nothing is yielded. Traversal errors
/// are yielded in place, so the caller decides whether to stop.
pub fn find_candidate_files(
    root: &Path,
    extension: &str,
) -> impl Iterator<Item = Result<PathBuf, WalkError>> + use<> {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let root = root.to_path_buf();
    debug!(
        "Walking {} for '*{}' files",
        root.best_effort_display(),
        suffix
    );

    WalkDir::new(&root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) if is_candidate(&entry, &suffix) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(source) => Some(Err(source).context(WalkSnafu { root: root.clone() })),
        })
}

fn is_candidate(entry: &DirEntry, suffix: &str) -> bool {
    if !entry.file_name().to_string_lossy().ends_with(suffix) {
        return false;
    }

    let file_type = entry.file_type();
    if file_type.is_symlink() {
        // A dangling link stays a candidate so that reading it reports the error.
        return std::fs::metadata(entry.path()).map_or(true, |metadata| !metadata.is_dir());
    }
    file_type.is_file()
}

#[derive(Debug, Snafu)]
#[snafu(display("Failed to walk the directory tree under {}", root.best_effort_display()))]
pub struct WalkError {
    root: PathBuf,
    source: walkdir::Error,
}
