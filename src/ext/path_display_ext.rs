use std::path::{Path, PathBuf};

/// Absolute form of `path` for messages, without touching the filesystem.
///
/// `.` components are dropped, `..` is kept as written.
fn absolute_for_display(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

pub trait PathDisplayExt {
    fn best_effort_display(&self) -> String;
}

impl<P> PathDisplayExt for P
where
    P: AsRef<Path> + ?Sized,
{
    fn best_effort_display(&self) -> String {
        absolute_for_display(self.as_ref()).display().to_string()
    }
}
