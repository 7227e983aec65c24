//! Discovery of candidate source files in a directory tree.

mod walker;

pub use walker::{WalkError, find_candidate_files};
