//! User-facing output: one line per processed file plus a closing summary.

mod reporter;

pub use reporter::Reporter;
