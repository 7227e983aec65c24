//! The SPDX license header and the rules for detecting it.

mod header;

pub use header::{DEFAULT_LICENSE, Header};
