/// Prefix every SPDX license line starts with, regardless of the license.
pub const MARKER_PREFIX: &str = "// SPDX-License-Identifier:";

/// Number of leading lines searched for an existing marker.
pub const MARKER_WINDOW: usize = 5;

pub const DEFAULT_LICENSE: &str = "GPL-3.0-or-later";

/// The license header stamped on top of source files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    license: String,
}

impl Header {
    pub fn new(license: impl Into<String>) -> Self {
        Self {
            license: license.into(),
        }
    }

    pub fn line(&self) -> String {
        format!("{MARKER_PREFIX} {}", self.license)
    }

    /// Returns true if any of the first [`MARKER_WINDOW`] lines carries the marker.
    ///
    /// The license after the prefix is not compared, so a file declaring a
    /// different license still counts as stamped.
    pub fn is_present(content: &str) -> bool {
        content
            .lines()
            .take(MARKER_WINDOW)
            .any(|line| line.starts_with(MARKER_PREFIX))
    }

    /// Prepends the header line and a blank line, keeping `content` byte for byte.
    pub fn stamp(&self, content: &str) -> String {
        let line = self.line();
        let mut stamped = String::with_capacity(line.len() + 2 + content.len());
        stamped.push_str(&line);
        stamped.push_str("\n\n");
        stamped.push_str(content);
        stamped
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new(DEFAULT_LICENSE)
    }
}
