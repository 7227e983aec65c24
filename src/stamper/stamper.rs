use std::path::{Path, PathBuf};

use compio::fs;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::ext::PathDisplayExt;
use crate::filesystem::{WalkError, find_candidate_files};
use crate::header::Header;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StampMode {
    /// Rewrite files that lack the header.
    #[default]
    Write,
    /// Only report files that lack the header.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampOutcome {
    Stamped,
    AlreadyPresent,
    /// The header is absent and the file was left alone (check mode).
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StampSummary {
    pub stamped: usize,
    pub already_present: usize,
    pub missing: usize,
}

impl StampSummary {
    fn record(&mut self, outcome: StampOutcome) {
        match outcome {
            StampOutcome::Stamped => self.stamped += 1,
            StampOutcome::AlreadyPresent => self.already_present += 1,
            StampOutcome::Missing => self.missing += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.stamped + self.already_present + self.missing
    }
}

/// Inserts the license header into every candidate file that lacks one.
///
/// Files are handled strictly one after another and the first failure stops
/// the run. Files processed before the failure keep their new content.
#[derive(Debug, Clone)]
pub struct Stamper {
    header: Header,
    extension: String,
    mode: StampMode,
}

impl Stamper {
    pub fn new(header: Header, extension: impl Into<String>, mode: StampMode) -> Self {
        Self {
            header,
            extension: extension.into(),
            mode,
        }
    }

    pub async fn process_file(&self, path: &Path) -> Result<StampOutcome, StampError> {
        let bytes = fs::read(path).await.context(ReadSnafu { path })?;
        let content = String::from_utf8(bytes).context(DecodeSnafu { path })?;

        if Header::is_present(&content) {
            debug!("Header found in {}", path.best_effort_display());
            return Ok(StampOutcome::AlreadyPresent);
        }

        if self.mode == StampMode::Check {
            debug!("Header missing in {}", path.best_effort_display());
            return Ok(StampOutcome::Missing);
        }

        let stamped = self.header.stamp(&content);
        debug!(
            "Writing {} bytes to {}",
            stamped.len(),
            path.best_effort_display()
        );
        fs::write(path, stamped.into_bytes())
            .await
            .0
            .context(WriteSnafu { path })?;

        Ok(StampOutcome::Stamped)
    }

    /// Processes every candidate under `root`, calling `on_outcome` after each file.
    pub async fn run(
        &self,
        root: &Path,
        mut on_outcome: impl FnMut(&Path, StampOutcome),
    ) -> Result<StampSummary, StampError> {
        let mut summary = StampSummary::default();

        for path in find_candidate_files(root, &self.extension) {
            let path = path.context(WalkSnafu)?;
            let outcome = self.process_file(&path).await?;
            on_outcome(&path, outcome);
            summary.record(outcome);
        }

        info!(
            "Processed {} file(s) under {}: {} stamped, {} already present, {} missing",
            summary.total(),
            root.best_effort_display(),
            summary.stamped,
            summary.already_present,
            summary.missing
        );
        Ok(summary)
    }
}

#[derive(Debug, Snafu)]
pub enum StampError {
    #[snafu(display("Failed to discover candidate files"))]
    WalkError { source: WalkError },
    #[snafu(display("Failed to read {}", path.best_effort_display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("{} is not valid UTF-8 text", path.best_effort_display()))]
    DecodeError {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to write {}", path.best_effort_display()))]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}
