use std::path::Path;

use colored::{ColoredString, Colorize};
use supports_color::Stream;

use crate::ext::PathDisplayExt;
use crate::stamper::{StampOutcome, StampSummary};

/// Prints stamping results to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Reporter;

impl Reporter {
    /// Enables colors only when stdout can show them.
    pub fn new() -> Self {
        colored::control::set_override(supports_color::on(Stream::Stdout).is_some());
        Self
    }

    pub fn file(&self, path: &Path, outcome: StampOutcome) {
        println!("{}", outcome_line(path, outcome));
    }

    pub fn summary(&self, summary: &StampSummary) {
        println!("{}", summary_line(summary));
    }
}

fn outcome_line(path: &Path, outcome: StampOutcome) -> ColoredString {
    let path = path.best_effort_display();
    match outcome {
        StampOutcome::Stamped => format!("Added SPDX identifier to {path}").green(),
        StampOutcome::AlreadyPresent => {
            format!("SPDX identifier already present in {path}").dimmed()
        }
        StampOutcome::Missing => format!("Missing SPDX identifier in {path}").yellow(),
    }
}

fn summary_line(summary: &StampSummary) -> ColoredString {
    let line = format!(
        "{} file(s): {} stamped, {} already present, {} missing",
        summary.total(),
        summary.stamped,
        summary.already_present,
        summary.missing
    );
    if summary.missing > 0 {
        line.yellow().bold()
    } else {
        line.bold()
    }
}
