use std::path::PathBuf;

use crate::cli::Cli;
use crate::stamper::StampMode;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub extension: String,
    pub license: String,
    pub mode: StampMode,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            extension: cli.extension,
            license: cli.license,
            mode: if cli.check {
                StampMode::Check
            } else {
                StampMode::Write
            },
        }
    }
}
