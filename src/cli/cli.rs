use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;
use crate::header::DEFAULT_LICENSE;

/// Adds an SPDX license header to source files that lack one.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Directory to scan recursively
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// Extension of the files to stamp
    #[clap(long, short, default_value = "go")]
    pub extension: String,

    /// SPDX identifier written into new headers
    #[clap(long, default_value = DEFAULT_LICENSE)]
    pub license: String,

    /// Only report files without a header and fail if there are any
    #[clap(long, short)]
    pub check: bool,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
