use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::header::Header;
use crate::report::Reporter;
use crate::stamper::{StampError, StampSummary, Stamper};

pub struct Application;

impl Application {
    pub async fn run(
        runtime_config: impl Into<RuntimeConfig>,
    ) -> Result<StampSummary, ApplicationError> {
        let config: RuntimeConfig = runtime_config.into();
        debug!("Resolved runtime config: {:?}", config);

        let stamper = Stamper::new(Header::new(&config.license), &config.extension, config.mode);
        let reporter = Reporter::new();

        let summary = stamper
            .run(&config.root, |path, outcome| reporter.file(path, outcome))
            .await
            .context(StampingSnafu)?;
        reporter.summary(&summary);

        ensure!(
            summary.missing == 0,
            MissingHeadersSnafu {
                count: summary.missing
            }
        );

        Ok(summary)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while stamping headers"))]
    StampingError { source: StampError },
    #[snafu(display("{} file(s) are missing an SPDX identifier", count))]
    MissingHeadersError { count: usize },
}
