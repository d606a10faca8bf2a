//! CLI runner - executes one fetch and maps the result to stdout + exit code

use crate::cli::commands::Cli;
use crate::config::{FetchConfig, InputOutcome};
use crate::engine::FetchEngine;
use crate::error::Result;
use crate::output::Envelope;
use tokio::io::AsyncReadExt;
use tracing::{debug, error, info};

/// Exit status for success, including the benign empty cases
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for any fatal error
pub const EXIT_FAILURE: u8 = 1;

/// What the process should print and return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The stdout object
    pub envelope: Envelope,
    /// Process exit status
    pub exit_code: u8,
}

impl RunReport {
    fn success(envelope: Envelope) -> Self {
        Self {
            envelope,
            exit_code: EXIT_SUCCESS,
        }
    }

    fn failure(envelope: Envelope) -> Self {
        Self {
            envelope,
            exit_code: EXIT_FAILURE,
        }
    }
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Read the input and run
    pub async fn run(&self) -> RunReport {
        match self.read_input().await {
            Ok(raw) => self.run_with_input(&raw).await,
            Err(e) => {
                error!(kind = e.kind(), "{e}");
                RunReport::failure(Envelope::failure(&e))
            }
        }
    }

    /// Run against already-read input
    pub async fn run_with_input(&self, raw: &str) -> RunReport {
        match self.execute(raw).await {
            Ok(envelope) => RunReport::success(envelope),
            Err(e) => {
                error!(kind = e.kind(), "{e}");
                RunReport::failure(Envelope::failure(&e))
            }
        }
    }

    /// Read the query object from `--input` or stdin
    async fn read_input(&self) -> Result<String> {
        let raw = match &self.cli.input {
            Some(path) => tokio::fs::read_to_string(path).await?,
            None => {
                let mut buf = String::new();
                tokio::io::stdin().read_to_string(&mut buf).await?;
                buf
            }
        };
        debug!("Read {} bytes of input", raw.len());
        Ok(raw)
    }

    async fn execute(&self, raw: &str) -> Result<Envelope> {
        let engine_config = self.cli.engine_config()?;

        let config = match FetchConfig::from_input(raw)? {
            InputOutcome::Empty => {
                error!("No input received from stdin.");
                return Ok(Envelope::empty());
            }
            InputOutcome::Config(config) => config,
        };

        let Some(request) = config.validate()? else {
            return Ok(Envelope::empty());
        };

        let engine = FetchEngine::for_request(&request, engine_config)?;
        let outcome = engine.run(&request).await?;
        let envelope = Envelope::success(&outcome.items)?;

        info!(
            "Finished pagination. Total items fetched: {} in {} pages",
            outcome.items.len(),
            outcome.pages_fetched
        );
        Ok(envelope)
    }
}
