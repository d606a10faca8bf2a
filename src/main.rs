//! fetch-paginated-data
//!
//! Terraform external data source: reads the query object on stdin, prints
//! `{"combined_list": "..."}` or `{"error": "..."}` on stdout.

use clap::Parser;
use paginated_fetch::cli::{Cli, Runner, EXIT_FAILURE};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout is reserved for the result line
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let report = Runner::new(cli).run().await;

    match report.envelope.to_line() {
        Ok(line) => {
            println!("{line}");
            ExitCode::from(report.exit_code)
        }
        Err(e) => {
            println!("{}", serde_json::json!({ "error": e.to_string() }));
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
