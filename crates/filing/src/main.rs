//! `filing-snapshot`: prints revenue, net income and basic EPS from the
//! quarterly filing dated in the configured month.

use std::io;
use std::process::ExitCode;
use std::time::Instant;

use filing::{SnapshotConfig, SnapshotPipeline, report};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let started = Instant::now();
    let mut stdout = io::stdout();

    let pipeline = match SnapshotPipeline::new(SnapshotConfig::default()) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            report::report_failure(&mut stdout, &e);
            return ExitCode::FAILURE;
        }
    };

    match report::run_and_report(&pipeline, &mut stdout, started).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
