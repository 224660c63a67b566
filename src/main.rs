//! request-capture binary.
//!
//! Opens a contiguous range of HTTP listening ports and records every
//! request arriving on any of them as one JSON line in the current day's
//! log file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use request_capture::config::{loader, ports};
use request_capture::lifecycle::signals;
use request_capture::{CaptureError, CaptureListenerSet, LogWriter, Shutdown};

/// Capture every HTTP request on a range of ports into a daily JSONL log.
#[derive(Debug, Parser)]
#[command(name = "request-capture", version)]
struct Args {
    /// Path to the JSON config file; created with defaults when missing.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Directory the daily log files are written to.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Maximum accepted request body size in bytes.
    #[arg(long, default_value_t = 2 * 1024 * 1024)]
    max_body_bytes: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "request_capture=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CaptureError> {
    tracing::info!("request-capture v0.1.0 starting");

    let config = loader::load_or_create(&args.config)?;
    let ports = ports::resolve(&config)?;

    tracing::info!(
        port_start = config.port_start,
        port_end = config.port_end,
        listeners = ports.len(),
        max_body_bytes = args.max_body_bytes,
        "Configuration loaded"
    );

    // The log directory and day file exist before any listener accepts.
    let writer = LogWriter::open(&args.log_dir).await?;

    // All ports bind up front; one failure means no listener serves.
    let listener_set = CaptureListenerSet::bind(&ports, writer, args.max_body_bytes).await?;
    tracing::info!(ports = ?listener_set.ports(), "All listeners bound");

    let shutdown = Shutdown::new();
    signals::trigger_on_ctrl_c(shutdown.clone());

    listener_set.run(&shutdown).await;

    tracing::info!("Shutdown complete");
    Ok(())
}
