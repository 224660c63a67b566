//! Shared utilities for integration testing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use request_capture::{CaptureListenerSet, LogWriter, Shutdown};

/// Start a full capture stack on the given ports, logging into `dir`.
///
/// Returns the log file path and the shutdown handle the test triggers when
/// it is done.
#[allow(dead_code)]
pub async fn start_capture(
    ports: &[u16],
    dir: &Path,
    max_body_bytes: usize,
) -> (PathBuf, Shutdown) {
    let writer = LogWriter::open(dir).await.unwrap();
    let log_path = writer.path().to_path_buf();

    let set = CaptureListenerSet::bind(ports, writer, max_body_bytes)
        .await
        .unwrap();

    let shutdown = Shutdown::new();
    let stop = shutdown.clone();
    tokio::spawn(async move {
        set.run(&stop).await;
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    (log_path, shutdown)
}

/// Parse every record line in the log file (skips the startup blank line).
#[allow(dead_code)]
pub fn read_records(path: &Path) -> Vec<serde_json::Value> {
    let content = std::fs::read_to_string(path).unwrap();
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str(line).expect("log line is not valid JSON"))
        .collect()
}
