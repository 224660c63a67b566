//! Append-only log writer.
//!
//! # Responsibilities
//! - Create the log directory and open the day's file once, at startup
//! - Serialize each capture record to exactly one JSON line
//! - Guarantee concurrent appends never interleave bytes
//! - Report per-append failures back to the requesting handler

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, oneshot};

use crate::error::CaptureError;
use crate::http::record::CaptureRecord;

/// Capacity of the append queue feeding the writer task.
const APPEND_QUEUE_DEPTH: usize = 256;

/// One queued append plus the channel the result is reported on.
struct Append {
    record: CaptureRecord,
    ack: oneshot::Sender<io::Result<()>>,
}

/// Handle to the shared append-only log writer.
///
/// Cloneable; every listener holds one. All appends funnel through a single
/// writer task that owns the file handle, so two concurrent calls can never
/// produce interleaved bytes. Each call resolves once its record is written
/// and flushed (or has failed).
#[derive(Clone, Debug)]
pub struct LogWriter {
    tx: mpsc::Sender<Append>,
    path: PathBuf,
}

impl LogWriter {
    /// Create the log directory, open today's log file and start the writer
    /// task.
    ///
    /// The filename is `log-YYYYMMDD.json`, derived from the local date once
    /// here and never re-derived per write. Matching the original file
    /// format, one blank line is appended at startup before any records.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, CaptureError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .await
            .map_err(|e| CaptureError::Write(format!("failed to create {}: {}", dir.display(), e)))?;

        let date = chrono::Local::now().format("%Y%m%d");
        let path = dir.join(format!("log-{}.json", date));

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .await
            .map_err(|e| CaptureError::Write(format!("failed to open {}: {}", path.display(), e)))?;

        file.write_all(b"\n")
            .await
            .map_err(|e| CaptureError::Write(format!("failed to write {}: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), "Log writer started");

        let (tx, rx) = mpsc::channel(APPEND_QUEUE_DEPTH);
        tokio::spawn(writer_task(file, rx));

        Ok(Self { tx, path })
    }

    /// Append one record as a single JSON line plus trailing newline.
    ///
    /// Resolves after the record is durably written and flushed. Records
    /// from concurrent callers land whole, in the order the writer task
    /// receives them.
    pub async fn append(&self, record: CaptureRecord) -> Result<(), CaptureError> {
        let (ack, done) = oneshot::channel();
        self.tx
            .send(Append { record, ack })
            .await
            .map_err(|_| CaptureError::Write("log writer task is gone".to_string()))?;

        match done.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(CaptureError::Write(e.to_string())),
            Err(_) => Err(CaptureError::Write(
                "log writer dropped the append".to_string(),
            )),
        }
    }

    /// Path of the log file this writer appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Sole consumer of the append queue; exclusive owner of the file handle.
async fn writer_task(mut file: File, mut rx: mpsc::Receiver<Append>) {
    while let Some(Append { record, ack }) = rx.recv().await {
        let result = write_line(&mut file, &record).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "Failed to append capture record");
        }
        // Handler may have given up on the response; that's fine.
        let _ = ack.send(result);
    }
}

async fn write_line(file: &mut File, record: &CaptureRecord) -> io::Result<()> {
    let mut line = serde_json::to_vec(record)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    line.push(b'\n');
    file.write_all(&line).await?;
    file.flush().await
}
