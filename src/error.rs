//! Error types for the capture tool.
//!
//! # Propagation policy
//! - `Configuration` and `Bind` abort startup; no listener ever serves.
//! - `BodyRead`, `PayloadTooLarge` and `Write` are request-local: the one
//!   client gets an error response, everything else keeps running.

use thiserror::Error;

/// Top-level error type for the capture tool.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// Bad, missing or unparsable configuration, or an empty port range.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A listener port could not be bound (in use, insufficient permission).
    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// The request body stream failed mid-read.
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    /// The request body exceeded the configured bound.
    #[error("request body exceeds limit of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// Appending a record to the log file failed.
    #[error("failed to append capture record: {0}")]
    Write(String),
}
