//! HTTP capture subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection on port p
//!     → server.rs (one axum server per port, catch-all route)
//!     → record.rs (method + headers + body → CaptureRecord)
//!     → storage::LogWriter (one JSON line appended)
//!     → 200 "Received request on port p" to the client
//! ```

pub mod record;
pub mod server;

pub use record::CaptureRecord;
pub use server::CaptureListenerSet;
