//! Log persistence subsystem.
//!
//! # Data Flow
//! ```text
//! CaptureRecord (one per request, from any listener)
//!     → LogWriter::append (mpsc send + oneshot ack)
//!     → writer task (sole owner of the file handle)
//!     → logs/log-YYYYMMDD.json (one JSON object per line)
//! ```
//!
//! # Design Decisions
//! - A single dedicated writer task owns the open file; mutual exclusion is
//!   structural, not dependent on OS append atomicity
//! - The target filename is fixed at open time; a run that crosses midnight
//!   keeps writing to the original day's file

pub mod writer;

pub use writer::LogWriter;
