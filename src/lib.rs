//! Multi-port HTTP request capture tool.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                REQUEST CAPTURE                 │
//!                    │                                                │
//!   HTTP on :8000 ───┼─▶ ┌──────────┐                                │
//!   HTTP on :8001 ───┼─▶ │ capture  │      ┌──────────────┐          │
//!   HTTP on :800N ───┼─▶ │ listener │─────▶│  log writer  │──▶ logs/ │
//!                    │   │   set    │      │ (single task)│          │
//!                    │   └──────────┘      └──────────────┘          │
//!                    │                                                │
//!                    │   ┌─────────┐  ┌───────────┐  ┌────────────┐  │
//!                    │   │ config  │  │ lifecycle │  │  tracing   │  │
//!                    │   └─────────┘  └───────────┘  └────────────┘  │
//!                    └────────────────────────────────────────────────┘
//! ```
//!
//! One listener task per port in the configured range. Every request, any
//! method or path, is acknowledged with a 200 and recorded as one JSON line
//! in the current day's log file. All listeners feed a single writer task,
//! so concurrent records never interleave on disk.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod storage;

pub use config::schema::CaptureConfig;
pub use error::CaptureError;
pub use http::CaptureListenerSet;
pub use lifecycle::Shutdown;
pub use storage::LogWriter;
