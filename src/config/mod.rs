//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config.json (created with defaults on first run)
//!     → loader.rs (parse & deserialize)
//!     → CaptureConfig (validated, immutable)
//!     → ports.rs (expand portStart..=portEnd into listener ports)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - A missing file is not an error: it is written out with defaults so a
//!   second run reproduces the same listeners
//! - Range validation lives in ports.rs, not in serde

pub mod loader;
pub mod ports;
pub mod schema;

pub use schema::CaptureConfig;
