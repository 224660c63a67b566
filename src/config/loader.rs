//! Configuration loading from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::schema::CaptureConfig;
use crate::error::CaptureError;

/// Load configuration from a JSON file, creating it with defaults if absent.
///
/// A missing file is first-run behavior: the defaults (ports 8000-8001) are
/// written out pretty-printed so the operator can edit them, and the same
/// defaults are returned. Any other IO or parse failure is a
/// [`CaptureError::Configuration`].
pub fn load_or_create(path: &Path) -> Result<CaptureConfig, CaptureError> {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).map_err(|e| {
            CaptureError::Configuration(format!("failed to parse {}: {}", path.display(), e))
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let config = CaptureConfig::default();
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CaptureError::Configuration(format!("failed to serialize defaults: {}", e))
            })?;
            fs::write(path, json).map_err(|e| {
                CaptureError::Configuration(format!(
                    "failed to create {}: {}",
                    path.display(),
                    e
                ))
            })?;
            tracing::info!(
                path = %path.display(),
                port_start = config.port_start,
                port_end = config.port_end,
                "Config file created with default values"
            );
            Ok(config)
        }
        Err(e) => Err(CaptureError::Configuration(format!(
            "failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}
