//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration for the capture tool.
///
/// The on-disk form uses camelCase keys (`portStart`, `portEnd`) and the
/// range is inclusive on both ends.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureConfig {
    /// First port in the listening range.
    pub port_start: u16,

    /// Last port in the listening range (inclusive).
    pub port_end: u16,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            port_start: 8000,
            port_end: 8001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_keys() {
        let config: CaptureConfig =
            serde_json::from_str(r#"{"portStart": 9000, "portEnd": 9005}"#).unwrap();
        assert_eq!(config.port_start, 9000);
        assert_eq!(config.port_end, 9005);

        let json = serde_json::to_string(&CaptureConfig::default()).unwrap();
        assert_eq!(json, r#"{"portStart":8000,"portEnd":8001}"#);
    }
}
