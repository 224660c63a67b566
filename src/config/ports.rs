//! Port range resolution.
//!
//! # Responsibilities
//! - Expand the configured inclusive range into concrete listener ports
//! - Reject empty ranges before any listener is started
//!
//! # Design Decisions
//! - `portStart > portEnd` is a configuration error, not an empty success
//! - Out-of-range values never get here: the schema's u16 fields make serde
//!   reject them at parse time

use crate::config::schema::CaptureConfig;
use crate::error::CaptureError;

/// Resolve the configured range into an ordered list of listener ports.
///
/// The result is strictly increasing with exactly
/// `port_end - port_start + 1` elements.
pub fn resolve(config: &CaptureConfig) -> Result<Vec<u16>, CaptureError> {
    if config.port_start > config.port_end {
        return Err(CaptureError::Configuration(format!(
            "empty port range: portStart {} > portEnd {}",
            config.port_start, config.port_end
        )));
    }

    Ok((config.port_start..=config.port_end).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_inclusive_range() {
        let config = CaptureConfig {
            port_start: 8000,
            port_end: 8004,
        };
        let ports = resolve(&config).unwrap();
        assert_eq!(ports, vec![8000, 8001, 8002, 8003, 8004]);
    }

    #[test]
    fn test_resolve_length_and_order() {
        let config = CaptureConfig {
            port_start: 9000,
            port_end: 9050,
        };
        let ports = resolve(&config).unwrap();
        assert_eq!(ports.len(), 51);
        assert!(ports.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_single_port_range() {
        let config = CaptureConfig {
            port_start: 8080,
            port_end: 8080,
        };
        assert_eq!(resolve(&config).unwrap(), vec![8080]);
    }

    #[test]
    fn test_inverted_range_is_error() {
        let config = CaptureConfig {
            port_start: 8001,
            port_end: 8000,
        };
        let err = resolve(&config).unwrap_err();
        assert!(matches!(err, CaptureError::Configuration(_)));
    }
}
