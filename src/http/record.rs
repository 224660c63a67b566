//! Capture record construction and serialization.
//!
//! # Responsibilities
//! - Snapshot one received request: method, headers, body, receiving port
//! - Preserve multi-valued headers in arrival order
//! - Serialize to the fixed four-field JSON shape
//!
//! # Design Decisions
//! - Body is decoded as UTF-8 with lossy replacement; binary bodies are
//!   captured but not byte-faithful
//! - Header names are the lowercase wire form; values keep their order
//! - Records are built once, written once, and dropped

use std::collections::BTreeMap;

use axum::http::{HeaderMap, Method};
use serde::Serialize;

/// One received HTTP request, persisted as a single log line.
///
/// Serializes to exactly `{"body": ..., "headers": ..., "method": ...,
/// "port": ...}` with the port as a string.
#[derive(Debug, Clone, Serialize)]
pub struct CaptureRecord {
    pub body: String,
    pub headers: BTreeMap<String, Vec<String>>,
    pub method: String,
    pub port: String,
}

impl CaptureRecord {
    /// Build a record for a request received on `port`.
    pub fn new(port: u16, method: &Method, headers: &HeaderMap, body: &[u8]) -> Self {
        let mut header_map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in headers.iter() {
            header_map
                .entry(name.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }

        Self {
            body: String::from_utf8_lossy(body).into_owned(),
            headers: header_map,
            method: method.as_str().to_string(),
            port: port.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_serializes_to_four_fields() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/plain"));

        let record = CaptureRecord::new(8000, &Method::POST, &headers, b"hello");
        let value: serde_json::Value = serde_json::to_value(&record).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(value["body"], "hello");
        assert_eq!(value["method"], "POST");
        assert_eq!(value["port"], "8000");
        assert_eq!(value["headers"]["content-type"], serde_json::json!(["text/plain"]));
    }

    #[test]
    fn test_multi_valued_headers_keep_order() {
        let mut headers = HeaderMap::new();
        headers.append("x-trace", HeaderValue::from_static("first"));
        headers.append("x-trace", HeaderValue::from_static("second"));

        let record = CaptureRecord::new(8000, &Method::GET, &headers, b"");
        assert_eq!(
            record.headers["x-trace"],
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_binary_body_is_lossy_text() {
        let headers = HeaderMap::new();
        let record = CaptureRecord::new(8000, &Method::PUT, &headers, &[0xff, 0xfe, b'a']);
        // Invalid UTF-8 becomes replacement characters, not an error.
        assert!(record.body.ends_with('a'));
        assert_eq!(record.body.chars().count(), 3);
    }
}
