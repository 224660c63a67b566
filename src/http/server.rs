//! Capture listener set.
//!
//! # Responsibilities
//! - Bind one TCP listener per resolved port
//! - Serve a catch-all handler that records every request
//! - Bound request body size before buffering
//! - Keep per-request failures per-request: a failed body read or append
//!   answers that one client and nothing else
//!
//! # Design Decisions
//! - Supervisory policy is abort-all: every port is bound before any server
//!   starts serving, so one unbindable port means zero listeners ever
//!   accept traffic
//! - Listeners have a single operating state; the only transition out is
//!   the shared shutdown signal

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tower_http::trace::TraceLayer;

use crate::error::CaptureError;
use crate::http::record::CaptureRecord;
use crate::lifecycle::Shutdown;
use crate::storage::LogWriter;

/// State injected into every capture handler.
#[derive(Clone)]
struct CaptureState {
    port: u16,
    writer: LogWriter,
    max_body_bytes: usize,
}

/// The set of per-port HTTP listeners feeding one shared log writer.
#[derive(Debug)]
pub struct CaptureListenerSet {
    listeners: Vec<(u16, TcpListener)>,
    writer: LogWriter,
    max_body_bytes: usize,
}

impl CaptureListenerSet {
    /// Bind every port in the set.
    ///
    /// Any single bind failure aborts the whole set with
    /// [`CaptureError::Bind`]; already-bound listeners are dropped and never
    /// serve.
    pub async fn bind(
        ports: &[u16],
        writer: LogWriter,
        max_body_bytes: usize,
    ) -> Result<Self, CaptureError> {
        let mut listeners = Vec::with_capacity(ports.len());
        for &port in ports {
            let listener = TcpListener::bind(("0.0.0.0", port))
                .await
                .map_err(|e| CaptureError::Bind { port, source: e })?;
            tracing::info!(port, "Listener bound");
            listeners.push((port, listener));
        }

        Ok(Self {
            listeners,
            writer,
            max_body_bytes,
        })
    }

    /// Ports this set is bound to, in ascending order.
    pub fn ports(&self) -> Vec<u16> {
        self.listeners.iter().map(|(port, _)| *port).collect()
    }

    /// Serve all listeners until the shutdown signal fires.
    ///
    /// Runs one axum server per bound port. A server that fails after its
    /// successful bind is logged and the rest keep serving.
    pub async fn run(self, shutdown: &Shutdown) {
        let mut servers = JoinSet::new();

        for (port, listener) in self.listeners {
            let state = CaptureState {
                port,
                writer: self.writer.clone(),
                max_body_bytes: self.max_body_bytes,
            };
            let app = Router::new()
                .route("/", any(capture_handler))
                .route("/{*path}", any(capture_handler))
                .with_state(state)
                .layer(TraceLayer::new_for_http());

            let mut stop = shutdown.subscribe();
            servers.spawn(async move {
                tracing::info!(port, "Listening for requests");
                let result = axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = stop.recv().await;
                    })
                    .await;
                if let Err(e) = result {
                    tracing::error!(port, error = %e, "Listener exited with error");
                }
            });
        }

        while servers.join_next().await.is_some() {}
        tracing::info!("All listeners stopped");
    }
}

/// Catch-all handler: every method, every path.
///
/// Reads the whole body (bounded), appends one capture record, then
/// acknowledges. The record is durably written before the 200 goes out.
async fn capture_handler(
    State(state): State<CaptureState>,
    request: Request<Body>,
) -> Response {
    let (parts, body) = request.into_parts();

    let bytes = match Limited::new(body, state.max_body_bytes).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            let err = CaptureError::PayloadTooLarge {
                limit: state.max_body_bytes,
            };
            tracing::warn!(port = state.port, method = %parts.method, "Request body over limit");
            return (StatusCode::PAYLOAD_TOO_LARGE, err.to_string()).into_response();
        }
        Err(e) => {
            let err = CaptureError::BodyRead(e.to_string());
            tracing::warn!(port = state.port, error = %err, "Body read failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
    };

    tracing::debug!(
        port = state.port,
        method = %parts.method,
        path = %parts.uri.path(),
        body_bytes = bytes.len(),
        "Captured request"
    );

    let record = CaptureRecord::new(state.port, &parts.method, &parts.headers, &bytes);
    if let Err(e) = state.writer.append(record).await {
        tracing::error!(port = state.port, error = %e, "Failed to record request");
        return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
    }

    (
        StatusCode::OK,
        format!("Received request on port {}", state.port),
    )
        .into_response()
}
