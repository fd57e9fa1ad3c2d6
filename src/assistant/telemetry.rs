use crate::assistant::error::EndpointErrorKind;

/// Side-channel record of each endpoint call. The user-facing surface only
/// ever shows the generic fallback entry; the error kind lives here.
#[derive(Debug, Clone)]
pub enum SessionTelemetryEvent {
    RequestStarted {
        request_id: String,
    },
    RequestCompleted {
        request_id: String,
    },
    RequestFailed {
        request_id: String,
        kind: EndpointErrorKind,
        retryable: bool,
    },
    RequestCancelled {
        request_id: String,
    },
}

pub trait TelemetrySink: Send + Sync {
    fn on_event(&self, event: SessionTelemetryEvent);
}

#[derive(Default)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn on_event(&self, _event: SessionTelemetryEvent) {}
}

/// Routes events into the tracing pipeline with the kind as a structured
/// field, so operators can distinguish failures the user never sees apart.
#[derive(Default)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn on_event(&self, event: SessionTelemetryEvent) {
        match event {
            SessionTelemetryEvent::RequestStarted { request_id } => {
                tracing::debug!(target: "session", request_id = %request_id, "request_started");
            }
            SessionTelemetryEvent::RequestCompleted { request_id } => {
                tracing::info!(target: "session", request_id = %request_id, "request_completed");
            }
            SessionTelemetryEvent::RequestFailed {
                request_id,
                kind,
                retryable,
            } => {
                tracing::warn!(
                    target: "session",
                    request_id = %request_id,
                    kind = kind.as_str(),
                    retryable,
                    "request_failed"
                );
            }
            SessionTelemetryEvent::RequestCancelled { request_id } => {
                tracing::info!(target: "session", request_id = %request_id, "request_cancelled");
            }
        }
    }
}
