use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tokio::{sync::Mutex, time::timeout};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::{
    assistant::{
        endpoint::LanguageModelEndpoint,
        error::{EndpointError, EndpointErrorKind, request_cancelled, request_timeout},
        telemetry::{SessionTelemetryEvent, TelemetrySink},
        types::{ConversationEntry, ConversationLog, Speaker, SubmitOutcome},
    },
    config::SessionConfig,
};

#[derive(Debug, Clone)]
pub struct SessionLimits {
    pub request_timeout: Duration,
    pub max_log_entries: usize,
    /// Number of most-recent log entries flattened into the `context`
    /// argument of each endpoint call. 0 disables context threading.
    pub context_window: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            max_log_entries: 256,
            context_window: 0,
        }
    }
}

impl From<&SessionConfig> for SessionLimits {
    fn from(config: &SessionConfig) -> Self {
        Self {
            request_timeout: Duration::from_millis(config.request_timeout_ms.max(1)),
            max_log_entries: config.max_log_entries,
            context_window: config.context_window,
        }
    }
}

/// One chat session's turn-taking with the external endpoint.
///
/// State machine: Idle -> (submit) -> AwaitingResponse -> (endpoint resolves,
/// rejects, times out, or is cancelled) -> Idle. At most one request is in
/// flight at a time; a submit while AwaitingResponse is rejected without
/// touching the log, so responses append in request order by construction.
pub struct ChatSession {
    endpoint: Arc<dyn LanguageModelEndpoint>,
    telemetry: Arc<dyn TelemetrySink>,
    limits: SessionLimits,
    busy: Arc<AtomicBool>,
    in_flight: Mutex<Option<CancellationToken>>,
    log: Mutex<ConversationLog>,
}

impl ChatSession {
    pub fn new(
        endpoint: Arc<dyn LanguageModelEndpoint>,
        telemetry: Arc<dyn TelemetrySink>,
        limits: SessionLimits,
    ) -> Self {
        Self {
            endpoint,
            telemetry,
            busy: Arc::new(AtomicBool::new(false)),
            in_flight: Mutex::new(None),
            log: Mutex::new(ConversationLog::seeded(limits.max_log_entries)),
            limits,
        }
    }

    /// Submits one user turn. Appends the user entry immediately, then
    /// exactly one assistant entry: the endpoint's reply on success, the
    /// fixed fallback on any failure. Never returns a raw endpoint error.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Ignored;
        }

        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return SubmitOutcome::Busy;
        }
        // Cleared on every exit path, including when this future is dropped
        // mid-flight.
        let _busy = BusyGuard {
            busy: Arc::clone(&self.busy),
        };

        let request_id = Uuid::now_v7().to_string();
        let context = {
            let mut log = self.log.lock().await;
            let context = build_context(&log, self.limits.context_window);
            log.push(ConversationEntry::user(trimmed));
            context
        };

        let cancel = CancellationToken::new();
        *self.in_flight.lock().await = Some(cancel.clone());
        self.telemetry.on_event(SessionTelemetryEvent::RequestStarted {
            request_id: request_id.clone(),
        });

        let result = tokio::select! {
            _ = cancel.cancelled() => Err(request_cancelled("request cancelled by caller")),
            sent = timeout(
                self.limits.request_timeout,
                self.endpoint.send(trimmed, context.as_deref()),
            ) => match sent {
                Ok(result) => result,
                Err(_) => Err(request_timeout(format!(
                    "endpoint did not answer within {:?}",
                    self.limits.request_timeout
                ))),
            },
        };

        *self.in_flight.lock().await = None;

        match result {
            Ok(reply) => {
                let entry = ConversationEntry::assistant(reply.message, reply.suggested_replies);
                self.log.lock().await.push(entry.clone());
                self.telemetry
                    .on_event(SessionTelemetryEvent::RequestCompleted { request_id });
                SubmitOutcome::Completed { reply: entry }
            }
            Err(err) => {
                self.log.lock().await.push(ConversationEntry::fallback());
                self.report_failure(&request_id, &err);
                SubmitOutcome::Failed { kind: err.kind }
            }
        }
    }

    /// Selecting a suggested reply is submitting its label verbatim.
    pub async fn select_suggested_reply(&self, option: &str) -> SubmitOutcome {
        self.submit(option).await
    }

    /// Cancels the in-flight request, if any. The awaiting submit resolves
    /// as a failure of kind `Cancelled`.
    pub async fn cancel(&self) {
        if let Some(token) = self.in_flight.lock().await.as_ref() {
            token.cancel();
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Snapshot of the conversation log.
    pub async fn log(&self) -> ConversationLog {
        self.log.lock().await.clone()
    }

    /// Clears the log back to the single seeded greeting entry.
    pub async fn reset(&self) {
        self.log.lock().await.reset();
    }

    fn report_failure(&self, request_id: &str, err: &EndpointError) {
        tracing::warn!(
            target: "session",
            request_id = %request_id,
            kind = err.kind.as_str(),
            retryable = err.retryable,
            error = %err,
            "endpoint_call_failed"
        );
        let event = if err.kind == EndpointErrorKind::Cancelled {
            SessionTelemetryEvent::RequestCancelled {
                request_id: request_id.to_string(),
            }
        } else {
            SessionTelemetryEvent::RequestFailed {
                request_id: request_id.to_string(),
                kind: err.kind,
                retryable: err.retryable,
            }
        };
        self.telemetry.on_event(event);
    }
}

struct BusyGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}

fn build_context(log: &ConversationLog, window: usize) -> Option<String> {
    if window == 0 {
        return None;
    }

    let entries = log.entries();
    let start = entries.len().saturating_sub(window);
    let context = entries[start..]
        .iter()
        .map(|entry| match entry.speaker {
            Speaker::User => format!("User: {}", entry.text),
            Speaker::Assistant => format!("Assistant: {}", entry.text),
        })
        .collect::<Vec<_>>()
        .join("\n");

    if context.is_empty() { None } else { Some(context) }
}
