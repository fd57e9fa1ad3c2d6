use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use tokio::sync::Notify;

use counsel::assistant::{
    endpoint::{EndpointReply, LanguageModelEndpoint},
    error::{EndpointError, EndpointErrorKind},
    session::{ChatSession, SessionLimits},
    telemetry::{NoopTelemetrySink, SessionTelemetryEvent, TelemetrySink},
    types::{FALLBACK_REPLIES, FALLBACK_TEXT, GREETING_TEXT, Speaker, SubmitOutcome},
};

struct ScriptedEndpoint {
    message: &'static str,
    options: &'static [&'static str],
}

#[async_trait]
impl LanguageModelEndpoint for ScriptedEndpoint {
    async fn send(
        &self,
        _message: &str,
        _context: Option<&str>,
    ) -> Result<EndpointReply, EndpointError> {
        Ok(EndpointReply {
            message: self.message.to_string(),
            suggested_replies: self.options.iter().map(|option| option.to_string()).collect(),
        })
    }
}

/// Fails the first call with a transient error, then answers normally.
struct FlakyEndpoint {
    calls: AtomicUsize,
}

#[async_trait]
impl LanguageModelEndpoint for FlakyEndpoint {
    async fn send(
        &self,
        _message: &str,
        _context: Option<&str>,
    ) -> Result<EndpointReply, EndpointError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(EndpointError::new(
                EndpointErrorKind::BackendTransient,
                "first attempt fails",
            ));
        }
        Ok(EndpointReply {
            message: "recovered".to_string(),
            suggested_replies: Vec::new(),
        })
    }
}

/// Signals `started` when the call begins and blocks until `release`.
struct GatedEndpoint {
    started: Notify,
    release: Notify,
}

impl GatedEndpoint {
    fn new() -> Self {
        Self {
            started: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl LanguageModelEndpoint for GatedEndpoint {
    async fn send(
        &self,
        _message: &str,
        _context: Option<&str>,
    ) -> Result<EndpointReply, EndpointError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(EndpointReply {
            message: "released".to_string(),
            suggested_replies: Vec::new(),
        })
    }
}

struct SleepyEndpoint {
    delay: Duration,
}

#[async_trait]
impl LanguageModelEndpoint for SleepyEndpoint {
    async fn send(
        &self,
        _message: &str,
        _context: Option<&str>,
    ) -> Result<EndpointReply, EndpointError> {
        tokio::time::sleep(self.delay).await;
        Ok(EndpointReply {
            message: "too late".to_string(),
            suggested_replies: Vec::new(),
        })
    }
}

#[derive(Default)]
struct CollectingSink {
    events: Mutex<Vec<SessionTelemetryEvent>>,
}

impl TelemetrySink for CollectingSink {
    fn on_event(&self, event: SessionTelemetryEvent) {
        self.events.lock().expect("sink lock").push(event);
    }
}

fn session_with(
    endpoint: Arc<dyn LanguageModelEndpoint>,
    limits: SessionLimits,
) -> ChatSession {
    ChatSession::new(endpoint, Arc::new(NoopTelemetrySink), limits)
}

#[tokio::test]
async fn given_nonempty_submit_then_one_user_and_one_assistant_entry_append() {
    let endpoint = Arc::new(ScriptedEndpoint {
        message: "An NDA is a confidentiality contract.",
        options: &["Tell me more", "Consult a lawyer"],
    });
    let session = session_with(endpoint, SessionLimits::default());
    let before = session.log().await.len();

    let outcome = session.submit("What is an NDA?").await;

    let log = session.log().await;
    assert_eq!(log.len(), before + 2);

    let user_entry = &log.entries()[before];
    assert_eq!(user_entry.speaker, Speaker::User);
    assert_eq!(user_entry.text, "What is an NDA?");
    assert!(user_entry.suggested_replies.is_empty());

    let assistant_entry = log.last().expect("assistant entry");
    assert_eq!(assistant_entry.speaker, Speaker::Assistant);
    assert_eq!(assistant_entry.text, "An NDA is a confidentiality contract.");
    assert_eq!(
        assistant_entry.suggested_replies,
        vec!["Tell me more".to_string(), "Consult a lawyer".to_string()]
    );

    match outcome {
        SubmitOutcome::Completed { reply } => assert_eq!(&reply, assistant_entry),
        other => panic!("expected Completed, got {other:?}"),
    }
}

#[tokio::test]
async fn whitespace_only_submit_is_a_noop() {
    let endpoint = Arc::new(ScriptedEndpoint {
        message: "unused",
        options: &[],
    });
    let session = session_with(endpoint, SessionLimits::default());
    let before = session.log().await.len();

    assert_eq!(session.submit("").await, SubmitOutcome::Ignored);
    assert_eq!(session.submit("   \t  ").await, SubmitOutcome::Ignored);
    assert_eq!(session.log().await.len(), before);
}

#[tokio::test]
async fn input_is_trimmed_before_logging_and_sending() {
    let endpoint = Arc::new(ScriptedEndpoint {
        message: "ok",
        options: &[],
    });
    let session = session_with(endpoint, SessionLimits::default());

    session.submit("  hello  ").await;

    let log = session.log().await;
    let user_entry = &log.entries()[log.len() - 2];
    assert_eq!(user_entry.text, "hello");
}

#[tokio::test]
async fn second_submit_while_awaiting_is_rejected_without_user_entry() {
    let gated = Arc::new(GatedEndpoint::new());
    let session = Arc::new(session_with(gated.clone(), SessionLimits::default()));

    let task = tokio::spawn({
        let session = Arc::clone(&session);
        async move { session.submit("first").await }
    });
    gated.started.notified().await;
    assert!(session.is_busy());

    let len_during = session.log().await.len();
    assert_eq!(session.submit("second").await, SubmitOutcome::Busy);
    assert_eq!(session.log().await.len(), len_during);

    gated.release.notify_one();
    let outcome = task.await.expect("task joins");
    assert!(matches!(outcome, SubmitOutcome::Completed { .. }));
    assert!(!session.is_busy());

    // Only the first submit produced entries: greeting + user + assistant.
    assert_eq!(session.log().await.len(), 3);
}

#[tokio::test]
async fn endpoint_failure_appends_fallback_and_session_stays_usable() {
    let endpoint = Arc::new(FlakyEndpoint {
        calls: AtomicUsize::new(0),
    });
    let session = session_with(endpoint, SessionLimits::default());

    let outcome = session.submit("hello").await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            kind: EndpointErrorKind::BackendTransient
        }
    );

    let log = session.log().await;
    let fallback = log.last().expect("fallback entry");
    assert_eq!(fallback.speaker, Speaker::Assistant);
    assert_eq!(fallback.text, FALLBACK_TEXT);
    assert_eq!(fallback.suggested_replies, FALLBACK_REPLIES.to_vec());

    // Retry is user-driven: the suggested reply re-invokes submit.
    let outcome = session.select_suggested_reply("Try again").await;
    assert!(matches!(outcome, SubmitOutcome::Completed { .. }));

    let log = session.log().await;
    assert_eq!(log.entries()[log.len() - 2].text, "Try again");
    assert_eq!(log.last().expect("reply").text, "recovered");
}

#[tokio::test]
async fn selecting_a_suggested_reply_equals_submitting_its_label() {
    let endpoint = Arc::new(ScriptedEndpoint {
        message: "Connecting you with an attorney.",
        options: &["Video Consultation", "Chat with Lawyer"],
    });
    let session = session_with(endpoint, SessionLimits::default());

    session.select_suggested_reply("Consult a lawyer").await;

    let log = session.log().await;
    let user_entry = &log.entries()[log.len() - 2];
    assert_eq!(user_entry.speaker, Speaker::User);
    assert_eq!(user_entry.text, "Consult a lawyer");
}

#[tokio::test]
async fn log_retention_is_capped_to_the_configured_maximum() {
    let endpoint = Arc::new(ScriptedEndpoint {
        message: "short answer",
        options: &[],
    });
    let session = session_with(
        endpoint,
        SessionLimits {
            max_log_entries: 4,
            ..SessionLimits::default()
        },
    );

    for turn in 0..5 {
        session.submit(&format!("question {turn}")).await;
    }

    let log = session.log().await;
    assert_eq!(log.len(), 4);
    // The greeting was evicted long ago; the tail is the latest two turns.
    assert_eq!(log.entries()[0].text, "question 3");
    assert_eq!(log.last().expect("entry").text, "short answer");
}

#[tokio::test]
async fn timeout_maps_to_fallback_with_timeout_kind_in_telemetry() {
    let sink = Arc::new(CollectingSink::default());
    let endpoint = Arc::new(SleepyEndpoint {
        delay: Duration::from_millis(250),
    });
    let session = ChatSession::new(
        endpoint,
        sink.clone(),
        SessionLimits {
            request_timeout: Duration::from_millis(25),
            ..SessionLimits::default()
        },
    );

    let outcome = session.submit("are you there?").await;
    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            kind: EndpointErrorKind::Timeout
        }
    );
    assert_eq!(
        session.log().await.last().expect("entry").text,
        FALLBACK_TEXT
    );

    let events = sink.events.lock().expect("sink lock");
    assert!(events.iter().any(|event| matches!(
        event,
        SessionTelemetryEvent::RequestFailed {
            kind: EndpointErrorKind::Timeout,
            ..
        }
    )));
}

#[tokio::test]
async fn cancel_resolves_the_inflight_call_as_cancelled() {
    let sink = Arc::new(CollectingSink::default());
    let gated = Arc::new(GatedEndpoint::new());
    let session = Arc::new(ChatSession::new(
        gated.clone(),
        sink.clone(),
        SessionLimits::default(),
    ));

    let task = tokio::spawn({
        let session = Arc::clone(&session);
        async move { session.submit("never answered").await }
    });
    gated.started.notified().await;

    session.cancel().await;
    let outcome = task.await.expect("task joins");
    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            kind: EndpointErrorKind::Cancelled
        }
    );
    assert!(!session.is_busy());
    assert_eq!(
        session.log().await.last().expect("entry").suggested_replies,
        FALLBACK_REPLIES.to_vec()
    );

    let events = sink.events.lock().expect("sink lock");
    assert!(events.iter().any(|event| matches!(
        event,
        SessionTelemetryEvent::RequestCancelled { .. }
    )));
}

#[tokio::test]
async fn dropping_an_inflight_submit_clears_the_busy_state() {
    let gated = Arc::new(GatedEndpoint::new());
    let session = session_with(gated.clone(), SessionLimits::default());

    {
        let mut pending = Box::pin(session.submit("abandoned"));
        let poll = tokio::time::timeout(Duration::from_millis(25), &mut pending).await;
        assert!(poll.is_err(), "submit should still be waiting");
        assert!(session.is_busy());
    }

    assert!(!session.is_busy());
    // A fresh submit is accepted after the abandoned one.
    gated.release.notify_one();
    let outcome = session.submit("next question").await;
    assert!(matches!(outcome, SubmitOutcome::Completed { .. }));
}

#[tokio::test]
async fn reset_returns_the_log_to_the_seeded_greeting() {
    let endpoint = Arc::new(ScriptedEndpoint {
        message: "answer",
        options: &[],
    });
    let session = session_with(endpoint, SessionLimits::default());

    session.submit("hello").await;
    assert!(session.log().await.len() > 1);

    session.reset().await;
    let log = session.log().await;
    assert_eq!(log.len(), 1);
    assert_eq!(log.last().expect("greeting").text, GREETING_TEXT);
}

#[tokio::test]
async fn context_window_threads_prior_turns_into_the_call() {
    struct ContextCapture {
        seen: Mutex<Option<Option<String>>>,
    }

    #[async_trait]
    impl LanguageModelEndpoint for ContextCapture {
        async fn send(
            &self,
            _message: &str,
            context: Option<&str>,
        ) -> Result<EndpointReply, EndpointError> {
            *self.seen.lock().expect("capture lock") =
                Some(context.map(|context| context.to_string()));
            Ok(EndpointReply {
                message: "ok".to_string(),
                suggested_replies: Vec::new(),
            })
        }
    }

    let capture = Arc::new(ContextCapture {
        seen: Mutex::new(None),
    });
    let session = session_with(
        capture.clone(),
        SessionLimits {
            context_window: 2,
            ..SessionLimits::default()
        },
    );

    session.submit("first question").await;
    session.submit("second question").await;

    let seen = capture
        .seen
        .lock()
        .expect("capture lock")
        .clone()
        .expect("endpoint called");
    let context = seen.expect("context threaded");
    assert!(context.contains("first question"));
    assert!(context.ends_with("Assistant: ok"));
}
