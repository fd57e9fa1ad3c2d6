use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointErrorKind {
    InvalidRequest,
    Authentication,
    Authorization,
    RateLimited,
    Timeout,
    Cancelled,
    BackendTransient,
    ProtocolViolation,
    Internal,
}

impl EndpointErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointErrorKind::InvalidRequest => "invalid_request",
            EndpointErrorKind::Authentication => "authentication",
            EndpointErrorKind::Authorization => "authorization",
            EndpointErrorKind::RateLimited => "rate_limited",
            EndpointErrorKind::Timeout => "timeout",
            EndpointErrorKind::Cancelled => "cancelled",
            EndpointErrorKind::BackendTransient => "backend_transient",
            EndpointErrorKind::ProtocolViolation => "protocol_violation",
            EndpointErrorKind::Internal => "internal",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EndpointError {
    pub kind: EndpointErrorKind,
    pub message: String,
    pub retryable: bool,
    pub provider_http_status: Option<u16>,
}

impl EndpointError {
    pub fn new(kind: EndpointErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable: matches!(
                kind,
                EndpointErrorKind::RateLimited
                    | EndpointErrorKind::Timeout
                    | EndpointErrorKind::BackendTransient
            ),
            provider_http_status: None,
        }
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    pub fn with_provider_http_status(mut self, status: u16) -> Self {
        self.provider_http_status = Some(status);
        self
    }
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.provider_http_status {
            Some(status) => write!(f, "{} (http_status={})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for EndpointError {}

pub fn invalid_request(message: impl Into<String>) -> EndpointError {
    EndpointError::new(EndpointErrorKind::InvalidRequest, message).with_retryable(false)
}

pub fn authentication_error(message: impl Into<String>) -> EndpointError {
    EndpointError::new(EndpointErrorKind::Authentication, message).with_retryable(false)
}

pub fn protocol_violation(message: impl Into<String>) -> EndpointError {
    EndpointError::new(EndpointErrorKind::ProtocolViolation, message).with_retryable(false)
}

pub fn internal_error(message: impl Into<String>) -> EndpointError {
    EndpointError::new(EndpointErrorKind::Internal, message).with_retryable(false)
}

pub fn request_timeout(message: impl Into<String>) -> EndpointError {
    EndpointError::new(EndpointErrorKind::Timeout, message)
}

pub fn request_cancelled(message: impl Into<String>) -> EndpointError {
    EndpointError::new(EndpointErrorKind::Cancelled, message).with_retryable(false)
}

/// Maps a non-success HTTP status from the provider to an error kind. A short
/// excerpt of the response body is folded into the message for diagnostics.
pub fn map_http_status(status: u16, body: &str) -> EndpointError {
    let excerpt = body.chars().take(240).collect::<String>();

    let mut err = if status == 401 {
        EndpointError::new(EndpointErrorKind::Authentication, "authentication failed")
            .with_retryable(false)
    } else if status == 403 {
        EndpointError::new(EndpointErrorKind::Authorization, "authorization failed")
            .with_retryable(false)
    } else if status == 408 || status == 429 {
        EndpointError::new(
            EndpointErrorKind::RateLimited,
            format!("endpoint returned status {}", status),
        )
        .with_retryable(true)
    } else if (400..500).contains(&status) {
        EndpointError::new(
            EndpointErrorKind::InvalidRequest,
            format!("endpoint returned status {}", status),
        )
        .with_retryable(false)
    } else {
        EndpointError::new(
            EndpointErrorKind::BackendTransient,
            format!("endpoint returned status {}", status),
        )
        .with_retryable(true)
    };

    err = err.with_provider_http_status(status);
    if !excerpt.is_empty() {
        err.message = format!("{}: {}", err.message, excerpt);
    }

    err
}
