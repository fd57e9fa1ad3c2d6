use std::env;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::assistant::error::{EndpointError, authentication_error, invalid_request};

/// Structured response of the external generative-language endpoint: the
/// reply text plus the suggested next replies the client renders as buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointReply {
    pub message: String,
    pub suggested_replies: Vec<String>,
}

/// The call contract of the external language-model endpoint as this crate
/// consumes it. `context`, when present, carries prior conversation text the
/// endpoint should treat as an earlier user turn.
#[async_trait]
pub trait LanguageModelEndpoint: Send + Sync {
    async fn send(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> Result<EndpointReply, EndpointError>;
}

/// Where the endpoint API key comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CredentialRef {
    Env { var: String },
    Inline { token: String },
    None,
}

impl Default for CredentialRef {
    fn default() -> Self {
        CredentialRef::Env {
            var: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Resolves a credential reference to the API key to send, or `None` for an
/// unauthenticated endpoint.
pub fn resolve_credential(reference: &CredentialRef) -> Result<Option<String>, EndpointError> {
    match reference {
        CredentialRef::Env { var } => {
            let token = env::var(var).map_err(|_| {
                authentication_error(format!("missing credential environment variable {}", var))
            })?;
            Ok(Some(token))
        }
        CredentialRef::Inline { token } => {
            if token.trim().is_empty() {
                return Err(invalid_request("inline credential token cannot be empty"));
            }
            Ok(Some(token.clone()))
        }
        CredentialRef::None => Ok(None),
    }
}
