use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    assistant::{
        endpoint::{EndpointReply, LanguageModelEndpoint, resolve_credential},
        error::{
            EndpointError, EndpointErrorKind, internal_error, map_http_status,
            protocol_violation, request_timeout,
        },
    },
    config::EndpointConfig,
};

/// Follow-up options attached to every successful reply. The provider does
/// not return options of its own; this fixed set is the client's.
pub const SUGGESTED_FOLLOW_UPS: [&str; 4] = [
    "Tell me more",
    "What are my legal rights?",
    "Connect with a lawyer",
    "Get document templates",
];

/// HTTP adapter for the external generative-language API
/// (`models/{model}:generateContent`).
pub struct GenerativeLanguageEndpoint {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    max_output_tokens: u32,
    temperature: f64,
    request_timeout: Duration,
}

impl GenerativeLanguageEndpoint {
    pub fn from_config(config: &EndpointConfig) -> Result<Self, EndpointError> {
        let api_key = resolve_credential(&config.credential)?;
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| internal_error(format!("failed to build http client: {}", err)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
            request_timeout: Duration::from_millis(config.request_timeout_ms.max(1)),
        })
    }
}

#[async_trait]
impl LanguageModelEndpoint for GenerativeLanguageEndpoint {
    async fn send(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> Result<EndpointReply, EndpointError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = build_generate_body(message, context, self.max_output_tokens, self.temperature);

        let mut request = self
            .client
            .post(url)
            .timeout(self.request_timeout)
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-request-id", Uuid::now_v7().to_string())
            .json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.header("x-goog-api-key", api_key);
        }

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                request_timeout(format!("generative-language request timed out: {}", err))
            } else {
                EndpointError::new(
                    EndpointErrorKind::BackendTransient,
                    format!("generative-language request failed: {}", err),
                )
                .with_retryable(true)
            }
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_status(status, &body));
        }

        let payload = response.json::<Value>().await.map_err(|err| {
            protocol_violation(format!("generative-language body decode failed: {}", err))
        })?;
        let message = parse_generate_payload(&payload)?;

        Ok(EndpointReply {
            message,
            suggested_replies: SUGGESTED_FOLLOW_UPS
                .iter()
                .map(|reply| reply.to_string())
                .collect(),
        })
    }
}

fn build_generate_body(
    message: &str,
    context: Option<&str>,
    max_output_tokens: u32,
    temperature: f64,
) -> Value {
    let mut contents = Vec::new();
    if let Some(context) = context {
        contents.push(json!({
            "role": "user",
            "parts": [{"text": context}],
        }));
    }
    contents.push(json!({
        "role": "user",
        "parts": [{"text": message}],
    }));

    json!({
        "contents": contents,
        "generationConfig": {
            "maxOutputTokens": max_output_tokens,
            "temperature": temperature,
        },
    })
}

fn parse_generate_payload(payload: &Value) -> Result<String, EndpointError> {
    let candidate = payload
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .ok_or_else(|| protocol_violation("generative-language response missing candidates"))?;

    let parts = candidate
        .get("content")
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .ok_or_else(|| protocol_violation("generative-language candidate missing content parts"))?;

    let text = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        return Err(protocol_violation(
            "generative-language candidate produced no text",
        ));
    }

    Ok(text)
}
