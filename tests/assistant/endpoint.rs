use std::time::Duration;

use counsel::{
    assistant::{
        adapters::{GenerativeLanguageEndpoint, generative_language::SUGGESTED_FOLLOW_UPS},
        endpoint::{CredentialRef, LanguageModelEndpoint},
        error::EndpointErrorKind,
    },
    config::EndpointConfig,
};
use uuid::Uuid;

fn config_without_credential() -> EndpointConfig {
    EndpointConfig {
        credential: CredentialRef::None,
        ..EndpointConfig::default()
    }
}

#[test]
fn given_missing_credential_env_var_when_built_then_authentication_error() {
    let config = EndpointConfig {
        credential: CredentialRef::Env {
            var: format!("COUNSEL_TEST_KEY_{}", Uuid::now_v7().simple()),
        },
        ..EndpointConfig::default()
    };

    let err = match GenerativeLanguageEndpoint::from_config(&config) {
        Ok(_) => panic!("missing env credential should fail"),
        Err(err) => err,
    };
    assert_eq!(err.kind, EndpointErrorKind::Authentication);
}

#[test]
fn given_no_credential_then_adapter_builds_unauthenticated() {
    assert!(GenerativeLanguageEndpoint::from_config(&config_without_credential()).is_ok());
}

#[tokio::test]
async fn given_unreachable_endpoint_then_transient_error_is_returned() {
    // Port 9 (discard) is reliably closed on loopback.
    let config = EndpointConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        request_timeout_ms: 2_000,
        ..config_without_credential()
    };
    let adapter = GenerativeLanguageEndpoint::from_config(&config).expect("adapter builds");

    let err = match adapter.send("hello", None).await {
        Ok(_) => panic!("unreachable endpoint should fail"),
        Err(err) => err,
    };
    assert!(
        matches!(
            err.kind,
            EndpointErrorKind::BackendTransient | EndpointErrorKind::Timeout
        ),
        "unexpected kind {:?}",
        err.kind
    );
    assert!(err.retryable);
}

#[tokio::test]
async fn given_stub_server_then_reply_carries_text_and_fixed_options() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener binds");
    let addr = listener.local_addr().expect("local addr");

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("connection accepted");
        let mut request = Vec::new();
        let mut buffer = [0u8; 1024];
        loop {
            let read = socket.read(&mut buffer).await.expect("request read");
            request.extend_from_slice(&buffer[..read]);
            if read == 0 || request.windows(4).any(|window| window == b"\r\n\r\n") {
                break;
            }
        }

        let body = serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "An NDA protects confidential information."}]}
            }]
        })
        .to_string();
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("response written");
        socket.shutdown().await.expect("socket shutdown");
    });

    let config = EndpointConfig {
        base_url: format!("http://{}", addr),
        request_timeout_ms: 2_000,
        ..config_without_credential()
    };
    let adapter = GenerativeLanguageEndpoint::from_config(&config).expect("adapter builds");

    let reply = tokio::time::timeout(Duration::from_secs(5), adapter.send("What is an NDA?", None))
        .await
        .expect("send completes")
        .expect("send succeeds");

    assert_eq!(reply.message, "An NDA protects confidential information.");
    assert_eq!(
        reply.suggested_replies,
        SUGGESTED_FOLLOW_UPS
            .iter()
            .map(|option| option.to_string())
            .collect::<Vec<_>>()
    );

    server.await.expect("server task joins");
}

#[tokio::test]
async fn given_authentication_rejection_then_kind_is_authentication() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener binds");
    let addr = listener.local_addr().expect("local addr");

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("connection accepted");
        let mut buffer = [0u8; 2048];
        let _ = socket.read(&mut buffer).await;
        let body = r#"{"error": {"message": "API key not valid"}}"#;
        let response = format!(
            "HTTP/1.1 401 Unauthorized\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    let config = EndpointConfig {
        base_url: format!("http://{}", addr),
        request_timeout_ms: 2_000,
        ..config_without_credential()
    };
    let adapter = GenerativeLanguageEndpoint::from_config(&config).expect("adapter builds");

    let err = match adapter.send("hello", None).await {
        Ok(_) => panic!("401 should fail"),
        Err(err) => err,
    };
    assert_eq!(err.kind, EndpointErrorKind::Authentication);
    assert_eq!(err.provider_http_status, Some(401));
    assert!(err.message.contains("API key not valid"));

    server.await.expect("server task joins");
}
