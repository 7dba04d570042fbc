//! Configuration-check and transport pass-through tests
//!
//! A scripted in-process transport records every request the client hands
//! it and returns a canned outcome, so these tests can observe the final
//! URL/headers/body and count network calls without a server.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use gemini_chat::prelude::*;

enum ScriptedOutcome {
    Success(serde_json::Value),
    HttpFailure(String),
}

/// Transport that records requests and replays a scripted outcome.
#[derive(Clone)]
struct ScriptedTransport {
    calls: Arc<Mutex<Vec<HttpTransportRequest>>>,
    outcome: Arc<ScriptedOutcome>,
}

impl ScriptedTransport {
    fn succeeding_with(body: serde_json::Value) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcome: Arc::new(ScriptedOutcome::Success(body)),
        }
    }

    fn failing_with(message: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            outcome: Arc::new(ScriptedOutcome::HttpFailure(message.to_string())),
        }
    }

    fn calls(&self) -> Vec<HttpTransportRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<serde_json::Value, LlmError> {
        self.calls.lock().unwrap().push(request);
        match &*self.outcome {
            ScriptedOutcome::Success(body) => Ok(body.clone()),
            ScriptedOutcome::HttpFailure(message) => Err(LlmError::HttpError(message.clone())),
        }
    }
}

fn reply_with(text: &str) -> serde_json::Value {
    json!({"candidates": [{"content": {"parts": [{"text": text}]}}]})
}

fn client_with(config: GeminiConfig, transport: &ScriptedTransport) -> GeminiClient {
    GeminiClient::with_transport(config, Arc::new(transport.clone()))
}

#[tokio::test]
async fn request_url_matches_configuration_exactly() {
    let transport = ScriptedTransport::succeeding_with(reply_with("hi"));
    let client = client_with(
        GeminiConfig::new("api-key-123")
            .with_base_url("https://x")
            .with_model("gemini-pro"),
        &transport,
    );

    client
        .query_chat_model(vec![ChatMessage::user("Hello")])
        .await
        .unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].url,
        "https://x/gemini-pro:generateContent?key=api-key-123"
    );
    assert_eq!(calls[0].method, reqwest::Method::POST);
    assert_eq!(
        calls[0].headers.get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn request_body_preserves_message_order() {
    let transport = ScriptedTransport::succeeding_with(reply_with("hi"));
    let client = client_with(GeminiConfig::new("k").with_base_url("https://x"), &transport);

    client
        .query_chat_model(vec![
            ChatMessage::user("m1"),
            ChatMessage::assistant("m2"),
            ChatMessage::user("m3"),
        ])
        .await
        .unwrap();

    assert_eq!(
        transport.calls()[0].body,
        json!({"contents": [{"parts": [{"text": "m1"}, {"text": "m2"}, {"text": "m3"}]}]})
    );
}

#[tokio::test]
async fn successful_response_yields_extracted_text() {
    let transport = ScriptedTransport::succeeding_with(reply_with("hi"));
    let client = client_with(GeminiConfig::new("k").with_base_url("https://x"), &transport);

    let reply = client
        .query_chat_model(vec![ChatMessage::user("Hello")])
        .await
        .unwrap();
    assert_eq!(reply, "hi");
}

#[tokio::test]
async fn transport_failure_passes_through_unchanged() {
    let transport = ScriptedTransport::failing_with("network down");
    let client = client_with(GeminiConfig::new("k").with_base_url("https://x"), &transport);

    let err = client
        .query_chat_model(vec![ChatMessage::user("Hello")])
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::HttpError(_)));
    assert_eq!(err.message(), "network down");
}

#[tokio::test]
async fn missing_api_key_short_circuits_without_network_call() {
    let transport = ScriptedTransport::succeeding_with(reply_with("hi"));
    let client = client_with(
        GeminiConfig::new("").with_base_url("https://x"),
        &transport,
    );

    let errors = client.check_configuration().await;

    assert_eq!(errors, vec!["API key is not set.".to_string()]);
    assert_eq!(transport.calls().len(), 0);
}

#[tokio::test]
async fn missing_key_and_url_report_both_in_order() {
    let transport = ScriptedTransport::succeeding_with(reply_with("hi"));
    let client = client_with(GeminiConfig::new("").with_base_url(""), &transport);

    let errors = client.check_configuration().await;

    assert_eq!(
        errors,
        vec![
            "API key is not set.".to_string(),
            "Gemini API url is not set.".to_string()
        ]
    );
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn live_check_failure_reports_raw_transport_message() {
    let transport = ScriptedTransport::failing_with("bad key");
    let client = client_with(GeminiConfig::new("k").with_base_url("https://x"), &transport);

    let errors = client.check_configuration().await;

    assert_eq!(errors, vec!["bad key".to_string()]);
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn live_check_sends_single_probe_message() {
    let transport = ScriptedTransport::succeeding_with(reply_with("hello world"));
    let client = client_with(GeminiConfig::new("k").with_base_url("https://x"), &transport);

    let errors = client.check_configuration().await;

    assert!(errors.is_empty());
    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].body,
        json!({"contents": [{"parts": [{"text": "Say hello world and nothing else."}]}]})
    );
}
