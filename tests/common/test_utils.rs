use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use gemini_relay::{
    config::GeminiConfig,
    llm::LlmClient,
    server::{handlers::AppState, router},
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Build the application router around any upstream client
pub fn create_test_app(client: impl LlmClient + 'static) -> Router {
    router(AppState {
        client: Arc::new(client),
    })
}

/// Gemini config pointed at a local mock server
pub fn create_test_gemini_config(base_uri: &str) -> GeminiConfig {
    GeminiConfig {
        base_url: format!("{}/v1beta", base_uri),
        api_key: "test-api-key".to_string(),
        connect_timeout_ms: 1_000,
        request_timeout_ms: 2_000,
        ..GeminiConfig::default()
    }
}

pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

/// A well-formed Gemini response carrying one text candidate
pub fn candidate_body(text: &str) -> Value {
    json!({
        "candidates": [
            {
                "content": {"parts": [{"text": text}], "role": "model"},
                "finishReason": "STOP"
            }
        ]
    })
}

pub fn generate_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
