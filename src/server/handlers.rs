use super::types::{GenerateRequest, GenerateResponse, HealthResponse};
use crate::{
    Error, Result,
    llm::{LlmClient, extract_text},
};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{debug, info};

pub const NO_CANDIDATE_TEXT: &str = "(no textual candidate found)";

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn LlmClient>,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    if request.prompt.trim().is_empty() {
        debug!("Rejecting generate request with empty prompt");
        return Err(Error::InvalidPrompt);
    }

    info!(
        "Received generate request ({} chars, debug={})",
        request.prompt.chars().count(),
        request.debug()
    );

    let upstream = state.client.generate_content(&request.prompt).await?;

    let text = match extract_text(&upstream) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => {
            info!("No textual candidate in upstream response");
            NO_CANDIDATE_TEXT.to_string()
        }
    };

    Ok(Json(GenerateResponse {
        text,
        raw: request.debug().then_some(upstream),
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
