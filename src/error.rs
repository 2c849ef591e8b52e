use crate::server::types::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("prompt must be a non-empty string")]
    InvalidPrompt,

    /// The upstream answered with an error status; `body` is its JSON verbatim.
    #[error("Upstream returned status {status}: {body}")]
    Upstream { status: u16, body: Value },

    #[error("Invalid JSON from upstream (status {status})")]
    UpstreamMalformed { status: u16 },

    #[error("Upstream request timed out")]
    UpstreamTimeout,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Classifies a transport failure, separating deadline expiry from the rest.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::UpstreamTimeout
        } else {
            Self::Network(err)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPrompt => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::UpstreamMalformed { .. } | Self::Network(_) => StatusCode::BAD_GATEWAY,
            Self::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        match self {
            Self::Upstream { body, .. } => {
                warn!("Forwarding upstream error with status {}", status);
                (status, Json(body)).into_response()
            }
            Self::UpstreamMalformed { status: upstream } => {
                warn!("Upstream returned non-JSON body with status {}", upstream);
                status.into_response()
            }
            Self::InvalidPrompt => (status, Json(ErrorResponse { error: message })).into_response(),
            _ => {
                error!("Request failed: {}", message);
                (status, Json(ErrorResponse { error: message })).into_response()
            }
        }
    }
}
