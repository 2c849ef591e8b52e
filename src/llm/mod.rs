mod client;
mod extract;
mod types;

pub use client::{GeminiClient, LlmClient};
pub use extract::extract_text;
pub use types::{Content, GenerateContentRequest, Part};
