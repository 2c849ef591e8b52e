use async_trait::async_trait;
use gemini_relay::{Error, Result, llm::LlmClient};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// What the mock upstream answers with.
#[derive(Debug, Clone)]
pub enum MockReply {
    Body(Value),
    UpstreamError { status: u16, body: Value },
    Malformed,
    Timeout,
}

/// Mock LLM client for testing
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub reply: MockReply,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockLlmClient {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_body(body: Value) -> Self {
        Self::new(MockReply::Body(body))
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_content(&self, prompt: &str) -> Result<Value> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.reply {
            MockReply::Body(body) => Ok(body.clone()),
            MockReply::UpstreamError { status, body } => Err(Error::Upstream {
                status: *status,
                body: body.clone(),
            }),
            MockReply::Malformed => Err(Error::UpstreamMalformed { status: 200 }),
            MockReply::Timeout => Err(Error::UpstreamTimeout),
        }
    }
}
