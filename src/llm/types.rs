use serde::{Deserialize, Serialize};

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// Wraps the prompt, unchanged, as a single user turn with one text part.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
                role: "user".to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_payload_shape() {
        let payload = GenerateContentRequest::from_prompt("Tell me a joke");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "contents": [
                    {"parts": [{"text": "Tell me a joke"}], "role": "user"}
                ]
            })
        );
    }

    #[test]
    fn test_prompt_is_not_transformed() {
        let prompt = "  leading space, \"quotes\", unicode ✓ and\nnewlines  ";
        let payload = GenerateContentRequest::from_prompt(prompt);

        assert_eq!(payload.contents.len(), 1);
        assert_eq!(payload.contents[0].parts.len(), 1);
        assert_eq!(payload.contents[0].parts[0].text, prompt);

        let encoded = serde_json::to_string(&payload).unwrap();
        let decoded: GenerateContentRequest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.contents[0].parts[0].text, prompt);
    }
}
