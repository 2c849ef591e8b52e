use serde_json::Value;

/// Reads `candidates[0].content.parts[0].text` from a `generateContent` body.
///
/// Returns `None` when any step is missing, empty, or of the wrong type.
pub fn extract_text(response: &Value) -> Option<&str> {
    response
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()
}
