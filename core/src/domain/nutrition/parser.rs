use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Value, json};

static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\s*(\{.*?\})\s*```").expect("fenced JSON pattern is valid")
});

/// Pulls a JSON value out of a free-text model reply.
///
/// The first ```` ```json ```` fenced object wins; without one the whole reply
/// is parsed. Anything that does not parse comes back as
/// `{"raw_response": <reply>}`, so this never fails.
pub fn extract_json_response(reply: &str) -> Value {
    let candidate = FENCED_JSON
        .captures(reply)
        .and_then(|captures| captures.get(1))
        .map(|block| block.as_str())
        .unwrap_or(reply);

    match serde_json::from_str::<Value>(candidate) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "model reply is not valid JSON, returning raw text");
            json!({ "raw_response": reply })
        }
    }
}
