//! Server-sent event decoding for OpenAI-compatible chat completion streams.

use crate::error::{PlannerError, Result};
use serde::Deserialize;

/// One `data:` payload of a streaming chat completion.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionChunk {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub delta: Delta,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Delta {
    #[serde(default)]
    pub content: Option<String>,
}

/// Error object as returned by OpenAI-compatible APIs.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ApiErrorBody {
    /// Message followed by the machine-readable code, e.g. `Invalid API Key [invalid_api_key]`.
    pub fn describe(&self) -> String {
        let message = self.message.as_deref().unwrap_or("unknown provider error");
        match self.code.as_deref().or(self.kind.as_deref()) {
            Some(code) => format!("{message} [{code}]"),
            None => message.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

/// Extract a readable description from an error response body.
pub fn describe_error_body(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.describe(),
        Err(_) => body.trim().to_string(),
    }
}

/// What a single SSE line means for the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    Fragment(String),
    Done,
    Ignored,
    /// A non-blank line that is not part of the SSE grammar, kept for error reporting.
    Unrecognized(String),
}

const SSE_FIELDS: [&str; 3] = ["event:", "id:", "retry:"];

/// Decode one line of an event stream.
pub fn parse_sse_line(line: &str) -> Result<SseEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(data) = line.strip_prefix("data:") else {
        return parse_non_data_line(line);
    };
    let data = data.trim_start();

    if data == "[DONE]" {
        return Ok(SseEvent::Done);
    }

    let chunk: ChatCompletionChunk = serde_json::from_str(data)
        .map_err(|err| PlannerError::Stream(format!("Malformed stream payload: {err}")))?;

    if let Some(error) = chunk.error {
        return Err(PlannerError::Stream(error.describe()));
    }

    Ok(chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content)
        .map(SseEvent::Fragment)
        .unwrap_or(SseEvent::Ignored))
}

fn parse_non_data_line(line: &str) -> Result<SseEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty()
        || trimmed.starts_with(':')
        || SSE_FIELDS.iter().any(|field| trimmed.starts_with(field))
    {
        return Ok(SseEvent::Ignored);
    }

    // a plain JSON error body sent with a success status
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(trimmed) {
        return Err(PlannerError::Stream(envelope.error.describe()));
    }
    Ok(SseEvent::Unrecognized(trimmed.to_string()))
}
