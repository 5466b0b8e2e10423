use std::{collections::VecDeque, time::Duration};

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use super::sse::{describe_error_body, parse_sse_line, SseEvent};
use crate::{
    core::provider::{CompletionRequest, FragmentStream, GenerationProvider},
    error::{PlannerError, Result},
};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Streaming chat-completion client for Groq's OpenAI-compatible API.
#[derive(Clone)]
pub struct GroqClient {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Whole-request limit, covering the time spent streaming the body.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for GroqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl GenerationProvider for GroqClient {
    async fn open_stream(&self, request: &CompletionRequest) -> Result<Box<dyn FragmentStream>> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| PlannerError::Unknown(format!("Failed to build HTTP client: {err}")))?;

        let body = ChatCompletionRequest::new(
            request.model.clone(),
            vec![
                json!({ "role": "system", "content": request.system_instruction }),
                json!({ "role": "user", "content": request.prompt }),
            ],
        )
        .streaming()
        .into_value();

        let request_url = build_chat_url(&self.base_url);
        debug!(
            target: "tripsaver::groq",
            url = %request_url,
            model = %request.model,
            "opening stream"
        );

        let response = client
            .post(&request_url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .header("Accept", "text/event-stream")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let response_text = response.text().await.unwrap_or_default();
            let message = if response_text.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("empty error response")
                    .to_string()
            } else {
                describe_error_body(&response_text)
            };
            return Err(PlannerError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map_or(false, |value| value.starts_with("application/json"));
        if is_json {
            // a non-streaming body where a stream was requested carries an error, if anything
            let response_text = response.text().await?;
            return Err(PlannerError::Provider {
                status: status.as_u16(),
                message: format!(
                    "expected an event stream: {}",
                    describe_error_body(&response_text)
                ),
            });
        }

        Ok(Box::new(SseFragmentStream::new(response)))
    }
}

/// Fragments decoded from a `text/event-stream` response body.
struct SseFragmentStream {
    response: reqwest::Response,
    buffer: Vec<u8>,
    pending: VecDeque<String>,
    deferred_error: Option<PlannerError>,
    finished: bool,
    saw_event: bool,
    stray: Vec<String>,
}

impl SseFragmentStream {
    fn new(response: reqwest::Response) -> Self {
        Self {
            response,
            buffer: Vec::new(),
            pending: VecDeque::new(),
            deferred_error: None,
            finished: false,
            saw_event: false,
            stray: Vec::new(),
        }
    }

    fn drain_complete_lines(&mut self) {
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            self.handle_line(&String::from_utf8_lossy(&line));
            if self.finished || self.deferred_error.is_some() {
                self.buffer.clear();
                break;
            }
        }
    }

    fn handle_line(&mut self, line: &str) {
        match parse_sse_line(line) {
            Ok(SseEvent::Fragment(text)) => {
                self.saw_event = true;
                self.pending.push_back(text);
            }
            Ok(SseEvent::Done) => {
                self.saw_event = true;
                self.finished = true;
            }
            Ok(SseEvent::Ignored) => {}
            Ok(SseEvent::Unrecognized(text)) => self.stray.push(text),
            // fragments decoded before the bad line are still handed out first
            Err(err) => self.deferred_error = Some(err),
        }
    }
}

#[async_trait]
impl FragmentStream for SseFragmentStream {
    async fn next_fragment(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(fragment) = self.pending.pop_front() {
                return Ok(Some(fragment));
            }
            if let Some(err) = self.deferred_error.take() {
                self.finished = true;
                return Err(err);
            }
            if self.finished {
                return Ok(None);
            }

            match self.response.chunk().await? {
                Some(bytes) => {
                    self.buffer.extend_from_slice(&bytes);
                    self.drain_complete_lines();
                }
                None => {
                    let rest = std::mem::take(&mut self.buffer);
                    if !rest.is_empty() {
                        self.handle_line(&String::from_utf8_lossy(&rest));
                    }
                    self.finished = true;
                    if !self.saw_event && !self.stray.is_empty() && self.deferred_error.is_none() {
                        let body = self.stray.join("\n");
                        self.deferred_error = Some(PlannerError::Stream(format!(
                            "response was not an event stream: {}",
                            describe_error_body(&body)
                        )));
                    }
                }
            }
        }
    }
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

#[derive(Clone, Debug)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Value>,
    stream: bool,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Value>) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: false,
        }
    }

    pub fn streaming(mut self) -> Self {
        self.stream = true;
        self
    }

    pub fn into_value(self) -> Value {
        json!({
            "model": self.model,
            "messages": self.messages,
            "stream": self.stream,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chat_url() {
        assert_eq!(
            build_chat_url("https://api.groq.com/openai/v1/"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(
            build_chat_url("http://localhost:1234/chat/completions"),
            "http://localhost:1234/chat/completions"
        );
    }

    #[test]
    fn test_streaming_request_body() {
        let messages = vec![json!({"role": "user", "content": "hi"})];
        let body = ChatCompletionRequest::new("llama", messages)
            .streaming()
            .into_value();

        assert_eq!(body["model"], "llama");
        assert_eq!(body["stream"], true);
        assert_eq!(body["messages"][0]["content"], "hi");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = GroqClient::new("gsk_secret");
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("gsk_secret"));
        assert!(rendered.contains(DEFAULT_BASE_URL));
    }
}
