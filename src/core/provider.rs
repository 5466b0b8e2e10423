use crate::error::Result;
use async_trait::async_trait;

/// Everything a provider needs to open one streaming chat completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub system_instruction: String,
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        system_instruction: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            system_instruction: system_instruction.into(),
            prompt: prompt.into(),
        }
    }
}

/// Ordered text fragments of one streaming response.
#[async_trait]
pub trait FragmentStream: Send {
    /// Next fragment, `Ok(None)` once the provider signalled end-of-stream.
    async fn next_fragment(&mut self) -> Result<Option<String>>;
}

/// A text-generation backend that can stream a chat completion.
#[async_trait]
pub trait GenerationProvider: Send + Sync + std::fmt::Debug {
    /// Open a streaming completion. Connection, auth and quota problems surface
    /// either here or from the returned stream.
    async fn open_stream(&self, request: &CompletionRequest) -> Result<Box<dyn FragmentStream>>;
}
