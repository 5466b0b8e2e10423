use super::{
    provider::{CompletionRequest, GenerationProvider},
    sink::FragmentSink,
};
use crate::{
    config::PlannerConfig,
    error::Result,
    services::{
        groq_client::GroqClient, render_itinerary_prompt, DEFAULT_MODEL, SYSTEM_INSTRUCTION,
    },
    types::{BudgetBreakdown, GenerationOutcome, TripRequest, EMPTY_RESPONSE_PLACEHOLDER},
};
use std::{sync::Arc, time::Duration};
use tracing::{debug, warn};

/// Relays one itinerary generation from a provider to the caller.
///
/// Each call to [`ItineraryPlanner::generate`] makes exactly one provider
/// request and keeps its own accumulator, so a planner can be shared between
/// concurrent callers. There is no retry, timeout or cancellation here; callers
/// that need those wrap the call (see [`crate::core::spawn_generation`]).
#[derive(Debug, Clone)]
pub struct ItineraryPlanner {
    provider: Arc<dyn GenerationProvider>,
    groq: Option<GroqClient>,
    model: String,
    system_instruction: String,
}

impl ItineraryPlanner {
    /// Planner backed by the Groq API.
    pub fn new(api_key: impl Into<String>) -> Self {
        let groq = GroqClient::new(api_key);
        Self {
            provider: Arc::new(groq.clone()),
            groq: Some(groq),
            model: DEFAULT_MODEL.to_string(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
        }
    }

    /// Planner backed by any provider implementation.
    pub fn with_provider(provider: Arc<dyn GenerationProvider>) -> Self {
        Self {
            provider,
            groq: None,
            model: DEFAULT_MODEL.to_string(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    /// Point the built-in Groq client at another OpenAI-compatible endpoint.
    /// Has no effect on a custom provider.
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.map_groq(|client| client.set_base_url(base_url))
    }

    /// HTTP timeout of the built-in Groq client. Has no effect on a custom provider.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.map_groq(|client| client.set_timeout(timeout))
    }

    fn map_groq(mut self, update: impl FnOnce(&mut GroqClient)) -> Self {
        if let Some(mut client) = self.groq.take() {
            update(&mut client);
            self.provider = Arc::new(client.clone());
            self.groq = Some(client);
        }
        self
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.api_key.clone())
            .with_base_url(config.base_url.clone())
            .with_model(config.model.clone())
            .with_timeout(config.timeout)
    }

    pub fn from_env() -> Result<Self> {
        let config = PlannerConfig::from_env()?;
        Ok(Self::from_config(&config))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Stream a completion for `prompt`, feeding every fragment to `sink`.
    ///
    /// Never fails: provider faults come back as [`GenerationOutcome::Failure`].
    /// Fragments delivered before a mid-stream fault stay delivered, but the
    /// outcome is still the failure.
    pub async fn generate(
        &self,
        prompt: &str,
        mut sink: Option<&mut (dyn FragmentSink + Send)>,
    ) -> GenerationOutcome {
        let request = CompletionRequest::new(
            self.model.clone(),
            self.system_instruction.clone(),
            prompt,
        );
        debug!(target: "tripsaver::relay", model = %self.model, "streaming");

        let mut full_text = String::new();
        let mut fragments = 0usize;
        let streamed = self
            .stream_into(&request, &mut full_text, &mut fragments, &mut sink)
            .await;

        match streamed {
            Ok(()) if full_text.is_empty() => {
                debug!(target: "tripsaver::relay", "completed with empty response");
                GenerationOutcome::success(EMPTY_RESPONSE_PLACEHOLDER)
            }
            Ok(()) => {
                debug!(
                    target: "tripsaver::relay",
                    fragments,
                    chars = full_text.len(),
                    "completed"
                );
                GenerationOutcome::success(full_text)
            }
            Err(err) => {
                let outcome = GenerationOutcome::failure(err.to_string());
                warn!(
                    target: "tripsaver::relay",
                    kind = ?outcome.failure_kind(),
                    fragments_delivered = fragments,
                    error = %err,
                    "generation failed"
                );
                outcome
            }
        }
    }

    async fn stream_into(
        &self,
        request: &CompletionRequest,
        full_text: &mut String,
        fragments: &mut usize,
        sink: &mut Option<&mut (dyn FragmentSink + Send)>,
    ) -> Result<()> {
        let mut stream = self.provider.open_stream(request).await?;
        while let Some(fragment) = stream.next_fragment().await? {
            full_text.push_str(&fragment);
            *fragments += 1;
            if let Some(sink) = sink.as_mut() {
                sink.on_fragment(&fragment);
            }
        }
        Ok(())
    }

    /// Render the itinerary prompt for a trip and stream the response.
    ///
    /// The prompt quotes the student's own per-person budget when given,
    /// otherwise the estimate's per-person total.
    pub async fn plan_trip(
        &self,
        request: &TripRequest,
        breakdown: &BudgetBreakdown,
        sink: Option<&mut (dyn FragmentSink + Send)>,
    ) -> GenerationOutcome {
        let prompt = Self::trip_prompt(request, breakdown);
        self.generate(&prompt, sink).await
    }

    /// Itinerary prompt for a trip and its estimate.
    pub fn trip_prompt(request: &TripRequest, breakdown: &BudgetBreakdown) -> String {
        let budget = request
            .budget_per_person
            .unwrap_or(breakdown.per_person_total);
        render_itinerary_prompt(request, budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::provider::FragmentStream, error::PlannerError, types::FailureKind};
    use async_trait::async_trait;
    use std::collections::VecDeque;

    #[derive(Debug)]
    struct ScriptedProvider {
        fragments: Vec<&'static str>,
        fail_after: Option<&'static str>,
    }

    struct ScriptedStream {
        fragments: VecDeque<String>,
        fail_after: Option<String>,
    }

    #[async_trait]
    impl FragmentStream for ScriptedStream {
        async fn next_fragment(&mut self) -> Result<Option<String>> {
            if let Some(fragment) = self.fragments.pop_front() {
                return Ok(Some(fragment));
            }
            match self.fail_after.take() {
                Some(message) => Err(PlannerError::Stream(message)),
                None => Ok(None),
            }
        }
    }

    #[async_trait]
    impl GenerationProvider for ScriptedProvider {
        async fn open_stream(
            &self,
            _request: &CompletionRequest,
        ) -> Result<Box<dyn FragmentStream>> {
            Ok(Box::new(ScriptedStream {
                fragments: self.fragments.iter().map(|f| f.to_string()).collect(),
                fail_after: self.fail_after.map(str::to_string),
            }))
        }
    }

    fn planner(
        fragments: Vec<&'static str>,
        fail_after: Option<&'static str>,
    ) -> ItineraryPlanner {
        ItineraryPlanner::with_provider(Arc::new(ScriptedProvider {
            fragments,
            fail_after,
        }))
    }

    #[test]
    fn test_fragments_reach_sink_in_order() {
        let planner = planner(vec!["Hello, ", "world!"], None);
        let mut seen: Vec<String> = Vec::new();

        let outcome = tokio_test::block_on(planner.generate("hi", Some(&mut seen)));

        assert_eq!(seen, vec!["Hello, ".to_string(), "world!".to_string()]);
        assert_eq!(outcome, GenerationOutcome::success("Hello, world!"));
    }

    #[test]
    fn test_no_fragments_yields_placeholder() {
        let planner = planner(vec![], None);
        let outcome = tokio_test::block_on(planner.generate("hi", None));

        assert!(outcome.is_empty_response());
        assert_eq!(outcome.text(), Some(EMPTY_RESPONSE_PLACEHOLDER));
    }

    #[test]
    fn test_mid_stream_failure_keeps_sink_output_but_reports_failure() {
        let planner = planner(vec!["Day 1"], Some("connection reset"));
        let mut seen: Vec<String> = Vec::new();

        let outcome = tokio_test::block_on(planner.generate("hi", Some(&mut seen)));

        assert_eq!(seen, vec!["Day 1".to_string()]);
        assert_eq!(outcome.failure_kind(), Some(FailureKind::GenericError));
        assert!(outcome.text().is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let planner = ItineraryPlanner::new("key")
            .with_model("llama-3.1-8b-instant")
            .with_base_url("http://localhost:9999/v1");
        assert_eq!(planner.model(), "llama-3.1-8b-instant");
        assert_eq!(
            planner.groq.as_ref().map(GroqClient::base_url),
            Some("http://localhost:9999/v1")
        );
    }
}
