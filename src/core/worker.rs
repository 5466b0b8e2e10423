use super::{planner::ItineraryPlanner, sink::FragmentSink};
use crate::types::{BudgetBreakdown, GenerationOutcome, TripRequest};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tracing::debug;

/// Progress of a generation running on a background task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayEvent {
    Fragment(String),
    Finished(GenerationOutcome),
}

impl FragmentSink for UnboundedSender<RelayEvent> {
    fn on_fragment(&mut self, fragment: &str) {
        // a closed receiver means the caller stopped listening
        let _ = self.send(RelayEvent::Fragment(fragment.to_string()));
    }
}

/// Caller-side end of a background generation.
///
/// Events arrive in the order the worker produced them: every fragment, then
/// exactly one `Finished`. Dropping the handle abandons the result; the request
/// itself runs to completion since it has no cooperative abort point.
#[derive(Debug)]
pub struct GenerationHandle {
    events: UnboundedReceiver<RelayEvent>,
    task: JoinHandle<()>,
}

impl GenerationHandle {
    /// Next event, `None` once the worker is gone.
    pub async fn next_event(&mut self) -> Option<RelayEvent> {
        self.events.recv().await
    }

    /// Forward fragments to `on_fragment` on the caller's task and return the outcome.
    pub async fn drain(mut self, mut on_fragment: impl FnMut(&str)) -> GenerationOutcome {
        while let Some(event) = self.events.recv().await {
            match event {
                RelayEvent::Fragment(text) => on_fragment(&text),
                RelayEvent::Finished(outcome) => return outcome,
            }
        }

        let reason = match self.task.await {
            Err(err) if err.is_panic() => "generation worker panicked",
            _ => "generation worker stopped before finishing",
        };
        GenerationOutcome::failure(reason)
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Run one generation on a tokio task, marshalling its events back over a channel.
pub fn spawn_generation(planner: ItineraryPlanner, prompt: String) -> GenerationHandle {
    let (tx, events) = mpsc::unbounded_channel();
    let task = tokio::spawn(async move {
        let mut sink = tx.clone();
        let outcome = planner.generate(&prompt, Some(&mut sink)).await;
        debug!(target: "tripsaver::relay", success = outcome.is_success(), "worker finished");
        let _ = tx.send(RelayEvent::Finished(outcome));
    });
    GenerationHandle { events, task }
}

/// [`spawn_generation`] for a trip and its estimate.
pub fn spawn_trip_plan(
    planner: ItineraryPlanner,
    request: &TripRequest,
    breakdown: &BudgetBreakdown,
) -> GenerationHandle {
    let prompt = ItineraryPlanner::trip_prompt(request, breakdown);
    spawn_generation(planner, prompt)
}
