pub mod planner;
pub mod provider;
pub mod sink;
pub mod worker;

pub use planner::ItineraryPlanner;
pub use provider::{CompletionRequest, FragmentStream, GenerationProvider};
pub use sink::FragmentSink;
pub use worker::{spawn_generation, spawn_trip_plan, GenerationHandle, RelayEvent};
