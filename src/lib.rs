//! trip-saver-rs: budget estimates and streamed AI itineraries for student trips across India
//!
//! The crate has two independent halves. The budget estimator turns a
//! [`TripRequest`] into a [`BudgetBreakdown`] from static rate tables, with no
//! I/O and no failure modes. The itinerary planner relays one streaming
//! completion from an LLM provider, handing each fragment to a caller-supplied
//! sink and returning a [`GenerationOutcome`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_saver_rs::{estimate_budget, format_budget_summary, ItineraryPlanner, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = TripRequest::new("Rishikesh", 4, "budget", 3);
//!     let breakdown = estimate_budget(&request);
//!     println!("{}", format_budget_summary(&breakdown));
//!
//!     let planner = ItineraryPlanner::from_env()?;
//!     let mut print = |fragment: &str| print!("{fragment}");
//!     let outcome = planner.plan_trip(&request, &breakdown, Some(&mut print)).await;
//!     println!("\n{:?}", outcome.failure_kind());
//!     Ok(())
//! }
//! ```

extern crate self as trip_saver_rs;

pub mod budget;
pub mod catalogue;
pub mod config;
pub mod core;
pub mod error;
pub mod schemas;
pub mod services;
pub mod types;

pub use budget::{estimate_budget, format_budget_summary, BudgetEstimator, RateCard};
pub use config::PlannerConfig;
pub use core::{
    spawn_generation, spawn_trip_plan, FragmentSink, GenerationHandle, GenerationProvider,
    ItineraryPlanner, RelayEvent,
};
pub use error::{PlannerError, Result};
pub use schemas::{trip_request_schema, RequestValidator};
pub use services::GroqClient;
pub use types::{
    BudgetBreakdown, BudgetTier, FailureKind, GenerationOutcome, TransportMode, TripRequest,
    EMPTY_RESPONSE_PLACEHOLDER,
};

pub use core as relay;

#[cfg(feature = "cli")]
pub mod cli;
