pub mod breakdown;
pub mod outcome;
pub mod trip;

pub use breakdown::{BudgetBreakdown, TransportMode};
pub use outcome::{FailureKind, GenerationOutcome, EMPTY_RESPONSE_PLACEHOLDER};
pub use trip::{BudgetTier, TripRequest, DURATION_RANGE, GROUP_SIZE_RANGE};
