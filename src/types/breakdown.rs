use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which route-table fare the intercity figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Train,
    Bus,
    Flight,
    /// No fare on record; a flat fallback was used
    Estimated,
}

impl TransportMode {
    /// Order in which route fares are considered.
    pub const PRIORITY: [TransportMode; 3] =
        [TransportMode::Train, TransportMode::Bus, TransportMode::Flight];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
            TransportMode::Flight => "flight",
            TransportMode::Estimated => "estimated",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-person and per-group cost estimate for one trip, in whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BudgetBreakdown {
    /// Lodging for the whole stay
    pub accommodation: i64,
    /// Meals for the whole stay
    pub food: i64,
    /// Autos, buses and rentals at the destination
    pub local_transport: i64,
    /// Entry fees and excursions
    pub activities: i64,
    /// Round-trip travel between departure city and destination
    pub intercity_transport: i64,
    /// Route-table mode behind `intercity_transport`
    pub transport_mode: TransportMode,
    /// Shopping and miscellaneous allowance
    pub misc: i64,
    pub per_person_total: i64,
    pub group_total: i64,
    pub duration: i32,
    pub group_size: u32,
    /// Normalised tier label the request was made with
    pub tier: String,
}

impl BudgetBreakdown {
    /// Sum of the six per-person line items.
    pub fn component_sum(&self) -> i64 {
        [
            self.food,
            self.local_transport,
            self.activities,
            self.intercity_transport,
            self.misc,
        ]
        .into_iter()
        .fold(self.accommodation, i64::saturating_add)
    }
}
