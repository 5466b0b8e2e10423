use crate::{
    catalogue::PerTier,
    error::{PlannerError, Result},
    types::{BudgetTier, TransportMode},
};
use serde::{Deserialize, Serialize};
use std::{path::Path, sync::OnceLock};

/// One-way fares per person between a departure city and a destination.
///
/// `None` means the mode does not serve the route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteFare {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub train: Option<i64>,
    #[serde(default)]
    pub bus: Option<i64>,
    #[serde(default)]
    pub flight: Option<i64>,
}

impl RouteFare {
    pub fn new(
        origin: &str,
        destination: &str,
        train: Option<i64>,
        bus: Option<i64>,
        flight: Option<i64>,
    ) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            train,
            bus,
            flight,
        }
    }

    /// One-way fare for `mode`. Zero fares count as not applicable.
    pub fn fare(&self, mode: TransportMode) -> Option<i64> {
        let fare = match mode {
            TransportMode::Train => self.train,
            TransportMode::Bus => self.bus,
            TransportMode::Flight => self.flight,
            TransportMode::Estimated => None,
        };
        fare.filter(|amount| *amount != 0)
    }

    /// First served mode in priority order.
    pub fn preferred_fare(&self) -> Option<(TransportMode, i64)> {
        TransportMode::PRIORITY
            .iter()
            .find_map(|mode| self.fare(*mode).map(|fare| (*mode, fare)))
    }
}

fn default_activity_fallback_daily() -> i64 {
    300
}

fn default_activity_share_percent() -> i64 {
    40
}

fn default_intercity_fallback() -> i64 {
    1200
}

/// Flat-rate tables the estimator reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    /// Lodging per night
    pub accommodation: PerTier<i64>,
    /// Meals per day
    pub food: PerTier<i64>,
    /// Local transport per day
    pub local_transport: PerTier<i64>,
    /// Shopping allowance per trip
    pub misc: PerTier<i64>,
    /// Daily activity spend when the catalogue has no hint
    #[serde(default = "default_activity_fallback_daily")]
    pub activity_fallback_daily: i64,
    /// Share of a destination's daily spend attributed to activities
    #[serde(default = "default_activity_share_percent")]
    pub activity_share_percent: i64,
    /// Round-trip figure used when no route fare is known
    #[serde(default = "default_intercity_fallback")]
    pub intercity_fallback: i64,
    #[serde(default)]
    pub routes: Vec<RouteFare>,
}

impl RateCard {
    /// Built-in rates, initialised on first use and shared for the life of the process.
    pub fn standard() -> &'static RateCard {
        static STANDARD: OnceLock<RateCard> = OnceLock::new();
        STANDARD.get_or_init(build_standard)
    }

    /// Parse a rate card from JSON, reporting the path of any bad field.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let deserializer = &mut serde_json::Deserializer::from_str(json);
        let card: RateCard = serde_path_to_error::deserialize(deserializer).map_err(|err| {
            PlannerError::Validation(format!("Invalid rate card at {}: {}", err.path(), err))
        })?;
        card.validate()?;
        Ok(card)
    }

    /// Reject amounts the estimator cannot price with: negative rates, fares
    /// or fallbacks, and an activity share outside 0..=100.
    pub fn validate(&self) -> Result<()> {
        let tables = [
            ("accommodation", &self.accommodation),
            ("food", &self.food),
            ("local_transport", &self.local_transport),
            ("misc", &self.misc),
        ];
        for (name, table) in tables {
            for tier in BudgetTier::ALL {
                non_negative(&format!("{name}.{tier}"), table.get(tier))?;
            }
        }

        non_negative("activity_fallback_daily", self.activity_fallback_daily)?;
        non_negative("intercity_fallback", self.intercity_fallback)?;
        if !(0..=100).contains(&self.activity_share_percent) {
            return Err(PlannerError::Validation(format!(
                "Invalid rate card at activity_share_percent: must be between 0 and 100, got {}",
                self.activity_share_percent
            )));
        }

        for (idx, route) in self.routes.iter().enumerate() {
            let fares = [("train", route.train), ("bus", route.bus), ("flight", route.flight)];
            for (mode, fare) in fares {
                if let Some(fare) = fare {
                    non_negative(&format!("routes[{idx}].{mode}"), fare)?;
                }
            }
        }
        Ok(())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Route entry for an exact `(origin, destination)` pair.
    pub fn route(&self, origin: &str, destination: &str) -> Option<&RouteFare> {
        self.routes
            .iter()
            .find(|route| route.origin == origin && route.destination == destination)
    }
}

fn non_negative(path: &str, amount: i64) -> Result<()> {
    if amount < 0 {
        return Err(PlannerError::Validation(format!(
            "Invalid rate card at {path}: amount must not be negative, got {amount}"
        )));
    }
    Ok(())
}

fn build_standard() -> RateCard {
    RateCard {
        accommodation: PerTier {
            budget: 450,
            mid: 1200,
            premium: 3500,
        },
        food: PerTier {
            budget: 250,
            mid: 500,
            premium: 1000,
        },
        local_transport: PerTier {
            budget: 100,
            mid: 250,
            premium: 500,
        },
        misc: PerTier {
            budget: 500,
            mid: 1000,
            premium: 2000,
        },
        activity_fallback_daily: default_activity_fallback_daily(),
        activity_share_percent: default_activity_share_percent(),
        intercity_fallback: default_intercity_fallback(),
        routes: vec![
            RouteFare::new("Delhi", "Rishikesh", Some(400), Some(550), None),
            RouteFare::new("Delhi", "Varanasi (Banaras)", Some(450), Some(700), Some(3500)),
            RouteFare::new("Delhi", "Manali", None, Some(900), None),
            RouteFare::new("Delhi", "Jaipur", Some(350), Some(350), Some(2500)),
            RouteFare::new("Delhi", "Goa", Some(800), None, Some(3500)),
            RouteFare::new("Delhi", "Darjeeling", Some(550), None, Some(4000)),
            RouteFare::new("Mumbai", "Goa", Some(500), Some(700), Some(3000)),
            RouteFare::new("Mumbai", "Manali", Some(900), None, Some(5000)),
            RouteFare::new("Mumbai", "Varanasi (Banaras)", Some(900), None, Some(5000)),
            RouteFare::new("Kolkata", "Darjeeling", Some(400), None, Some(3500)),
            RouteFare::new("Varanasi (Banaras)", "Rishikesh", Some(550), Some(700), None),
        ],
    }
}
