use crate::error::{PlannerError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest and longest trip the planner offers.
pub const DURATION_RANGE: std::ops::RangeInclusive<i32> = 1..=15;
/// Smallest and largest travelling group the planner offers.
pub const GROUP_SIZE_RANGE: std::ops::RangeInclusive<u32> = 1..=20;

fn default_departure_city() -> String {
    "Delhi".to_string()
}

fn default_travel_style() -> String {
    "Backpacker".to_string()
}

/// Everything a student tells us about the trip they want to take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TripRequest {
    /// Destination name as listed in the catalogue (e.g. "Rishikesh")
    pub destination: String,
    /// Length of the trip in days (1-15)
    pub duration_days: i32,
    /// Spending tier: "budget", "mid" or "premium"
    pub budget_tier: String,
    /// Number of students travelling together
    pub group_size: u32,
    /// City the group departs from
    #[serde(default = "default_departure_city")]
    pub departure_city: String,
    /// Free-form travel style (e.g. "Adventure & Trekking")
    #[serde(default = "default_travel_style")]
    pub travel_style: String,
    /// Optional extra wishes such as dietary needs
    #[serde(default)]
    pub preferences: Option<String>,
    /// Budget per person the group has in mind, in rupees
    #[serde(default)]
    pub budget_per_person: Option<i64>,
}

impl TripRequest {
    pub fn new(
        destination: impl Into<String>,
        duration_days: i32,
        budget_tier: impl Into<String>,
        group_size: u32,
    ) -> Self {
        Self {
            destination: destination.into(),
            duration_days,
            budget_tier: budget_tier.into(),
            group_size,
            departure_city: default_departure_city(),
            travel_style: default_travel_style(),
            preferences: None,
            budget_per_person: None,
        }
    }

    pub fn with_departure_city(mut self, city: impl Into<String>) -> Self {
        self.departure_city = city.into();
        self
    }

    pub fn with_travel_style(mut self, style: impl Into<String>) -> Self {
        self.travel_style = style.into();
        self
    }

    pub fn with_preferences(mut self, preferences: impl Into<String>) -> Self {
        self.preferences = Some(preferences.into());
        self
    }

    pub fn with_budget_per_person(mut self, budget: i64) -> Self {
        self.budget_per_person = Some(budget);
        self
    }

    /// Lower-cased tier label as typed by the user.
    pub fn tier_label(&self) -> String {
        self.budget_tier.trim().to_lowercase()
    }

    /// Preferences with blank input treated as absent.
    pub fn preferences(&self) -> Option<&str> {
        self.preferences
            .as_deref()
            .map(str::trim)
            .filter(|prefs| !prefs.is_empty())
    }

    /// Range checks a front-end applies before handing the request to the core.
    ///
    /// The estimator itself accepts any values; this is where out-of-range input
    /// gets rejected with a readable message.
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().is_empty() {
            return Err(PlannerError::Validation(
                "destination must not be empty".to_string(),
            ));
        }
        if !DURATION_RANGE.contains(&self.duration_days) {
            return Err(PlannerError::Validation(format!(
                "duration_days must be between {} and {}, got {}",
                DURATION_RANGE.start(),
                DURATION_RANGE.end(),
                self.duration_days
            )));
        }
        if !GROUP_SIZE_RANGE.contains(&self.group_size) {
            return Err(PlannerError::Validation(format!(
                "group_size must be between {} and {}, got {}",
                GROUP_SIZE_RANGE.start(),
                GROUP_SIZE_RANGE.end(),
                self.group_size
            )));
        }
        if let Some(budget) = self.budget_per_person {
            if budget <= 0 {
                return Err(PlannerError::Validation(format!(
                    "budget_per_person must be positive, got {budget}"
                )));
            }
        }
        Ok(())
    }
}

/// Spending tier used to pick a row from every rate table.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    #[default]
    Budget,
    Mid,
    Premium,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Budget, BudgetTier::Mid, BudgetTier::Premium];

    /// Parse a tier label case-insensitively. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "budget" => Some(BudgetTier::Budget),
            "mid" => Some(BudgetTier::Mid),
            "premium" => Some(BudgetTier::Premium),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::Mid => "mid",
            BudgetTier::Premium => "premium",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
