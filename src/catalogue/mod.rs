//! Static catalogue of student-friendly destinations in India.
//!
//! Everything here is compiled into the binary and never mutated, so lookups are
//! safe from any thread without synchronisation.

mod destinations;

use crate::types::BudgetTier;
use serde::{Deserialize, Serialize};

pub use destinations::{DEPARTURE_CITIES, TRAVEL_STYLES};

/// One value per spending tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerTier<T> {
    pub budget: T,
    pub mid: T,
    pub premium: T,
}

impl<T: Copy> PerTier<T> {
    pub fn get(&self, tier: BudgetTier) -> T {
        match tier {
            BudgetTier::Budget => self.budget,
            BudgetTier::Mid => self.mid,
            BudgetTier::Premium => self.premium,
        }
    }
}

/// Descriptive travel advice for reaching a destination from one city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransportHint {
    pub origin: &'static str,
    pub mode: &'static str,
    pub detail: &'static str,
}

/// A catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub state: &'static str,
    pub best_time: &'static str,
    /// Typical total spend per person per day, used as the activity-cost hint
    pub avg_budget_per_day: PerTier<i64>,
    pub transport_hints: &'static [TransportHint],
    pub places: &'static [&'static str],
    pub activities: &'static [&'static str],
    pub food_spots: &'static [&'static str],
    pub accommodation: PerTier<&'static str>,
    pub student_tips: &'static [&'static str],
    pub maps_url: &'static str,
    pub emoji: &'static str,
}

impl Destination {
    /// Average daily spend for the tier.
    pub fn activity_daily(&self, tier: BudgetTier) -> i64 {
        self.avg_budget_per_day.get(tier)
    }

    pub fn accommodation_hint(&self, tier: BudgetTier) -> &'static str {
        self.accommodation.get(tier)
    }

    /// Transport advice from `origin`, matched case-insensitively.
    pub fn hints_from<'a>(&'a self, origin: &'a str) -> impl Iterator<Item = &'a TransportHint> {
        self.transport_hints
            .iter()
            .filter(move |hint| hint.origin.eq_ignore_ascii_case(origin))
    }
}

/// All catalogue entries in display order.
pub fn destinations() -> &'static [Destination] {
    destinations::DESTINATIONS
}

/// Look up a destination by its exact catalogue name.
pub fn find_destination(name: &str) -> Option<&'static Destination> {
    destinations::DESTINATIONS.iter().find(|dest| dest.name == name)
}

/// Look up a destination ignoring case and surrounding whitespace.
pub fn search_destination(name: &str) -> Option<&'static Destination> {
    let wanted = name.trim();
    find_destination(wanted).or_else(|| {
        destinations::DESTINATIONS
            .iter()
            .find(|dest| dest.name.eq_ignore_ascii_case(wanted))
    })
}

pub fn destination_names() -> Vec<&'static str> {
    destinations::DESTINATIONS.iter().map(|dest| dest.name).collect()
}

/// Multi-line overview of a destination for terminal output.
pub fn format_destination_card(dest: &Destination) -> String {
    let mut lines = vec![
        format!("{} {} — {}", dest.emoji, dest.name, dest.tagline),
        format!("📍 {}   🗓️  Best time: {}", dest.state, dest.best_time),
        String::new(),
        dest.description.to_string(),
        String::new(),
        format!(
            "💸 Avg. per day: budget ₹{} | mid ₹{} | premium ₹{}",
            dest.avg_budget_per_day.budget,
            dest.avg_budget_per_day.mid,
            dest.avg_budget_per_day.premium
        ),
    ];

    push_section(&mut lines, "🏛️  Places", dest.places);
    push_section(&mut lines, "🎯 Activities", dest.activities);
    push_section(&mut lines, "🍛 Food spots", dest.food_spots);

    lines.push(String::new());
    lines.push("🏨 Stay".to_string());
    for tier in BudgetTier::ALL {
        lines.push(format!("  • {}: {}", tier, dest.accommodation_hint(tier)));
    }

    if !dest.transport_hints.is_empty() {
        lines.push(String::new());
        lines.push("🚆 Getting there".to_string());
        for hint in dest.transport_hints {
            lines.push(format!("  • {} by {}: {}", hint.origin, hint.mode, hint.detail));
        }
    }

    push_section(&mut lines, "💡 Student tips", dest.student_tips);

    lines.push(String::new());
    lines.push(format!("🗺️  {}", dest.maps_url));
    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, title: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(title.to_string());
    lines.extend(items.iter().map(|item| format!("  • {item}")));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_has_six_destinations() {
        assert_eq!(
            destination_names(),
            vec![
                "Rishikesh",
                "Varanasi (Banaras)",
                "Manali",
                "Goa",
                "Jaipur",
                "Darjeeling"
            ]
        );
    }

    #[test]
    fn test_activity_daily_by_tier() {
        let rishikesh = find_destination("Rishikesh").unwrap();
        assert_eq!(rishikesh.activity_daily(BudgetTier::Budget), 500);
        assert_eq!(rishikesh.activity_daily(BudgetTier::Mid), 1200);
        assert_eq!(rishikesh.activity_daily(BudgetTier::Premium), 2500);
    }

    #[test]
    fn test_search_is_case_insensitive_but_find_is_exact() {
        assert!(find_destination("goa").is_none());
        assert_eq!(search_destination("  goa ").map(|d| d.name), Some("Goa"));
    }

    #[test]
    fn test_hints_from_origin() {
        let jaipur = find_destination("Jaipur").unwrap();
        let modes: Vec<_> = jaipur.hints_from("delhi").map(|hint| hint.mode).collect();
        assert_eq!(modes, vec!["train", "bus", "flight"]);
    }

    #[test]
    fn test_destination_card_mentions_key_fields() {
        let card = format_destination_card(find_destination("Darjeeling").unwrap());
        assert!(card.contains("Queen of Hills"));
        assert!(card.contains("Tiger Hill"));
        assert!(card.contains("premium: Heritage bungalows"));
    }
}
