use crate::{budget::format_rupees, types::TripRequest};

/// System message sent ahead of every itinerary prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are a professional travel planner.";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Build the itinerary prompt for a trip.
///
/// The output depends only on its arguments, so identical requests always
/// produce identical prompts.
pub fn render_itinerary_prompt(request: &TripRequest, budget_per_person: i64) -> String {
    let destination = &request.destination;
    let departure = &request.departure_city;
    let duration = request.duration_days;
    let prefs_line = request
        .preferences()
        .map(|prefs| format!("Preferences: {prefs}"))
        .unwrap_or_default();

    format!(
        "You are an expert Indian travel planner for budget-savvy college students.
Create a {duration}-day trip plan for:
• Destination: {destination}, India
• From: {departure}
• Budget/person: ₹{budget} | Group: {group} students | Style: {style}
{prefs_line}

Format your response as follows:

## 🚀 TRIP OVERVIEW
(Best route from {departure}, key highlights, one-line cost summary)

## 📅 DAY-BY-DAY ITINERARY
For each Day 1 to Day {duration}:
### Day X — [Theme]
**Morning:** activity + cost
**Afternoon:** activity + lunch spot + cost
**Evening:** activity + dinner spot + cost
**Stay:** budget accommodation + INR/night

## 💰 BUDGET BREAKDOWN (per person)
| Category | Cost (₹) |
|---|---|
| Transport | ₹X |
| Accommodation | ₹X |
| Food | ₹X |
| Activities | ₹X |
| Misc | ₹X |
| **TOTAL** | **₹X** |

## 🎒 PACKING LIST
(8 items for {destination})

## 💡 STUDENT MONEY HACKS
(5 tips to save money at {destination})

## ⚠️ SAFETY TIPS
(3 key tips)

Be friendly, use emojis, reference real Indian places and prices in INR (2024-25 rates).
",
        budget = format_rupees(budget_per_person),
        group = request.group_size,
        style = request.travel_style,
    )
}
