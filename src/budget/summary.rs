use crate::types::BudgetBreakdown;

/// Format a rupee amount with comma thousands separators (e.g. `15,900`).
pub fn format_rupees(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Generic ways for students to cut costs on any trip.
pub const MONEY_SAVING_TIPS: [&str; 5] = [
    "Book train on IRCTC 60 days ahead, when the cheapest fares are available",
    "Stay at Zostel or Moustache hostels for the cheapest beds",
    "Eat at dhabas & street stalls: same taste, 3× cheaper",
    "Travel midweek, weekend prices are always inflated",
    "Student ID cards can unlock 25-50% off at major monuments",
];

/// Whole-percent share of `total`, floored and capped at 100.
///
/// `None` when the total is not positive, since a share of it means nothing.
pub fn share_percent(amount: i64, total: i64) -> Option<i64> {
    if total <= 0 {
        return None;
    }
    let share = i128::from(amount) * 100 / i128::from(total);
    Some(share.clamp(0, 100) as i64)
}

/// Render a breakdown as the multi-line summary shown to students.
///
/// Each line item carries its share of the per-person total.
pub fn format_budget_summary(budget: &BudgetBreakdown) -> String {
    let total = budget.per_person_total;
    let item = |label: String, amount: i64| match share_percent(amount, total) {
        Some(share) => format!("{label}₹{} ({share}%)", format_rupees(amount)),
        None => format!("{label}₹{}", format_rupees(amount)),
    };

    let rule = "━".repeat(30);
    let lines = [
        format!("💰 BUDGET ESTIMATE ({} TIER)", budget.tier.to_uppercase()),
        rule.clone(),
        item(
            format!("  ✈️  Intercity Transport ({}): ", budget.transport_mode),
            budget.intercity_transport,
        ),
        item("  🚌  Local Transport:          ".to_string(), budget.local_transport),
        item("  🏨  Accommodation:            ".to_string(), budget.accommodation),
        item("  🍛  Food & Drinks:            ".to_string(), budget.food),
        item("  🎯  Activities & Entry:       ".to_string(), budget.activities),
        item("  🛍️  Shopping & Misc:          ".to_string(), budget.misc),
        rule,
        format!("  👤 Per Person Total:    ₹{}", format_rupees(total)),
        format!(
            "  👥 Group Total ({} pax): ₹{}",
            budget.group_size,
            format_rupees(budget.group_total)
        ),
    ];
    lines.join("\n")
}

/// The money-saving tips as a bulleted block.
pub fn format_money_saving_tips() -> String {
    std::iter::once("💡 Student Money-Saving Tips".to_string())
        .chain(MONEY_SAVING_TIPS.iter().map(|tip| format!("  ✅ {tip}")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{budget::estimate_budget, TripRequest};

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(0), "0");
        assert_eq!(format_rupees(800), "800");
        assert_eq!(format_rupees(5300), "5,300");
        assert_eq!(format_rupees(1234567), "1,234,567");
        assert_eq!(format_rupees(-15900), "-15,900");
    }

    #[test]
    fn test_summary_lists_every_line_item() {
        let breakdown = estimate_budget(&TripRequest::new("Rishikesh", 4, "budget", 3));
        let summary = format_budget_summary(&breakdown);

        assert!(summary.starts_with("💰 BUDGET ESTIMATE (BUDGET TIER)"));
        assert!(summary.contains("Intercity Transport (train): ₹800"));
        assert!(summary.contains("₹1,800"));
        assert!(summary.contains("₹5,300"));
        assert!(summary.contains("Group Total (3 pax): ₹15,900"));
        assert_eq!(summary.lines().count(), 11);
    }

    #[test]
    fn test_line_items_show_share_of_total() {
        let breakdown = estimate_budget(&TripRequest::new("Rishikesh", 4, "budget", 3));
        let summary = format_budget_summary(&breakdown);

        // 1800 of 5300 and 800 of 5300, floored
        assert!(summary.contains("₹1,800 (33%)"));
        assert!(summary.contains("Intercity Transport (train): ₹800 (15%)"));
        assert!(!summary.contains("₹5,300 ("));
    }

    #[test]
    fn test_share_percent_bounds() {
        assert_eq!(share_percent(500, 0), None);
        assert_eq!(share_percent(500, -10), None);
        assert_eq!(share_percent(-5, 100), Some(0));
        assert_eq!(share_percent(i64::MAX, 1), Some(100));
        assert_eq!(share_percent(1, 3), Some(33));
    }

    #[test]
    fn test_money_saving_tips_block() {
        let tips = format_money_saving_tips();
        assert_eq!(tips.lines().count(), MONEY_SAVING_TIPS.len() + 1);
        assert!(tips.contains("IRCTC"));
    }
}
