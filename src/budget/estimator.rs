use super::rates::RateCard;
use crate::{
    catalogue::find_destination,
    types::{BudgetBreakdown, BudgetTier, TransportMode, TripRequest},
};
use tracing::debug;

/// Rule-based trip cost estimator.
///
/// Estimation never fails: unknown tiers, destinations and routes fall back to
/// the rate card's defaults. Input ranges are not checked here; see
/// [`TripRequest::validate`].
#[derive(Debug, Clone, Copy)]
pub struct BudgetEstimator<'a> {
    rates: &'a RateCard,
}

impl BudgetEstimator<'static> {
    /// Estimator over the built-in rate card.
    pub fn standard() -> Self {
        Self::new(RateCard::standard())
    }
}

impl Default for BudgetEstimator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> BudgetEstimator<'a> {
    pub fn new(rates: &'a RateCard) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateCard {
        self.rates
    }

    /// Estimate one trip.
    ///
    /// A tier label outside budget/mid/premium is priced entirely at budget
    /// rates, misc included. Amounts saturate at the `i64` bounds instead of
    /// overflowing.
    pub fn estimate(&self, request: &TripRequest) -> BudgetBreakdown {
        let tier_label = request.tier_label();
        let tier = BudgetTier::from_label(&tier_label);
        let rate_tier = tier.unwrap_or_default();
        let days = i64::from(request.duration_days);

        let accommodation = self.rates.accommodation.get(rate_tier).saturating_mul(days);
        let food = self.rates.food.get(rate_tier).saturating_mul(days);
        let local_transport = self.rates.local_transport.get(rate_tier).saturating_mul(days);

        let activity_daily = tier
            .zip(find_destination(&request.destination))
            .map(|(tier, dest)| dest.activity_daily(tier))
            .unwrap_or(self.rates.activity_fallback_daily);
        let activities = scale_percent(
            activity_daily.saturating_mul(days),
            self.rates.activity_share_percent,
        );

        let (intercity_transport, transport_mode) =
            self.intercity(&request.departure_city, &request.destination);

        let misc = self.rates.misc.get(rate_tier);

        let per_person_total = [food, local_transport, activities, intercity_transport, misc]
            .into_iter()
            .fold(accommodation, i64::saturating_add);
        let group_total = per_person_total.saturating_mul(i64::from(request.group_size));

        debug!(
            target: "tripsaver::budget",
            destination = %request.destination,
            tier = %tier_label,
            mode = %transport_mode,
            per_person_total,
            group_total,
            "estimated trip budget"
        );

        BudgetBreakdown {
            accommodation,
            food,
            local_transport,
            activities,
            intercity_transport,
            transport_mode,
            misc,
            per_person_total,
            group_total,
            duration: request.duration_days,
            group_size: request.group_size,
            tier: tier_label,
        }
    }

    /// Round-trip fare and the mode it came from.
    fn intercity(&self, origin: &str, destination: &str) -> (i64, TransportMode) {
        self.rates
            .route(origin, destination)
            .and_then(|route| route.preferred_fare())
            .map(|(mode, fare)| (fare.saturating_mul(2), mode))
            .unwrap_or((self.rates.intercity_fallback, TransportMode::Estimated))
    }
}

/// Estimate with the built-in rate card.
pub fn estimate_budget(request: &TripRequest) -> BudgetBreakdown {
    BudgetEstimator::standard().estimate(request)
}

/// `value * percent / 100`, rounded to the nearest rupee with halves away from zero.
fn scale_percent(value: i64, percent: i64) -> i64 {
    let scaled = value.saturating_mul(percent);
    scaled.saturating_add(scaled.signum() * 50) / 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::rates::RouteFare;

    fn rishikesh_trip() -> TripRequest {
        TripRequest::new("Rishikesh", 4, "budget", 3).with_departure_city("Delhi")
    }

    #[test]
    fn test_rishikesh_scenario() {
        let breakdown = estimate_budget(&rishikesh_trip());

        assert_eq!(breakdown.accommodation, 1800);
        assert_eq!(breakdown.food, 1000);
        assert_eq!(breakdown.local_transport, 400);
        assert_eq!(breakdown.activities, 800);
        assert_eq!(breakdown.intercity_transport, 800);
        assert_eq!(breakdown.transport_mode, TransportMode::Train);
        assert_eq!(breakdown.misc, 500);
        assert_eq!(breakdown.per_person_total, 5300);
        assert_eq!(breakdown.group_total, 15900);
        assert_eq!(breakdown.tier, "budget");
    }

    #[test]
    fn test_unknown_tier_uses_budget_rates_and_fallback_activity() {
        let request = TripRequest::new("Rishikesh", 2, "Luxury", 1);
        let breakdown = estimate_budget(&request);

        assert_eq!(breakdown.accommodation, 900);
        assert_eq!(breakdown.food, 500);
        assert_eq!(breakdown.local_transport, 200);
        assert_eq!(breakdown.activities, 240);
        assert_eq!(breakdown.misc, 500);
        assert_eq!(breakdown.tier, "luxury");
    }

    #[test]
    fn test_tier_is_case_insensitive() {
        let upper = estimate_budget(&TripRequest::new("Goa", 3, "PREMIUM", 2));
        let lower = estimate_budget(&TripRequest::new("Goa", 3, "premium", 2));
        assert_eq!(upper, lower);
        assert_eq!(upper.misc, 2000);
    }

    #[test]
    fn test_zero_and_negative_durations_do_not_panic() {
        let zero = estimate_budget(&TripRequest::new("Goa", 0, "mid", 2));
        assert_eq!(zero.accommodation, 0);
        assert_eq!(zero.activities, 0);
        assert_eq!(zero.per_person_total, zero.component_sum());

        let negative = estimate_budget(&TripRequest::new("Goa", -2, "mid", 2));
        assert_eq!(negative.accommodation, -2400);
        assert_eq!(negative.activities, -1200);
        assert_eq!(negative.group_total, negative.per_person_total * 2);
    }

    #[test]
    fn test_custom_rate_card() {
        let mut rates = RateCard::standard().clone();
        rates.routes = vec![RouteFare::new("Pune", "Goa", None, None, Some(2000))];
        rates.intercity_fallback = 999;
        let estimator = BudgetEstimator::new(&rates);

        let request = TripRequest::new("Goa", 1, "mid", 1).with_departure_city("Pune");
        let flight = estimator.estimate(&request);
        assert_eq!(flight.intercity_transport, 4000);
        assert_eq!(flight.transport_mode, TransportMode::Flight);

        let fallback = estimator.estimate(&TripRequest::new("Goa", 1, "mid", 1));
        assert_eq!(fallback.intercity_transport, 999);
        assert_eq!(fallback.transport_mode, TransportMode::Estimated);
    }

    #[test]
    fn test_scale_percent_rounding() {
        assert_eq!(scale_percent(2000, 40), 800);
        assert_eq!(scale_percent(1, 40), 0);
        assert_eq!(scale_percent(2, 40), 1);
        assert_eq!(scale_percent(-2, 40), -1);
        assert_eq!(scale_percent(5, 50), 3);
    }

    #[test]
    fn test_huge_rates_saturate_instead_of_overflowing() {
        let mut rates = RateCard::standard().clone();
        rates.accommodation.budget = 4_611_686_018_427_387_904;
        let estimator = BudgetEstimator::new(&rates);

        let breakdown = estimator.estimate(&TripRequest::new("Rishikesh", 3, "budget", 20));

        assert_eq!(breakdown.accommodation, i64::MAX);
        assert_eq!(breakdown.per_person_total, i64::MAX);
        assert_eq!(breakdown.group_total, i64::MAX);
        assert_eq!(breakdown.component_sum(), i64::MAX);
    }
}
