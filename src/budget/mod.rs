//! Deterministic trip cost estimation over static rate tables.

pub mod estimator;
pub mod rates;
pub mod summary;

pub use estimator::{estimate_budget, BudgetEstimator};
pub use rates::{RateCard, RouteFare};
pub use summary::{
    format_budget_summary, format_money_saving_tips, format_rupees, share_percent,
    MONEY_SAVING_TIPS,
};
