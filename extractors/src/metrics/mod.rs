//! Pure reductions from extracted records to display metrics.

mod profile;
mod transactions;

pub use profile::{
    average_price, engagement_rate, profile_metrics, quality_score, sales_velocity,
    QualityWeights,
};
pub use transactions::transaction_metrics;
