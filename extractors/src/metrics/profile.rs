use rust_decimal::Decimal;
use shared_types::{
    ProfileMetrics, ProfileRecord, ProfileStats, Ratings, SalesSummary, ShopItem,
};

use super::transactions::saturating_add;

/// Weights of the quality score components. They sum to 1 so the score stays in 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityWeights {
    pub rating: f64,
    pub volume: f64,
    pub engagement: f64,
    pub velocity: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            rating: 0.5,
            volume: 0.2,
            engagement: 0.2,
            velocity: 0.1,
        }
    }
}

/// Days per velocity period
const VELOCITY_PERIOD_DAYS: f64 = 30.0;

/// Sales total at which the volume component saturates
const VOLUME_SATURATION: f64 = 100.0;

/// Velocity multiplier for the velocity component; 10 sales per 30 days saturates it
const VELOCITY_SCALE: f64 = 10.0;

pub fn profile_metrics(record: &ProfileRecord) -> ProfileMetrics {
    let sales_velocity = sales_velocity(&record.sales);
    let engagement_rate = engagement_rate(&record.stats, &record.sales);

    ProfileMetrics {
        avg_price: average_price(&record.items),
        sales_velocity,
        engagement_rate,
        quality_score: quality_score(
            &record.ratings,
            &record.sales,
            engagement_rate,
            sales_velocity,
            QualityWeights::default(),
        ),
    }
}

/// Mean item price rounded to the cent, zero without items
pub fn average_price(items: &[ShopItem]) -> Decimal {
    if items.is_empty() {
        return Decimal::ZERO;
    }

    let total = items
        .iter()
        .fold(Decimal::ZERO, |total, item| saturating_add(total, item.price));
    (total / Decimal::from(items.len())).round_dp(2)
}

/// Review events per 30 days between the oldest and newest review date, inclusive
pub fn sales_velocity(sales: &SalesSummary) -> f64 {
    let (Some((first, _)), Some((last, _))) =
        (sales.by_date.first_key_value(), sales.by_date.last_key_value())
    else {
        return 0.0;
    };

    let span_days = (*last - *first).num_days() + 1;
    f64::from(sales.event_count()) * VELOCITY_PERIOD_DAYS / span_days as f64
}

/// Share of sales among followers plus sales, as a percentage.
///
/// A shop with many followers per sale scores low; zero when both are zero.
pub fn engagement_rate(stats: &ProfileStats, sales: &SalesSummary) -> f64 {
    let total = f64::from(sales.total);
    let audience = total + f64::from(stats.followers);

    if audience == 0.0 {
        return 0.0;
    }

    100.0 * total / audience
}

/// Weighted composite of rating, sales volume, engagement and velocity, clamped to 0-100
pub fn quality_score(
    ratings: &Ratings,
    sales: &SalesSummary,
    engagement_rate: f64,
    sales_velocity: f64,
    weights: QualityWeights,
) -> f64 {
    let rating = ratings
        .average
        .map(|average| average / 5.0 * 100.0)
        .unwrap_or(0.0);
    let volume = f64::from(sales.total).min(VOLUME_SATURATION) / VOLUME_SATURATION * 100.0;
    let velocity = (sales_velocity * VELOCITY_SCALE).min(100.0);

    let score = weights.rating * rating
        + weights.volume * volume
        + weights.engagement * engagement_rate
        + weights.velocity * velocity;

    score.clamp(0.0, 100.0)
}
