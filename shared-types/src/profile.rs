use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// Shop profile extracted from pasted profile text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
pub struct ProfileRecord {
    pub shop_name: String,
    pub stats: ProfileStats,
    pub sales: SalesSummary,
    pub items: Vec<ShopItem>,
    pub ratings: Ratings,
    /// Empty when the profile shows no location
    pub location: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct ProfileStats {
    pub followers: u32,
    pub following: u32,
}

/// Sales counters.
///
/// `total` is read from the ratings count shown on the profile, while `by_country` and
/// `by_date` count the individual review events found in the text. The two sources are
/// independent and need not agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct SalesSummary {
    pub total: u32,
    pub by_country: BTreeMap<Country, u32>,
    pub by_date: BTreeMap<NaiveDate, u32>,
}

impl SalesSummary {
    /// Number of review events that were counted
    pub fn event_count(&self) -> u32 {
        self.by_country.values().sum()
    }
}

/// Listed item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct ShopItem {
    pub title: String,
    #[ts(type = "string")]
    pub price: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
pub struct Ratings {
    /// Average star rating out of 5
    pub average: Option<f64>,
    pub member_count: u32,
    pub automatic_count: u32,
}

/// Buyer country, inferred from the language of the thank-you note in a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum Country {
    France,
    UnitedKingdom,
    Italy,
    Germany,
    Spain,
}

impl Country {
    pub fn name(&self) -> &'static str {
        match self {
            Country::France => "France",
            Country::UnitedKingdom => "United Kingdom",
            Country::Italy => "Italy",
            Country::Germany => "Germany",
            Country::Spain => "Spain",
        }
    }
}

/// Metrics derived from a [`ProfileRecord`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
pub struct ProfileMetrics {
    #[ts(type = "string")]
    pub avg_price: Decimal,
    /// Review events per 30 days over the observed date span
    pub sales_velocity: f64,
    /// Percentage, 0-100
    pub engagement_rate: f64,
    /// Composite score, 0-100
    pub quality_score: f64,
}
