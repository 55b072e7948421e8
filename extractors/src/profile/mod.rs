mod patterns;

pub use patterns::{country_for_thanks, ProfilePatternSources, ProfilePatterns};

use chrono::NaiveDate;
use shared_types::{
    AnalysisKind, ProfileRecord, ProfileStats, Ratings, SalesSummary, ShopItem, TextExtractor,
};
use std::sync::Arc;
use tracing::debug;

use crate::locale::{
    normalize_text, parse_amount, parse_integer, parse_relative_count, resolve_relative,
    TimeUnit,
};
use crate::pattern::FieldPattern;

/// Extracts a [`ProfileRecord`] from pasted shop-profile text.
///
/// Relative review dates (`il y a 2 jours`) are resolved against `reference_date`, so
/// the same text and reference date always produce the same record.
pub struct ProfileExtractor {
    patterns: Arc<ProfilePatterns>,
    reference_date: NaiveDate,
}

impl ProfileExtractor {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self::with_patterns(ProfilePatterns::french(), reference_date)
    }

    pub fn with_patterns(patterns: Arc<ProfilePatterns>, reference_date: NaiveDate) -> Self {
        Self {
            patterns,
            reference_date,
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn extract_shop_name(&self, text: &str) -> String {
        text.lines().next().map(str::trim).unwrap_or_default().to_string()
    }

    pub fn extract_stats(&self, text: &str) -> ProfileStats {
        ProfileStats {
            followers: self.first_count(&self.patterns.followers, text).unwrap_or(0),
            following: self.first_count(&self.patterns.following, text).unwrap_or(0),
        }
    }

    pub fn extract_sales(&self, text: &str) -> SalesSummary {
        let mut sales = SalesSummary {
            total: self.first_count(&self.patterns.sales_total, text).unwrap_or(0),
            ..Default::default()
        };

        for caps in self.patterns.review_event.captures_iter(text) {
            let (Some(count), Some(unit), Some(token)) = (caps.get(1), caps.get(2), caps.get(3))
            else {
                continue;
            };

            let Some(country) = country_for_thanks(token.as_str()) else {
                debug!("Skipping review with unknown thank-you token {:?}", token.as_str());
                continue;
            };
            let (Some(count), Some(unit)) = (
                parse_relative_count(count.as_str()),
                TimeUnit::from_word(unit.as_str()),
            ) else {
                debug!("Skipping review with unreadable time expression");
                continue;
            };

            let date = resolve_relative(self.reference_date, count, unit);
            debug!("Review event from {} on {}", country.name(), date);

            *sales.by_country.entry(country).or_insert(0) += 1;
            *sales.by_date.entry(date).or_insert(0) += 1;
        }

        sales
    }

    pub fn extract_items(&self, text: &str) -> Vec<ShopItem> {
        self.patterns
            .item
            .captures_iter(text)
            .filter_map(|caps| {
                let title = caps.get(1)?.as_str().trim().to_string();
                let price = parse_amount(caps.get(2)?.as_str())?;
                Some(ShopItem { title, price })
            })
            .collect()
    }

    pub fn extract_ratings(&self, text: &str) -> Ratings {
        let average = self
            .patterns
            .rating_average
            .first_capture(text)
            .and_then(|raw| raw.replace(',', ".").parse::<f64>().ok())
            .filter(|value| (0.0..=5.0).contains(value));

        Ratings {
            average,
            member_count: self.first_count(&self.patterns.sales_total, text).unwrap_or(0),
            automatic_count: self
                .first_count(&self.patterns.automatic_ratings, text)
                .unwrap_or(0),
        }
    }

    pub fn extract_location(&self, text: &str) -> String {
        self.patterns
            .location
            .first_capture(text)
            .map(|location| location.trim().to_string())
            .unwrap_or_default()
    }

    fn first_count(&self, pattern: &FieldPattern, text: &str) -> Option<u32> {
        pattern.first_capture(text).and_then(parse_integer)
    }
}

impl TextExtractor for ProfileExtractor {
    type Output = ProfileRecord;

    fn extract(&self, text: &str) -> ProfileRecord {
        let text = normalize_text(text);

        let record = ProfileRecord {
            shop_name: self.extract_shop_name(&text),
            stats: self.extract_stats(&text),
            sales: self.extract_sales(&text),
            items: self.extract_items(&text),
            ratings: self.extract_ratings(&text),
            location: self.extract_location(&text),
        };

        debug!(
            "Extracted profile {:?} as of {}: {} review events, {} items",
            record.shop_name,
            self.reference_date(),
            record.sales.event_count(),
            record.items.len()
        );

        record
    }

    fn kind(&self) -> AnalysisKind {
        AnalysisKind::Profile
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Parse profile text with the French default patterns
pub fn parse_profile(text: &str, reference_date: NaiveDate) -> ProfileRecord {
    ProfileExtractor::new(reference_date).extract(text)
}
