use once_cell::sync::Lazy;
use serde::Deserialize;
use shared_types::Country;
use std::sync::Arc;

use crate::pattern::{FieldPattern, PatternError};

/// Count with optional thousands groups: `12`, `1234`, `1 234`
const COUNT: &str = r"\d{1,3}(?:[ \x{A0}\x{202F}]\d{3})+|\d+";

/// Raw regex sources for every profile field.
///
/// Defaults target the French profile layout; any field may be overridden on its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfilePatternSources {
    /// 1: count
    pub followers: String,
    /// 1: count
    pub following: String,
    /// 1: count
    pub sales_total: String,
    /// 1: count, 2: unit, 3: thank-you token
    pub review_event: String,
    /// 1: title, 2: price
    pub item: String,
    /// 1: average out of 5
    pub rating_average: String,
    /// 1: count
    pub automatic_ratings: String,
    /// 1: location
    pub location: String,
}

impl Default for ProfilePatternSources {
    fn default() -> Self {
        Self {
            followers: format!(r"(?i)({COUNT})\s*abonn[ée]s?\b"),
            following: format!(r"(?i)({COUNT})\s*abonnements?\b"),
            sales_total: r"(?i)[ée]valuations des membres\s*\((\d+)\)".to_string(),
            review_event: r"(?is)il y a\s+(\d+|une?)\s+(jours?|semaines?|mois|ann[ée]es?|ans?)\b.*?(merci|thank\s+you|grazie|danke|gracias)".to_string(),
            item: r"(?m)^[ \t]*([^\n€]*\p{L}[^\n€]*?)[ \t]*\n[ \t]*((?:\d{1,3}(?:[ \x{A0}\x{202F}]\d{3})+|\d+)[.,]\d{2})[ \t\x{A0}]*€[ \t]*$".to_string(),
            rating_average: r"(?i)\b(\d(?:[.,]\d{1,2})?)\s*(?:/\s*5\b|[ée]toiles?)".to_string(),
            automatic_ratings: r"(?i)[ée]valuations automatiques\s*\((\d+)\)".to_string(),
            location: r"(?im)^[ \t]*(?:📍|localisation\s*:?)[ \t]*([^\n]*\S)[ \t]*$".to_string(),
        }
    }
}

/// Compiled profile field patterns
#[derive(Debug, Clone)]
pub struct ProfilePatterns {
    pub followers: FieldPattern,
    pub following: FieldPattern,
    pub sales_total: FieldPattern,
    pub review_event: FieldPattern,
    pub item: FieldPattern,
    pub rating_average: FieldPattern,
    pub automatic_ratings: FieldPattern,
    pub location: FieldPattern,
}

static FRENCH: Lazy<Arc<ProfilePatterns>> = Lazy::new(|| {
    Arc::new(
        ProfilePatterns::from_sources(&ProfilePatternSources::default())
            .expect("built-in profile patterns compile"),
    )
});

impl ProfilePatterns {
    pub fn from_sources(sources: &ProfilePatternSources) -> Result<Self, PatternError> {
        Ok(Self {
            followers: FieldPattern::new("followers", &sources.followers, 1)?,
            following: FieldPattern::new("following", &sources.following, 1)?,
            sales_total: FieldPattern::new("sales_total", &sources.sales_total, 1)?,
            review_event: FieldPattern::new("review_event", &sources.review_event, 3)?,
            item: FieldPattern::new("item", &sources.item, 2)?,
            rating_average: FieldPattern::new("rating_average", &sources.rating_average, 1)?,
            automatic_ratings: FieldPattern::new(
                "automatic_ratings",
                &sources.automatic_ratings,
                1,
            )?,
            location: FieldPattern::new("location", &sources.location, 1)?,
        })
    }

    /// Shared, compiled French defaults
    pub fn french() -> Arc<Self> {
        FRENCH.clone()
    }
}

/// Buyer country for the thank-you token captured in a review
pub fn country_for_thanks(token: &str) -> Option<Country> {
    let normalized = token
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    match normalized.as_str() {
        "merci" => Some(Country::France),
        "thank you" => Some(Country::UnitedKingdom),
        "grazie" => Some(Country::Italy),
        "danke" => Some(Country::Germany),
        "gracias" => Some(Country::Spain),
        _ => None,
    }
}
