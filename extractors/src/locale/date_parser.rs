use chrono::{Days, Months, NaiveDate};

use super::fold;

/// Month number for a French month name or its usual abbreviation
pub fn french_month(name: &str) -> Option<u32> {
    let folded = fold(name.trim_end_matches('.'));

    let month = match folded.as_str() {
        "janvier" | "janv" => 1,
        "fevrier" | "fevr" | "fev" => 2,
        "mars" => 3,
        "avril" | "avr" => 4,
        "mai" => 5,
        "juin" => 6,
        "juillet" | "juil" => 7,
        "aout" => 8,
        "septembre" | "sept" => 9,
        "octobre" | "oct" => 10,
        "novembre" | "nov" => 11,
        "decembre" | "dec" => 12,
        _ => return None,
    };

    Some(month)
}

/// Build a date from the `day`, `month name` and `year` pieces of a date token
pub fn parse_date_parts(day: &str, month_name: &str, year: &str) -> Option<NaiveDate> {
    let day: u32 = day.parse().ok()?;
    let month = french_month(month_name)?;
    let year: i32 = year.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a date written as `3 janvier 2024`
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    let mut parts = token.split_whitespace();
    let day = parts.next()?;
    let month = parts.next()?;
    let year = parts.next()?;

    if parts.next().is_some() {
        return None;
    }

    parse_date_parts(day, month, year)
}

/// Unit of a relative time expression such as `il y a 3 jours`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    pub fn from_word(word: &str) -> Option<Self> {
        match fold(word).as_str() {
            "jour" | "jours" => Some(TimeUnit::Day),
            "semaine" | "semaines" => Some(TimeUnit::Week),
            "mois" => Some(TimeUnit::Month),
            "an" | "ans" | "annee" | "annees" => Some(TimeUnit::Year),
            _ => None,
        }
    }
}

/// Parse the count of a relative time expression: digits, or `un`/`une` for one
pub fn parse_relative_count(raw: &str) -> Option<u32> {
    match fold(raw).as_str() {
        "un" | "une" => Some(1),
        digits if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
            Some(digits.parse().unwrap_or(u32::MAX))
        }
        _ => None,
    }
}

/// Subtract `count` units from `reference`.
///
/// A month is a calendar month, not 30 days: 15 June minus one month is 15 May. Months
/// and years clamp the day to the end of shorter months (31 March minus one month is
/// 28/29 February). Offsets reaching past the
/// representable range resolve to `NaiveDate::MIN`.
pub fn resolve_relative(reference: NaiveDate, count: u32, unit: TimeUnit) -> NaiveDate {
    let resolved = match unit {
        TimeUnit::Day => reference.checked_sub_days(Days::new(u64::from(count))),
        TimeUnit::Week => reference.checked_sub_days(Days::new(u64::from(count) * 7)),
        TimeUnit::Month => reference.checked_sub_months(Months::new(count)),
        TimeUnit::Year => count
            .checked_mul(12)
            .and_then(|months| reference.checked_sub_months(Months::new(months))),
    };

    resolved.unwrap_or(NaiveDate::MIN)
}
