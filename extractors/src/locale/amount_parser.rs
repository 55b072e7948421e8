use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a French-formatted amount such as `12,50`, `+25.00`, `-1 234,56` or `−3,00`.
///
/// Thousands separators (space, no-break space, narrow no-break space) are dropped and a
/// comma decimal separator is normalized to a period.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let mut cleaned: String = raw
        .chars()
        .filter(|c| !is_group_separator(*c))
        .map(|c| match c {
            '−' => '-',
            ',' => '.',
            other => other,
        })
        .collect();

    if cleaned.starts_with('+') {
        cleaned.remove(0);
    }

    Decimal::from_str(&cleaned).ok()
}

/// Parse a count such as `12` or `1 234`. Values beyond `u32` saturate.
pub fn parse_integer(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().filter(|c| !is_group_separator(*c)).collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(digits.parse().unwrap_or(u32::MAX))
}

fn is_group_separator(c: char) -> bool {
    matches!(c, ' ' | '\u{a0}' | '\u{202f}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_and_period_agree() {
        assert_eq!(parse_amount("12,50"), Some(Decimal::new(1250, 2)));
        assert_eq!(parse_amount("12.50"), Some(Decimal::new(1250, 2)));
    }

    #[test]
    fn test_signs() {
        assert_eq!(parse_amount("+25,00"), Some(Decimal::new(2500, 2)));
        assert_eq!(parse_amount("-4,99"), Some(Decimal::new(-499, 2)));
        assert_eq!(parse_amount("−3,00"), Some(Decimal::new(-300, 2)));
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(parse_amount("1 234,56"), Some(Decimal::new(123456, 2)));
        assert_eq!(parse_amount("1\u{a0}000,00"), Some(Decimal::new(100000, 2)));
    }

    #[test]
    fn test_invalid_amount() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("1 234"), Some(1234));
        assert_eq!(parse_integer("99999999999"), Some(u32::MAX));
        assert_eq!(parse_integer("4a"), None);
        assert_eq!(parse_integer(""), None);
    }
}
