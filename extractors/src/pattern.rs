use regex::{Captures, Regex};

/// Errors raised while compiling a custom pattern set
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid regex pattern for {field}: {source}")]
    InvalidRegex {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern {field} needs {expected} capture groups, found {found}")]
    MissingGroups {
        field: String,
        expected: usize,
        found: usize,
    },
}

/// A named regex for one field of a record.
///
/// Every field the extractors read goes through one of these, so a pattern can be
/// replaced without touching the code that aggregates its matches.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    pub name: String,
    pub regex: Regex,
}

impl FieldPattern {
    /// Compile `pattern`, requiring at least `groups` capture groups
    pub fn new(name: &str, pattern: &str, groups: usize) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError::InvalidRegex {
            field: name.to_string(),
            source,
        })?;

        // captures_len counts the implicit whole-match group
        let found = regex.captures_len() - 1;
        if found < groups {
            return Err(PatternError::MissingGroups {
                field: name.to_string(),
                expected: groups,
                found,
            });
        }

        Ok(Self {
            name: name.to_string(),
            regex,
        })
    }

    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(text)
    }

    pub fn captures_iter<'r, 't>(
        &'r self,
        text: &'t str,
    ) -> regex::CaptureMatches<'r, 't> {
        self.regex.captures_iter(text)
    }

    /// First capture group of the first match
    pub fn first_capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.captures(text)?.get(1).map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_capture() {
        let pattern = FieldPattern::new("followers", r"(\d+)\s*Abonnés", 1).unwrap();
        assert_eq!(pattern.first_capture("12 Abonnés, 3 Abonnés"), Some("12"));
        assert_eq!(pattern.first_capture("aucun"), None);
    }

    #[test]
    fn test_invalid_regex() {
        let err = FieldPattern::new("broken", r"(\d+", 1).unwrap_err();
        assert!(matches!(err, PatternError::InvalidRegex { ref field, .. } if field == "broken"));
    }

    #[test]
    fn test_missing_groups() {
        let err = FieldPattern::new("review_event", r"(\d+) jours", 3).unwrap_err();
        match err {
            PatternError::MissingGroups {
                expected, found, ..
            } => {
                assert_eq!(expected, 3);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
