mod patterns;

pub use patterns::{KeywordRule, TransactionPatternSources, TransactionPatterns};

use rust_decimal::Decimal;
use shared_types::{
    AnalysisKind, Period, TextExtractor, TransactionHistory, TransactionRecord,
    TransactionSummary,
};
use std::sync::Arc;
use tracing::debug;

use crate::locale::{normalize_text, parse_amount, parse_date_parts, parse_date_token};
use crate::pattern::FieldPattern;

/// Extracts balances, period and transactions from a pasted wallet history
pub struct TransactionExtractor {
    patterns: Arc<TransactionPatterns>,
}

impl TransactionExtractor {
    pub fn new() -> Self {
        Self::with_patterns(TransactionPatterns::french())
    }

    pub fn with_patterns(patterns: Arc<TransactionPatterns>) -> Self {
        Self { patterns }
    }

    pub fn extract_summary(&self, text: &str) -> TransactionSummary {
        TransactionSummary {
            initial_balance: self
                .extract_balance(&self.patterns.initial_balance, text)
                .unwrap_or_default(),
            final_balance: self
                .extract_balance(&self.patterns.final_balance, text)
                .unwrap_or_default(),
            period: self.extract_period(text),
        }
    }

    /// Min and max over every date token in the text, `None` for both without dates
    pub fn extract_period(&self, text: &str) -> Period {
        let mut dates = self.patterns.date_token.captures_iter(text).filter_map(|caps| {
            parse_date_parts(
                caps.get(1)?.as_str(),
                caps.get(2)?.as_str(),
                caps.get(3)?.as_str(),
            )
        });

        let Some(first) = dates.next() else {
            return Period::default();
        };

        let (start, end) = dates.fold((first, first), |(start, end), date| {
            (start.min(date), end.max(date))
        });

        Period {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn extract_transactions(&self, text: &str) -> Vec<TransactionRecord> {
        let mut transactions = Vec::new();

        for caps in self.patterns.transaction.captures_iter(text) {
            let (Some(description), Some(amount), Some(date)) =
                (caps.get(1), caps.get(2), caps.get(3))
            else {
                continue;
            };

            let description = description.as_str().trim();
            let (Some(amount), Some(date)) = (
                parse_amount(amount.as_str()),
                parse_date_token(date.as_str()),
            ) else {
                debug!("Skipping malformed transaction group {:?}", description);
                continue;
            };

            let kind = self.patterns.classify(description);
            debug!("Transaction {:?} classified as {}", description, kind.as_str());

            transactions.push(TransactionRecord {
                description: description.to_string(),
                amount,
                date,
                kind,
            });
        }

        transactions
    }

    fn extract_balance(&self, pattern: &FieldPattern, text: &str) -> Option<Decimal> {
        pattern.first_capture(text).and_then(parse_amount)
    }
}

impl Default for TransactionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for TransactionExtractor {
    type Output = TransactionHistory;

    fn extract(&self, text: &str) -> TransactionHistory {
        let text = normalize_text(text);

        let history = TransactionHistory {
            summary: self.extract_summary(&text),
            transactions: self.extract_transactions(&text),
        };

        debug!(
            "Extracted {} transactions, period {:?} to {:?}",
            history.transactions.len(),
            history.summary.period.start,
            history.summary.period.end
        );

        history
    }

    fn kind(&self) -> AnalysisKind {
        AnalysisKind::Transactions
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Parse a transaction history with the French default patterns
pub fn parse_transactions(text: &str) -> TransactionHistory {
    TransactionExtractor::new().extract(text)
}
