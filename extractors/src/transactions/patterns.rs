use once_cell::sync::Lazy;
use serde::Deserialize;
use shared_types::TransactionType;
use std::sync::Arc;

use crate::pattern::{FieldPattern, PatternError};

/// Description keyword mapped to a transaction type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub kind: TransactionType,
}

impl KeywordRule {
    fn new(keyword: &str, kind: TransactionType) -> Self {
        Self {
            keyword: keyword.to_string(),
            kind,
        }
    }
}

/// Raw regex sources and classification rules for transaction histories
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransactionPatternSources {
    /// 1: amount
    pub initial_balance: String,
    /// 1: amount
    pub final_balance: String,
    /// 1: day, 2: month name, 3: year
    pub date_token: String,
    /// 1: description, 2: signed amount, 3: date
    pub transaction: String,
    /// Checked in order, first substring hit wins
    pub classification: Vec<KeywordRule>,
}

impl Default for TransactionPatternSources {
    fn default() -> Self {
        const AMOUNT: &str = r"[+\-−]?(?:\d{1,3}(?:[ \x{A0}\x{202F}]\d{3})+|\d+)(?:[.,]\d+)?";

        Self {
            initial_balance: format!(r"(?i)solde initial\s*:?\s*({AMOUNT})[ \t\x{{A0}}]*€"),
            final_balance: format!(r"(?i)solde final\s*:?\s*({AMOUNT})[ \t\x{{A0}}]*€"),
            date_token: r"\b(\d{1,2})[ \t\x{A0}]+(\p{L}+)\.?[ \t\x{A0}]+(\d{4})\b".to_string(),
            transaction: format!(
                r"(?m)^[ \t]*([^\n]*\S)[ \t]*\n[ \t]*({AMOUNT})[ \t\x{{A0}}]*€[ \t]*\n[ \t]*(\d{{1,2}}[ \t\x{{A0}}]+\p{{L}}+\.?[ \t\x{{A0}}]+\d{{4}})[ \t]*$"
            ),
            classification: vec![
                KeywordRule::new("Vente", TransactionType::Sale),
                KeywordRule::new("Commande", TransactionType::Expense),
                KeywordRule::new("Transfert", TransactionType::Transfer),
                KeywordRule::new("Boost", TransactionType::Marketing),
            ],
        }
    }
}

/// Compiled transaction-history patterns
#[derive(Debug, Clone)]
pub struct TransactionPatterns {
    pub initial_balance: FieldPattern,
    pub final_balance: FieldPattern,
    pub date_token: FieldPattern,
    pub transaction: FieldPattern,
    pub classification: Vec<KeywordRule>,
}

static FRENCH: Lazy<Arc<TransactionPatterns>> = Lazy::new(|| {
    Arc::new(
        TransactionPatterns::from_sources(&TransactionPatternSources::default())
            .expect("built-in transaction patterns compile"),
    )
});

impl TransactionPatterns {
    pub fn from_sources(sources: &TransactionPatternSources) -> Result<Self, PatternError> {
        Ok(Self {
            initial_balance: FieldPattern::new("initial_balance", &sources.initial_balance, 1)?,
            final_balance: FieldPattern::new("final_balance", &sources.final_balance, 1)?,
            date_token: FieldPattern::new("date_token", &sources.date_token, 3)?,
            transaction: FieldPattern::new("transaction", &sources.transaction, 3)?,
            classification: sources.classification.clone(),
        })
    }

    /// Shared, compiled French defaults
    pub fn french() -> Arc<Self> {
        FRENCH.clone()
    }

    /// Type for a description: first matching keyword, `Other` when none match
    pub fn classify(&self, description: &str) -> TransactionType {
        self.classification
            .iter()
            .find(|rule| description.contains(rule.keyword.as_str()))
            .map(|rule| rule.kind)
            .unwrap_or(TransactionType::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let patterns = TransactionPatterns::french();
        assert_eq!(patterns.classify("Vente produit X"), TransactionType::Sale);
        assert_eq!(patterns.classify("Commande #1234"), TransactionType::Expense);
        assert_eq!(patterns.classify("Transfert vers banque"), TransactionType::Transfer);
        assert_eq!(patterns.classify("Boost article"), TransactionType::Marketing);
        assert_eq!(patterns.classify("Remboursement"), TransactionType::Other);
    }

    #[test]
    fn test_classify_first_match_wins() {
        let patterns = TransactionPatterns::french();
        assert_eq!(
            patterns.classify("Commande annulée après Vente"),
            TransactionType::Sale
        );
        assert_eq!(
            patterns.classify("Boost suite à Commande"),
            TransactionType::Expense
        );
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        let patterns = TransactionPatterns::french();
        assert_eq!(patterns.classify("vente"), TransactionType::Other);
    }

    #[test]
    fn test_custom_rules() {
        let sources = TransactionPatternSources {
            classification: vec![KeywordRule::new("Remboursement", TransactionType::Sale)],
            ..Default::default()
        };
        let patterns = TransactionPatterns::from_sources(&sources).unwrap();
        assert_eq!(patterns.classify("Remboursement"), TransactionType::Sale);
        assert_eq!(patterns.classify("Vente"), TransactionType::Other);
    }

    #[test]
    fn test_sources_deserialize_with_defaults() {
        let sources: TransactionPatternSources = serde_json::from_str(
            r#"{"classification": [{"keyword": "Achat", "kind": "expense"}]}"#,
        )
        .unwrap();
        assert_eq!(sources.classification.len(), 1);
        assert_eq!(sources.classification[0].kind, TransactionType::Expense);
        assert!(TransactionPatterns::from_sources(&sources).is_ok());
    }
}
