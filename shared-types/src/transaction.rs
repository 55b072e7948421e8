use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// Category of a wallet transaction, derived from its description
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionType {
    Sale,
    Expense,
    Transfer,
    Marketing,
    Other,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sale => "sale",
            TransactionType::Expense => "expense",
            TransactionType::Transfer => "transfer",
            TransactionType::Marketing => "marketing",
            TransactionType::Other => "other",
        }
    }
}

/// Single transaction extracted from a history listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct TransactionRecord {
    pub description: String,
    /// Positive for credits, negative for debits
    #[ts(type = "string")]
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Date span covered by a history, from every date token in the text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct Period {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct TransactionSummary {
    #[ts(type = "string")]
    pub initial_balance: Decimal,
    #[ts(type = "string")]
    pub final_balance: Decimal,
    pub period: Period,
}

/// Output of the transaction extractor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct TransactionHistory {
    pub summary: TransactionSummary,
    pub transactions: Vec<TransactionRecord>,
}

/// Aggregates over a list of [`TransactionRecord`]s
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct TransactionMetrics {
    #[ts(type = "string")]
    pub total_revenue: Decimal,
    #[ts(type = "string")]
    pub total_expenses: Decimal,
    #[ts(type = "string")]
    pub net_profit: Decimal,
    /// Signed sum per `YYYY-MM`
    #[ts(type = "Record<string, string>")]
    pub sales_by_period: BTreeMap<String, Decimal>,
    /// Debit magnitudes per transaction type
    #[ts(type = "Partial<Record<TransactionType, string>>")]
    pub expenses_by_category: BTreeMap<TransactionType, Decimal>,
    #[ts(type = "string")]
    pub average_order_value: Decimal,
}
