use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod analysis;
pub mod extraction;
pub mod profile;
pub mod transaction;

pub use analysis::{AnalyzeRequest, ProfileAnalysis, TransactionAnalysis};
pub use extraction::{AnalysisKind, TextExtractor};
pub use profile::{
    Country, ProfileMetrics, ProfileRecord, ProfileStats, Ratings, SalesSummary, ShopItem,
};
pub use transaction::{
    Period, TransactionHistory, TransactionMetrics, TransactionRecord, TransactionSummary,
    TransactionType,
};

/// Error response for API endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct ErrorResponse {
    pub error: String,
}
