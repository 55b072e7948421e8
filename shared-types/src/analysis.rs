use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{ProfileMetrics, ProfileRecord, TransactionHistory, TransactionMetrics};

/// Request body for both analysis endpoints
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Profile record together with its derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct ProfileAnalysis {
    pub profile: ProfileRecord,
    pub metrics: ProfileMetrics,
}

/// Transaction history together with its derived metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct TransactionAnalysis {
    pub history: TransactionHistory,
    pub metrics: TransactionMetrics,
}
