use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Core trait that all text extractors implement.
///
/// Extraction is total: malformed or partial input yields a record populated with
/// zero/empty defaults rather than an error.
pub trait TextExtractor {
    type Output;

    /// Extract a typed record from pasted text
    fn extract(&self, text: &str) -> Self::Output;

    /// Which analysis this extractor feeds
    fn kind(&self) -> AnalysisKind;

    /// Get extractor version for tracking
    fn version(&self) -> String {
        "1.0.0".to_string()
    }
}

/// The two text layouts understood by the analyzers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    Profile,
    Transactions,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Profile => "profile",
            AnalysisKind::Transactions => "transactions",
        }
    }
}

impl std::fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
