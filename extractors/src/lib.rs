//! Extractors Crate
//!
//! Turns pasted marketplace text into typed records and derives display metrics from
//! them. Record types and the [`TextExtractor`] trait live in the `shared-types` crate.
//!
//! # Available Extractors
//!
//! - `ProfileExtractor`: shop name, follower counts, review events by country and date,
//!   items, ratings and location from a shop profile
//! - `TransactionExtractor`: balances, period and transactions from a wallet history
//!
//! Every field is read through a named [`FieldPattern`]; the French defaults can be
//! replaced through `ProfilePatternSources` / `TransactionPatternSources`.
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::analyze_transactions;
//!
//! let analysis = analyze_transactions("Vente produit X\n+25,00 €\n3 janvier 2024");
//! assert_eq!(analysis.history.transactions.len(), 1);
//! ```

pub mod analysis;
pub mod locale;
pub mod metrics;
pub mod pattern;
pub mod profile;
pub mod transactions;

// Re-export commonly used types
pub use analysis::{
    analyze_profile, analyze_profile_with, analyze_transactions, analyze_transactions_with,
};
pub use metrics::{profile_metrics, transaction_metrics};
pub use pattern::{FieldPattern, PatternError};
pub use profile::{parse_profile, ProfileExtractor, ProfilePatternSources, ProfilePatterns};
pub use transactions::{
    parse_transactions, KeywordRule, TransactionExtractor, TransactionPatternSources,
    TransactionPatterns,
};

// Re-export the extractor trait from shared-types for convenience
pub use shared_types::TextExtractor;
