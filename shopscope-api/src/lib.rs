pub mod analysis;
pub mod config;
pub mod handlers;

pub use analysis::{AnalysisError, AnalysisState};
