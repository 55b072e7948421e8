//! Integration boundary between pasted text and the extractors.
//!
//! Extraction itself never fails; this layer rejects unusable input and turns an
//! unexpected fault inside the pipeline into a single generic failure, logging the
//! underlying cause. No partial results are returned.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::NaiveDate;
use extractors::{
    analyze_profile_with, analyze_transactions_with, PatternError, ProfileExtractor,
    ProfilePatterns, TransactionExtractor, TransactionPatterns,
};
use shared_types::{AnalysisKind, ErrorResponse, ProfileAnalysis, TransactionAnalysis};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::error;

use crate::config::ApiConfig;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Empty {0} input")]
    EmptyInput(AnalysisKind),

    #[error("{kind} input too short: {actual} characters, at least {min} required")]
    InputTooShort {
        kind: AnalysisKind,
        min: usize,
        actual: usize,
    },

    #[error("{0} analysis failed")]
    Failed(AnalysisKind),
}

impl AnalysisError {
    /// Message shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalysisError::EmptyInput(AnalysisKind::Profile) => {
                "Veuillez coller le contenu du profil"
            }
            AnalysisError::EmptyInput(AnalysisKind::Transactions) => {
                "Veuillez coller l'historique des transactions"
            }
            AnalysisError::InputTooShort { .. } => "Le contenu collé semble trop court",
            AnalysisError::Failed(AnalysisKind::Profile) => "Erreur lors de l'analyse du profil",
            AnalysisError::Failed(AnalysisKind::Transactions) => {
                "Erreur lors de l'analyse des transactions"
            }
        }
    }
}

impl ResponseError for AnalysisError {
    fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::EmptyInput(_) | AnalysisError::InputTooShort { .. } => {
                StatusCode::BAD_REQUEST
            }
            AnalysisError::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.user_message().to_string(),
        })
    }
}

/// Compiled patterns and validation settings shared by all requests.
///
/// Everything here is read-only; each analysis builds its own records.
pub struct AnalysisState {
    pub profile_patterns: Arc<ProfilePatterns>,
    pub transaction_extractor: TransactionExtractor,
    pub min_input_length: usize,
}

impl AnalysisState {
    pub fn new(min_input_length: usize) -> Self {
        Self {
            profile_patterns: ProfilePatterns::french(),
            transaction_extractor: TransactionExtractor::new(),
            min_input_length,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, PatternError> {
        let profile_patterns = match &config.profile_patterns {
            Some(sources) => Arc::new(ProfilePatterns::from_sources(sources)?),
            None => ProfilePatterns::french(),
        };
        let transaction_patterns = match &config.transaction_patterns {
            Some(sources) => Arc::new(TransactionPatterns::from_sources(sources)?),
            None => TransactionPatterns::french(),
        };

        Ok(Self {
            profile_patterns,
            transaction_extractor: TransactionExtractor::with_patterns(transaction_patterns),
            min_input_length: config.min_input_length(),
        })
    }

    pub fn analyze_profile(
        &self,
        text: &str,
        reference_date: NaiveDate,
    ) -> Result<ProfileAnalysis, AnalysisError> {
        let text = self.validate(AnalysisKind::Profile, text)?;
        let extractor =
            ProfileExtractor::with_patterns(self.profile_patterns.clone(), reference_date);

        guarded(AnalysisKind::Profile, || analyze_profile_with(&extractor, text))
    }

    pub fn analyze_transactions(&self, text: &str) -> Result<TransactionAnalysis, AnalysisError> {
        let text = self.validate(AnalysisKind::Transactions, text)?;

        guarded(AnalysisKind::Transactions, || {
            analyze_transactions_with(&self.transaction_extractor, text)
        })
    }

    fn validate<'t>(&self, kind: AnalysisKind, text: &'t str) -> Result<&'t str, AnalysisError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(AnalysisError::EmptyInput(kind));
        }

        let actual = text.chars().count();
        if actual < self.min_input_length {
            return Err(AnalysisError::InputTooShort {
                kind,
                min: self.min_input_length,
                actual,
            });
        }

        Ok(text)
    }
}

/// Run `analysis`, reporting a panic as [`AnalysisError::Failed`]
fn guarded<T>(kind: AnalysisKind, analysis: impl FnOnce() -> T) -> Result<T, AnalysisError> {
    catch_unwind(AssertUnwindSafe(analysis)).map_err(|payload| {
        let fault = payload
            .downcast_ref::<&str>()
            .map(|message| message.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown fault".to_string());

        error!("{} analysis failed: {}", kind, fault);
        AnalysisError::Failed(kind)
    })
}
