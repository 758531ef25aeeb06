use std::time::Duration;
use thiserror::Error;

/// Failure of a single translation call.
///
/// None of these are retried; the orchestrator reports them and exits.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Failed to reach translation service")]
    Http(#[from] reqwest::Error),

    #[error("Translation service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response from translation service: {0}")]
    MalformedResponse(String),

    #[error("Translation timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Failure reported by a non-HTTP translator.
    #[error("{0}")]
    Other(String),
}

/// Renders `error` followed by every underlying cause, separated by `: `.
pub fn error_chain(error: &TranslationError) -> String {
    anyhow::Chain::new(error)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}
