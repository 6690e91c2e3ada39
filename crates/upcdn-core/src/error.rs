//! Error types module
//!
//! The transformation builder is deliberately permissive and never fails:
//! malformed operation sequences surface as a server-side error when the
//! resulting URL is fetched. The variants here cover the remaining failure
//! modes: configuration problems and the signer's missing-secret check.

/// Unified error type for the Upcdn client core.
#[derive(Debug, thiserror::Error)]
pub enum UpcdnError {
    #[error("Secret key is missing or empty")]
    MissingSecretKey,

    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl UpcdnError {
    /// Get the error type name for diagnostics
    pub fn error_type(&self) -> &'static str {
        match self {
            UpcdnError::MissingSecretKey => "MissingSecretKey",
            UpcdnError::MissingEnv(_) => "MissingEnv",
            UpcdnError::InvalidInput(_) => "InvalidInput",
        }
    }
}
