use thiserror::Error;

use crate::config::ConfigError;
use crate::traits::browser_driver::DriverError;

/// Custom error types for the Veritor system.
///
/// Verifier calls themselves never surface these: every collaborator
/// failure is folded into a failed [`Verdict`](crate::models::Verdict)
/// at the verifier boundary. These errors cover the plumbing around the
/// verifiers (configuration loading, driver setup, input files).
#[derive(Debug, Error)]
pub enum VeritorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Browser driver error: {0}")]
    Driver(#[from] DriverError),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type specific to Veritor operations
pub type VeritorResult<T> = Result<T, VeritorError>;
