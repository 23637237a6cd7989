use thiserror::Error;

/// Errors raised by the analysis and synthesis pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Startup-time misconfiguration (incomplete mood references, malformed
    /// lexicon). Fatal: the process must not serve requests.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A model collaborator could not be reached or failed to infer.
    /// Recoverable per call.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// An out-of-contract value reached a total-function component.
    /// Indicates an upstream invariant violation, not bad user input.
    #[error("validation error: {0}")]
    Validation(String),
}
