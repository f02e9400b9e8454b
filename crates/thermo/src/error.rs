use thiserror::Error;

/// Errors that may occur when building or evaluating thermodynamic closures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input values are invalid or inconsistent.
    ///
    /// Indicates that the inputs are physically invalid or outside the model's valid domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The calculation failed due to a numerical or internal error.
    ///
    /// For example, a temperature inversion that could not be bracketed.
    #[error("calculation error: {0}")]
    Calculation(String),
}
