use thiserror::Error;

/// Errors raised while resolving the flux configuration at setup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The configured scheme name does not match any dispatched solver.
    #[error("inviscid flux type `{name}` is not recognized; choose 'roe' or 'ausm'")]
    UnknownScheme { name: String },

    /// A tuning parameter is outside its valid domain.
    #[error("invalid `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors raised by checked construction of a primitive state.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StateError {
    #[error("density must be positive, got {0}")]
    NonPositiveDensity(f64),

    #[error("pressure must be positive, got {0}")]
    NonPositivePressure(f64),

    #[error("turbulent kinetic energy must not be negative, got {0}")]
    NegativeTke(f64),

    #[error("specific turbulent dissipation must be positive, got {0}")]
    NonPositiveOmega(f64),

    #[error("velocity component is not finite: {0}")]
    NonFiniteVelocity(f64),
}
