use crate::{AusmSolver, ConfigError, FluxScheme, InviscidFlux, RoeSolver};

/// Default threshold below which Harten's entropy fix modifies acoustic wave speeds.
pub const DEFAULT_ENTROPY_FIX: f64 = 0.1;

/// Default exponent of the pressure ratio in the AUSMPW+ weighting function.
pub const DEFAULT_PRESSURE_WEIGHT_EXPONENT: f64 = 3.0;

/// Setup-time selection and tuning of the inviscid flux.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct FluxConfig {
    /// Scheme name, `"roe"` or `"ausm"`.
    pub scheme: String,
    /// Harten entropy-fix threshold used by the Roe scheme.
    pub entropy_fix: f64,
    /// Pressure-weight exponent used by the AUSMPW+ scheme.
    pub pressure_weight_exponent: f64,
}

impl Default for FluxConfig {
    fn default() -> Self {
        Self {
            scheme: FluxScheme::Roe.to_string(),
            entropy_fix: DEFAULT_ENTROPY_FIX,
            pressure_weight_exponent: DEFAULT_PRESSURE_WEIGHT_EXPONENT,
        }
    }
}

impl FluxConfig {
    /// Resolves the configuration into a solver.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownScheme`] if the name is not recognized, or
    /// [`ConfigError::InvalidParameter`] if a tuning parameter is not
    /// strictly positive and finite.
    pub fn solver(&self) -> Result<InviscidFlux, ConfigError> {
        let scheme: FluxScheme = self.scheme.parse()?;
        let entropy_fix = positive("entropy_fix", self.entropy_fix)?;
        let exponent = positive("pressure_weight_exponent", self.pressure_weight_exponent)?;

        let solver = match scheme {
            FluxScheme::Roe => InviscidFlux::Roe(RoeSolver::new(entropy_fix)),
            FluxScheme::Ausm => InviscidFlux::Ausm(AusmSolver::new(exponent)),
        };

        tracing::debug!(
            %scheme,
            entropy_fix,
            pressure_weight_exponent = exponent,
            "selected inviscid flux"
        );

        Ok(solver)
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be positive and finite",
        })
    }
}
