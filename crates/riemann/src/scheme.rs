use std::{fmt, str::FromStr};

use fvflux_thermo::GasModel;
use nalgebra::Vector3;

use crate::{AusmSolver, ConfigError, FaceFlux, PrimitiveState, RiemannSolver, RoeSolver};

/// Inviscid flux schemes selectable by name.
///
/// Rusanov is not selectable here; it is constructed directly where needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FluxScheme {
    #[default]
    Roe,
    Ausm,
}

impl FluxScheme {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Roe => "roe",
            Self::Ausm => "ausm",
        }
    }
}

impl fmt::Display for FluxScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FluxScheme {
    type Err = ConfigError;

    /// Parses a scheme name. Matching is exact and case-sensitive.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "roe" => Ok(Self::Roe),
            "ausm" => Ok(Self::Ausm),
            _ => Err(ConfigError::UnknownScheme {
                name: name.to_owned(),
            }),
        }
    }
}

/// The configured inviscid flux, resolved once at setup.
///
/// Dispatch is a `match` on a closed set, so the per-face call is static.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InviscidFlux {
    Roe(RoeSolver),
    Ausm(AusmSolver),
}

impl InviscidFlux {
    /// Returns the scheme with default tuning parameters.
    #[must_use]
    pub fn with_defaults(scheme: FluxScheme) -> Self {
        match scheme {
            FluxScheme::Roe => Self::Roe(RoeSolver::default()),
            FluxScheme::Ausm => Self::Ausm(AusmSolver::default()),
        }
    }

    #[must_use]
    pub fn scheme(&self) -> FluxScheme {
        match self {
            Self::Roe(_) => FluxScheme::Roe,
            Self::Ausm(_) => FluxScheme::Ausm,
        }
    }
}

impl FromStr for InviscidFlux {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        name.parse().map(Self::with_defaults)
    }
}

impl RiemannSolver for InviscidFlux {
    #[inline]
    fn flux(
        &self,
        left: &PrimitiveState,
        right: &PrimitiveState,
        gas: GasModel<'_>,
        normal: &Vector3<f64>,
    ) -> FaceFlux {
        match self {
            Self::Roe(solver) => solver.flux(left, right, gas, normal),
            Self::Ausm(solver) => solver.flux(left, right, gas, normal),
        }
    }

    fn name(&self) -> &'static str {
        self.scheme().as_str()
    }
}
