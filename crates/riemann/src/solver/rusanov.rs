use fvflux_thermo::GasModel;
use nalgebra::Vector3;

use crate::{FaceFlux, FluxVector, PrimitiveState, RiemannSolver};

/// Sign applied to the spectral radius before it is combined with the fluxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpectralRadiusSign {
    /// Result is `0.5·(Fl + Fr − λ)`.
    #[default]
    Subtract,
    /// Result is `0.5·(Fl + Fr + λ)`, as needed when assembling implicit
    /// dissipation of the opposite sense.
    Add,
}

impl SpectralRadiusSign {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Subtract => Self::Add,
            Self::Add => Self::Subtract,
        }
    }

    fn factor(self) -> f64 {
        match self {
            Self::Subtract => 1.0,
            Self::Add => -1.0,
        }
    }
}

/// Local Lax-Friedrichs flux.
///
/// The spectral radius `λ = max(|Vn| + a)` over both sides is a scalar, and it
/// is subtracted from every component of the averaged physical flux:
///
/// ```text
/// F = 0.5·(Fl + Fr − λ)
/// ```
///
/// This differs from the textbook `0.5·(Fl + Fr − λ·(Ur − Ul))` and so does
/// not reproduce the physical flux for equal states. Callers that use it for
/// implicit dissipation rely on this exact arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RusanovSolver {
    sign: SpectralRadiusSign,
}

impl RusanovSolver {
    #[must_use]
    pub fn new(sign: SpectralRadiusSign) -> Self {
        Self { sign }
    }

    #[must_use]
    pub fn sign(&self) -> SpectralRadiusSign {
        self.sign
    }

    /// Returns `max(|Vn| + a)` over the two states.
    #[must_use]
    pub fn spectral_radius(
        left: &PrimitiveState,
        right: &PrimitiveState,
        gas: GasModel<'_>,
        normal: &Vector3<f64>,
    ) -> f64 {
        let radius = |state: &PrimitiveState| {
            state.normal_velocity(normal).abs() + state.speed_of_sound(gas)
        };
        radius(left).max(radius(right))
    }
}

impl RiemannSolver for RusanovSolver {
    fn flux(
        &self,
        left: &PrimitiveState,
        right: &PrimitiveState,
        gas: GasModel<'_>,
        normal: &Vector3<f64>,
    ) -> FaceFlux {
        let radius = Self::spectral_radius(left, right, gas, normal);
        let signed = self.sign.factor() * radius;

        let flux = 0.5
            * (FluxVector::physical(left, gas, normal) + FluxVector::physical(right, gas, normal)
                - signed);

        FaceFlux::new(flux, Some(radius))
    }

    fn name(&self) -> &'static str {
        "rusanov"
    }
}
