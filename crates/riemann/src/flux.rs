use fvflux_thermo::GasModel;
use nalgebra::Vector3;

use crate::{
    ConservedState, PrimitiveState,
    vector::{StateVector, impl_vector_space},
};

/// Convective flux through a face, ordered like [`ConservedState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxVector(StateVector);

impl_vector_space!(FluxVector);

impl FluxVector {
    /// Returns the exact convective flux of a single state through a face.
    ///
    /// ```text
    /// F = ρ·Vn·[1, u, v, w, H, k, ω] + P·[0, nx, ny, nz, 0, 0, 0]
    /// ```
    ///
    /// `normal` must be a unit vector.
    #[must_use]
    pub fn physical(state: &PrimitiveState, gas: GasModel<'_>, normal: &Vector3<f64>) -> Self {
        let mass = state.rho() * state.normal_velocity(normal);
        let momentum = mass * state.velocity() + state.p() * normal;

        Self(StateVector::from([
            mass,
            momentum.x,
            momentum.y,
            momentum.z,
            mass * state.enthalpy(gas),
            mass * state.tke(),
            mass * state.omega(),
        ]))
    }

    /// Mass flux component.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn momentum(&self) -> Vector3<f64> {
        Vector3::new(self.0[1], self.0[2], self.0[3])
    }

    #[must_use]
    pub fn energy(&self) -> f64 {
        self.0[4]
    }
}

/// Subtracts a scalar from every component.
impl std::ops::Sub<f64> for FluxVector {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self(self.0.add_scalar(-rhs))
    }
}

impl From<FluxVector> for ConservedState {
    fn from(flux: FluxVector) -> Self {
        ConservedState::from(flux.into_inner())
    }
}

/// Numerical flux at one face together with the fastest wave speed the solver saw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFlux {
    pub flux: FluxVector,
    /// Largest signal speed at the face, for schemes that compute one.
    pub max_wave_speed: Option<f64>,
}

impl FaceFlux {
    #[must_use]
    pub fn new(flux: FluxVector, max_wave_speed: Option<f64>) -> Self {
        Self {
            flux,
            max_wave_speed,
        }
    }
}

/// Returns the change in physical flux between an original and an updated state.
///
/// Used to build matrix-free implicit updates without a full Riemann solve.
#[must_use]
pub fn convective_flux_update(
    state: &PrimitiveState,
    update: &PrimitiveState,
    gas: GasModel<'_>,
    normal: &Vector3<f64>,
) -> ConservedState {
    (FluxVector::physical(update, gas, normal) - FluxVector::physical(state, gas, normal)).into()
}
