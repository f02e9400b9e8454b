//! Approximate Riemann solvers for the inviscid face flux.

mod ausm;
mod roe;
mod rusanov;

use fvflux_thermo::GasModel;
use nalgebra::Vector3;

use crate::{FaceFlux, PrimitiveState};

pub use ausm::AusmSolver;
pub use roe::{RoeSolver, entropy_fix};
pub use rusanov::{RusanovSolver, SpectralRadiusSign};

/// A numerical flux function for one face.
///
/// Implementations hold only immutable tuning parameters, so a single solver
/// may evaluate any number of faces concurrently.
pub trait RiemannSolver: Send + Sync {
    /// Computes the flux between `left` and `right` through a face with unit `normal`.
    ///
    /// The normal points from the left state towards the right state.
    fn flux(
        &self,
        left: &PrimitiveState,
        right: &PrimitiveState,
        gas: GasModel<'_>,
        normal: &Vector3<f64>,
    ) -> FaceFlux;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
