//! Data-parallel flux evaluation over many faces.

use fvflux_thermo::GasModel;
use nalgebra::Vector3;
use rayon::prelude::*;

use crate::{FaceFlux, PrimitiveState, RiemannSolver};

/// Reconstructed states on either side of one face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub left: PrimitiveState,
    pub right: PrimitiveState,
    /// Unit normal pointing from `left` to `right`.
    pub normal: Vector3<f64>,
}

impl Face {
    #[must_use]
    pub fn new(left: PrimitiveState, right: PrimitiveState, normal: Vector3<f64>) -> Self {
        Self {
            left,
            right,
            normal,
        }
    }
}

/// Evaluates `solver` on every face in parallel, preserving order.
///
/// The solver and gas closures are shared read-only by all worker threads.
pub fn evaluate_faces<S>(solver: &S, gas: GasModel<'_>, faces: &[Face]) -> Vec<FaceFlux>
where
    S: RiemannSolver + ?Sized,
{
    tracing::trace!(solver = solver.name(), faces = faces.len(), "evaluating faces");

    faces
        .par_iter()
        .map(|face| solver.flux(&face.left, &face.right, gas, &face.normal))
        .collect()
}

/// Returns the largest reported wave speed, or `None` if no face reports one.
#[must_use]
pub fn max_wave_speed(fluxes: &[FaceFlux]) -> Option<f64> {
    fluxes
        .par_iter()
        .filter_map(|face| face.max_wave_speed)
        .reduce_with(f64::max)
}
