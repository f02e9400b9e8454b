//! Inviscid face fluxes for a finite-volume compressible flow solver.
//!
//! Given the reconstructed [`PrimitiveState`] on each side of a face, the gas
//! closures, and the unit face normal, a [`RiemannSolver`] returns the
//! numerical [`FluxVector`] through the face:
//!
//! - [`RoeSolver`]: flux-difference splitting with Harten's entropy fix.
//! - [`AusmSolver`]: AUSMPW+ flux-vector splitting.
//! - [`RusanovSolver`]: local Lax-Friedrichs with a scalar spectral radius.
//!
//! The scheme is chosen once at setup from a [`FluxConfig`]; an unknown name
//! is reported as [`ConfigError::UnknownScheme`]. The per-face path is
//! infallible and allocation-free.
//!
//! ```
//! use fvflux_riemann::{FluxConfig, PrimitiveState, RiemannSolver};
//! use fvflux_thermo::GasConfig;
//! use nalgebra::Vector3;
//!
//! let gas = GasConfig::default().build()?;
//! let solver = FluxConfig::default().solver()?;
//!
//! let left = PrimitiveState::new(1.0, Vector3::new(0.5, 0.0, 0.0), 0.7, 0.0, 1.0);
//! let right = PrimitiveState::new(0.9, Vector3::new(0.4, 0.0, 0.0), 0.6, 0.0, 1.0);
//!
//! let face = solver.flux(&left, &right, gas.model(), &Vector3::x());
//! assert!(face.flux.mass() > 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod average;
mod batch;
mod config;
mod error;
mod flux;
mod scheme;
mod solver;
mod state;
mod vector;

pub use average::roe_average;
pub use batch::{Face, evaluate_faces, max_wave_speed};
pub use config::{DEFAULT_ENTROPY_FIX, DEFAULT_PRESSURE_WEIGHT_EXPONENT, FluxConfig};
pub use error::{ConfigError, StateError};
pub use flux::{FaceFlux, FluxVector, convective_flux_update};
pub use scheme::{FluxScheme, InviscidFlux};
pub use solver::{
    AusmSolver, RiemannSolver, RoeSolver, RusanovSolver, SpectralRadiusSign, entropy_fix,
};
pub use state::{ConservedState, PrimitiveState};
pub use vector::{NUM_VARS, StateVector};
