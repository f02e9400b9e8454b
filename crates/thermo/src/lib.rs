//! Equation-of-state and thermodynamic closures for finite-volume flux evaluation.
//!
//! Two capability traits separate the physics a flux kernel needs:
//!
//! - [`EquationOfState`] relates pressure, density, temperature, and energy.
//! - [`ThermodynamicModel`] relates temperature to specific energy and
//!   enthalpy, and supplies the ratio of specific heats `Γ(T)`.
//!
//! Both are built once during setup (see [`GasConfig`]) and then borrowed
//! together as a [`GasModel`] by every face evaluation.

mod eos;
mod error;
mod gas;
mod ideal_gas;
mod model;

pub mod units;

pub use eos::EquationOfState;
pub use error::PropertyError;
pub use gas::{Gas, GasConfig, GasModel, ThermoConfig};
pub use ideal_gas::IdealGas;
pub use model::{CaloricallyPerfect, ThermallyPerfect, ThermodynamicModel};
