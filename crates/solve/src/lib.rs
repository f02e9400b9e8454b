//! Scalar root finding for the `fvflux` workspace.
//!
//! Thermodynamic closures with temperature-dependent specific heats cannot be
//! inverted in closed form, so temperature is recovered from energy or
//! enthalpy by driving a residual to zero over a known bracket.

pub mod bisection;
