//! Primitive and conserved representations of the local flow state.
//!
//! Both are seven-component value types ordered as
//!
//! ```text
//! primitive: [ρ, u, v, w, P, k, ω]
//! conserved: [ρ, ρu, ρv, ρw, ρE, ρk, ρω]
//! ```
//!
//! Converting between them requires the gas closures, since total energy is
//! not defined by either state alone.

use fvflux_thermo::GasModel;
use nalgebra::Vector3;

use crate::{
    StateError,
    vector::{StateVector, impl_vector_space},
};

/// Density, velocity, pressure, and the two transported turbulence scalars.
///
/// Valid states have `ρ > 0`, `P > 0`, `k ≥ 0`, and `ω > 0`.
/// [`PrimitiveState::new`] does not check this; the flux kernel treats it as a
/// precondition and lets violations surface as non-finite results.
/// Use [`PrimitiveState::try_new`] where inputs are not already trusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveState(StateVector);

impl_vector_space!(PrimitiveState);

impl PrimitiveState {
    #[must_use]
    pub fn new(rho: f64, velocity: Vector3<f64>, pressure: f64, tke: f64, omega: f64) -> Self {
        Self(StateVector::from([
            rho, velocity.x, velocity.y, velocity.z, pressure, tke, omega,
        ]))
    }

    /// Creates a state after checking the physical invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] naming the first violated invariant.
    pub fn try_new(
        rho: f64,
        velocity: Vector3<f64>,
        pressure: f64,
        tke: f64,
        omega: f64,
    ) -> Result<Self, StateError> {
        if !(rho.is_finite() && rho > 0.0) {
            return Err(StateError::NonPositiveDensity(rho));
        }
        if let Some(&bad) = velocity.iter().find(|c| !c.is_finite()) {
            return Err(StateError::NonFiniteVelocity(bad));
        }
        if !(pressure.is_finite() && pressure > 0.0) {
            return Err(StateError::NonPositivePressure(pressure));
        }
        if !(tke.is_finite() && tke >= 0.0) {
            return Err(StateError::NegativeTke(tke));
        }
        if !(omega.is_finite() && omega > 0.0) {
            return Err(StateError::NonPositiveOmega(omega));
        }

        Ok(Self::new(rho, velocity, pressure, tke, omega))
    }

    /// Recovers the primitive state from conserved variables.
    #[must_use]
    pub fn from_conserved(cons: &ConservedState, gas: GasModel<'_>) -> Self {
        let rho = cons.rho();
        let velocity = cons.momentum() / rho;
        let energy = cons.rho_energy() / rho;
        let pressure = gas
            .eos()
            .press_from_energy(gas.thermo(), rho, energy, velocity.norm());

        Self::new(
            rho,
            velocity,
            pressure,
            cons.rho_tke() / rho,
            cons.rho_omega() / rho,
        )
    }

    #[must_use]
    pub fn rho(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn u(&self) -> f64 {
        self.0[1]
    }

    #[must_use]
    pub fn v(&self) -> f64 {
        self.0[2]
    }

    #[must_use]
    pub fn w(&self) -> f64 {
        self.0[3]
    }

    #[must_use]
    pub fn velocity(&self) -> Vector3<f64> {
        Vector3::new(self.0[1], self.0[2], self.0[3])
    }

    #[must_use]
    pub fn p(&self) -> f64 {
        self.0[4]
    }

    /// Turbulent kinetic energy `k`.
    #[must_use]
    pub fn tke(&self) -> f64 {
        self.0[5]
    }

    /// Specific turbulent dissipation `ω`.
    #[must_use]
    pub fn omega(&self) -> f64 {
        self.0[6]
    }

    /// Velocity component along `normal`.
    #[must_use]
    pub fn normal_velocity(&self, normal: &Vector3<f64>) -> f64 {
        self.velocity().dot(normal)
    }

    #[must_use]
    pub fn temperature(&self, gas: GasModel<'_>) -> f64 {
        gas.eos().temperature(self.p(), self.rho())
    }

    /// Total specific energy `E = e + |V|²/2`.
    #[must_use]
    pub fn energy(&self, gas: GasModel<'_>) -> f64 {
        let eos = gas.eos();
        let spec_energy = eos.spec_energy(gas.thermo(), self.temperature(gas));
        eos.energy(spec_energy, self.velocity().norm())
    }

    /// Total specific enthalpy `H = h + |V|²/2`.
    #[must_use]
    pub fn enthalpy(&self, gas: GasModel<'_>) -> f64 {
        gas.eos()
            .enthalpy(gas.thermo(), self.temperature(gas), self.velocity().norm())
    }

    /// Speed of sound `sqrt(Γ(T)·P/ρ)` using the thermodynamic model's `Γ`.
    #[must_use]
    pub fn speed_of_sound(&self, gas: GasModel<'_>) -> f64 {
        let gamma = gas.thermo().gamma(self.temperature(gas));
        (gamma * self.p() / self.rho()).sqrt()
    }

    #[must_use]
    pub fn to_conserved(&self, gas: GasModel<'_>) -> ConservedState {
        let rho = self.rho();
        let momentum = rho * self.velocity();

        ConservedState(StateVector::from([
            rho,
            momentum.x,
            momentum.y,
            momentum.z,
            rho * self.energy(gas),
            rho * self.tke(),
            rho * self.omega(),
        ]))
    }
}

/// Mass, momentum, total energy, and the two turbulence scalars per unit volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservedState(StateVector);

impl_vector_space!(ConservedState);

impl ConservedState {
    #[must_use]
    pub fn rho(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn momentum(&self) -> Vector3<f64> {
        Vector3::new(self.0[1], self.0[2], self.0[3])
    }

    /// Total energy per unit volume `ρE`.
    #[must_use]
    pub fn rho_energy(&self) -> f64 {
        self.0[4]
    }

    #[must_use]
    pub fn rho_tke(&self) -> f64 {
        self.0[5]
    }

    #[must_use]
    pub fn rho_omega(&self) -> f64 {
        self.0[6]
    }
}
