mod calorically_perfect;
mod thermally_perfect;

use std::fmt::Debug;

pub use calorically_perfect::CaloricallyPerfect;
pub use thermally_perfect::ThermallyPerfect;

/// Caloric closure relating temperature to specific energy and enthalpy.
///
/// All quantities are nondimensional: temperatures are scaled so that
/// `T = γ_ref·P/ρ`, and energies by the square of the reference speed of sound.
///
/// Implementations are stateless after construction and are shared read-only
/// across every flux evaluation, hence the `Send + Sync` bound.
pub trait ThermodynamicModel: Debug + Send + Sync {
    /// Returns the temperature at which the specific internal energy equals `spec_energy`.
    fn temperature_from_spec_energy(&self, spec_energy: f64) -> f64;

    /// Returns the temperature at which the specific enthalpy equals `spec_enthalpy`.
    fn temperature_from_spec_enthalpy(&self, spec_enthalpy: f64) -> f64;

    /// Returns the specific internal energy at `temperature`.
    fn spec_energy(&self, temperature: f64) -> f64;

    /// Returns the specific enthalpy at `temperature`.
    fn spec_enthalpy(&self, temperature: f64) -> f64;

    /// Returns the specific heat at constant volume.
    fn cv(&self, temperature: f64) -> f64;

    /// Returns the specific heat at constant pressure.
    fn cp(&self, temperature: f64) -> f64;

    /// Returns the ratio of specific heats `Γ = cp/cv` at `temperature`.
    fn gamma(&self, temperature: f64) -> f64 {
        self.cp(temperature) / self.cv(temperature)
    }
}

/// Checks that a reference ratio of specific heats is usable.
pub(crate) fn check_gamma(gamma: f64) -> Result<f64, crate::PropertyError> {
    if gamma.is_finite() && gamma > 1.0 {
        Ok(gamma)
    } else {
        Err(crate::PropertyError::InvalidInput(format!(
            "ratio of specific heats must be finite and greater than one, got {gamma}"
        )))
    }
}
