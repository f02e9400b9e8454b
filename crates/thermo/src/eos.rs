use std::fmt::Debug;

use uom::si::f64::{MassDensity, Pressure, ThermodynamicTemperature};

use crate::ThermodynamicModel;

/// Equation of state relating pressure, density, temperature, and energy.
///
/// Velocity arguments are magnitudes; energies are per unit mass.
/// Every method except [`pressure_dim`](Self::pressure_dim) works in
/// nondimensional quantities.
///
/// Implementations are immutable after construction and may be referenced
/// concurrently by any number of flux evaluations.
pub trait EquationOfState: Debug + Send + Sync {
    /// Returns pressure from density, total specific energy, and velocity magnitude.
    fn press_from_energy(
        &self,
        thermo: &dyn ThermodynamicModel,
        rho: f64,
        energy: f64,
        vel: f64,
    ) -> f64;

    /// Returns pressure from density and temperature.
    fn pressure_rt(&self, rho: f64, temperature: f64) -> f64;

    /// Returns the dimensional pressure for a dimensional density and temperature.
    fn pressure_dim(&self, rho: MassDensity, temperature: ThermodynamicTemperature) -> Pressure;

    /// Returns the specific internal energy at `temperature`.
    fn spec_energy(&self, thermo: &dyn ThermodynamicModel, temperature: f64) -> f64;

    /// Returns total specific energy from internal energy and velocity magnitude.
    fn energy(&self, spec_energy: f64, vel: f64) -> f64;

    /// Returns total specific enthalpy from temperature and velocity magnitude.
    fn enthalpy(&self, thermo: &dyn ThermodynamicModel, temperature: f64, vel: f64) -> f64;

    /// Returns the speed of sound from pressure and density.
    fn speed_of_sound(&self, pressure: f64, rho: f64) -> f64;

    /// Returns temperature from pressure and density.
    fn temperature(&self, pressure: f64, rho: f64) -> f64;
}
