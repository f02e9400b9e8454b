use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{EquationOfState, PropertyError, ThermodynamicModel, units::SpecificGasConstant};

/// Ideal gas equation of state, `P = ρ·R·T`.
///
/// Nondimensionalized by a reference density, speed of sound, and temperature,
/// the gas constant becomes `1/γ_ref`, giving `P = ρ·T/γ_ref`.
/// The dimensional relation is kept for [`EquationOfState::pressure_dim`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGas {
    gamma: f64,
    gas_constant: SpecificGasConstant,
}

impl IdealGas {
    /// Creates an ideal gas with reference ratio of specific heats `gamma`
    /// and specific gas constant `gas_constant`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] if `gamma` is not greater than one
    /// or the gas constant is not strictly positive.
    pub fn new(gamma: f64, gas_constant: SpecificGasConstant) -> Result<Self, PropertyError> {
        let gamma = crate::model::check_gamma(gamma)?;
        let r = gas_constant.get::<joule_per_kilogram_kelvin>();
        if !(r.is_finite() && r > 0.0) {
            return Err(PropertyError::InvalidInput(format!(
                "specific gas constant must be finite and positive, got {r} J/kg·K"
            )));
        }

        Ok(Self {
            gamma,
            gas_constant,
        })
    }

    /// Returns the reference ratio of specific heats.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the specific gas constant.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        self.gas_constant
    }
}

impl EquationOfState for IdealGas {
    fn press_from_energy(
        &self,
        thermo: &dyn ThermodynamicModel,
        rho: f64,
        energy: f64,
        vel: f64,
    ) -> f64 {
        let spec_energy = energy - 0.5 * vel * vel;
        let temperature = thermo.temperature_from_spec_energy(spec_energy);
        self.pressure_rt(rho, temperature)
    }

    fn pressure_rt(&self, rho: f64, temperature: f64) -> f64 {
        temperature * rho / self.gamma
    }

    /// Computes pressure with `P = ρ·R·T`.
    fn pressure_dim(&self, rho: MassDensity, temperature: ThermodynamicTemperature) -> Pressure {
        let rho = rho.get::<kilogram_per_cubic_meter>();
        let r = self.gas_constant.get::<joule_per_kilogram_kelvin>();
        let t = temperature.get::<kelvin>();

        Pressure::new::<pascal>(rho * r * t)
    }

    fn spec_energy(&self, thermo: &dyn ThermodynamicModel, temperature: f64) -> f64 {
        thermo.spec_energy(temperature)
    }

    fn energy(&self, spec_energy: f64, vel: f64) -> f64 {
        spec_energy + 0.5 * vel * vel
    }

    fn enthalpy(&self, thermo: &dyn ThermodynamicModel, temperature: f64, vel: f64) -> f64 {
        thermo.spec_enthalpy(temperature) + 0.5 * vel * vel
    }

    fn speed_of_sound(&self, pressure: f64, rho: f64) -> f64 {
        (self.gamma * pressure / rho).sqrt()
    }

    fn temperature(&self, pressure: f64, rho: f64) -> f64 {
        pressure * self.gamma / rho
    }
}
