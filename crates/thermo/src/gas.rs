use uom::si::{
    f64::ThermodynamicTemperature, specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::{
    CaloricallyPerfect, EquationOfState, IdealGas, PropertyError, ThermallyPerfect,
    ThermodynamicModel, units::SpecificGasConstant,
};

/// Borrowed pair of closures consulted by every flux evaluation.
///
/// Both references are shared and read-only, so a `GasModel` is `Copy` and
/// may be handed to any number of threads at once.
#[derive(Debug, Clone, Copy)]
pub struct GasModel<'a> {
    eos: &'a dyn EquationOfState,
    thermo: &'a dyn ThermodynamicModel,
}

impl<'a> GasModel<'a> {
    #[must_use]
    pub fn new(eos: &'a dyn EquationOfState, thermo: &'a dyn ThermodynamicModel) -> Self {
        Self { eos, thermo }
    }

    #[must_use]
    pub fn eos(&self) -> &'a dyn EquationOfState {
        self.eos
    }

    #[must_use]
    pub fn thermo(&self) -> &'a dyn ThermodynamicModel {
        self.thermo
    }
}

/// Owned closures, constructed once during setup.
#[derive(Debug)]
pub struct Gas {
    eos: Box<dyn EquationOfState>,
    thermo: Box<dyn ThermodynamicModel>,
}

impl Gas {
    #[must_use]
    pub fn new(eos: Box<dyn EquationOfState>, thermo: Box<dyn ThermodynamicModel>) -> Self {
        Self { eos, thermo }
    }

    /// Returns a borrowed view for flux evaluation.
    #[must_use]
    pub fn model(&self) -> GasModel<'_> {
        GasModel::new(self.eos.as_ref(), self.thermo.as_ref())
    }
}

/// Selects the caloric closure paired with the ideal gas equation of state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum ThermoConfig {
    /// Constant specific heats.
    #[default]
    CaloricallyPerfect,
    /// Temperature-dependent specific heats from one vibrational mode.
    ThermallyPerfect {
        /// Characteristic vibrational temperature, K.
        vibrational_temperature: f64,
        /// Reference temperature used for nondimensionalization, K.
        reference_temperature: f64,
    },
}

/// Setup-time description of the gas.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct GasConfig {
    /// Reference ratio of specific heats.
    pub gamma: f64,
    /// Specific gas constant, J/kg·K.
    pub gas_constant: f64,
    /// Caloric closure.
    pub thermo: ThermoConfig,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            gamma: 1.4,
            gas_constant: 287.058,
            thermo: ThermoConfig::CaloricallyPerfect,
        }
    }
}

impl GasConfig {
    /// Builds the closures described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if any parameter is outside its valid domain.
    pub fn build(&self) -> Result<Gas, PropertyError> {
        let eos = IdealGas::new(
            self.gamma,
            SpecificGasConstant::new::<joule_per_kilogram_kelvin>(self.gas_constant),
        )?;

        let thermo: Box<dyn ThermodynamicModel> = match self.thermo {
            ThermoConfig::CaloricallyPerfect => Box::new(CaloricallyPerfect::new(self.gamma)?),
            ThermoConfig::ThermallyPerfect {
                vibrational_temperature,
                reference_temperature,
            } => Box::new(ThermallyPerfect::from_dimensional(
                self.gamma,
                ThermodynamicTemperature::new::<kelvin>(vibrational_temperature),
                ThermodynamicTemperature::new::<kelvin>(reference_temperature),
            )?),
        };

        tracing::debug!(gamma = self.gamma, thermo = ?self.thermo, "built gas closures");

        Ok(Gas::new(Box::new(eos), thermo))
    }
}
