use crate::PropertyError;

use super::{ThermodynamicModel, check_gamma};

/// A gas with constant specific heats.
///
/// In nondimensional form `cv = 1/(γ(γ−1))` and `cp = 1/(γ−1)`,
/// so that `γ·P/ρ = T` and `(γ−1)·h = a²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaloricallyPerfect {
    gamma: f64,
}

impl CaloricallyPerfect {
    /// Creates a calorically perfect model with the given ratio of specific heats.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] unless `gamma` is finite and greater than one.
    pub fn new(gamma: f64) -> Result<Self, PropertyError> {
        Ok(Self {
            gamma: check_gamma(gamma)?,
        })
    }

    /// Returns the constant ratio of specific heats.
    #[must_use]
    pub fn reference_gamma(&self) -> f64 {
        self.gamma
    }
}

impl ThermodynamicModel for CaloricallyPerfect {
    fn temperature_from_spec_energy(&self, spec_energy: f64) -> f64 {
        spec_energy / self.cv(0.0)
    }

    fn temperature_from_spec_enthalpy(&self, spec_enthalpy: f64) -> f64 {
        spec_enthalpy / self.cp(0.0)
    }

    fn spec_energy(&self, temperature: f64) -> f64 {
        self.cv(temperature) * temperature
    }

    fn spec_enthalpy(&self, temperature: f64) -> f64 {
        self.cp(temperature) * temperature
    }

    fn cv(&self, _temperature: f64) -> f64 {
        1.0 / (self.gamma * (self.gamma - 1.0))
    }

    fn cp(&self, _temperature: f64) -> f64 {
        1.0 / (self.gamma - 1.0)
    }

    fn gamma(&self, _temperature: f64) -> f64 {
        self.gamma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_invalid_gamma() {
        assert!(CaloricallyPerfect::new(1.0).is_err());
        assert!(CaloricallyPerfect::new(0.5).is_err());
        assert!(CaloricallyPerfect::new(f64::NAN).is_err());
        assert!(CaloricallyPerfect::new(1.4).is_ok());
    }

    #[test]
    fn specific_heats_for_air() {
        let air = CaloricallyPerfect::new(1.4).unwrap();

        // cv = 1/(1.4·0.4), cp = 1/0.4, and their ratio recovers γ.
        assert_relative_eq!(air.cv(300.0), 1.0 / 0.56, max_relative = 1e-14);
        assert_relative_eq!(air.cp(300.0), 2.5, max_relative = 1e-14);
        assert_relative_eq!(air.gamma(123.0), 1.4);
        assert_relative_eq!(air.cp(1.0) / air.cv(1.0), 1.4, max_relative = 1e-14);
    }

    #[test]
    fn energy_and_enthalpy_invert() {
        let air = CaloricallyPerfect::new(1.4).unwrap();
        let t = 1.7;

        let e = air.spec_energy(t);
        let h = air.spec_enthalpy(t);

        assert_relative_eq!(air.temperature_from_spec_energy(e), t, max_relative = 1e-14);
        assert_relative_eq!(air.temperature_from_spec_enthalpy(h), t, max_relative = 1e-14);

        // Nondimensional gas constant is 1/γ, so h − e = T/γ.
        assert_relative_eq!(h - e, t / 1.4, max_relative = 1e-12);
    }
}
