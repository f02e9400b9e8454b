use fvflux_solve::bisection;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::PropertyError;

use super::{ThermodynamicModel, check_gamma};

/// A gas whose specific heats vary with temperature through one harmonic
/// vibrational mode.
///
/// With nondimensional gas constant `R = 1/γ` and translational-rotational
/// degrees of freedom `n = 1/(γ−1)`:
///
/// ```text
/// e(T)  = R·(n·T + θ/(exp(θ/T) − 1))
/// h(T)  = e(T) + R·T
/// cv(T) = R·(n + (θ/T)²·exp(θ/T)/(exp(θ/T) − 1)²)
/// ```
///
/// where `θ` is the vibrational temperature scaled by the reference temperature.
/// At low temperature the mode is frozen and `Γ` tends to the reference `γ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermallyPerfect {
    gamma: f64,
    vib_temperature: f64,
    inversion: bisection::Config,
}

impl ThermallyPerfect {
    /// Creates a thermally perfect model.
    ///
    /// `vib_temperature` is the nondimensional characteristic vibrational temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] if `gamma` is not greater than one
    /// or `vib_temperature` is not strictly positive.
    pub fn new(gamma: f64, vib_temperature: f64) -> Result<Self, PropertyError> {
        let gamma = check_gamma(gamma)?;
        if !(vib_temperature.is_finite() && vib_temperature > 0.0) {
            return Err(PropertyError::InvalidInput(format!(
                "vibrational temperature must be finite and positive, got {vib_temperature}"
            )));
        }

        Ok(Self {
            gamma,
            vib_temperature,
            inversion: bisection::Config::default(),
        })
    }

    /// Creates a model from a dimensional vibrational temperature and the
    /// reference temperature used for nondimensionalization.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] if either temperature is not
    /// strictly positive or `gamma` is invalid.
    pub fn from_dimensional(
        gamma: f64,
        vib_temperature: ThermodynamicTemperature,
        reference_temperature: ThermodynamicTemperature,
    ) -> Result<Self, PropertyError> {
        let t_ref = reference_temperature.get::<kelvin>();
        if !(t_ref.is_finite() && t_ref > 0.0) {
            return Err(PropertyError::InvalidInput(format!(
                "reference temperature must be finite and positive, got {t_ref} K"
            )));
        }

        Self::new(gamma, vib_temperature.get::<kelvin>() / t_ref)
    }

    /// Returns a copy that uses `config` when inverting energy or enthalpy.
    #[must_use]
    pub fn with_inversion(self, config: bisection::Config) -> Self {
        Self {
            inversion: config,
            ..self
        }
    }

    /// Returns the nondimensional vibrational temperature.
    #[must_use]
    pub fn vib_temperature(&self) -> f64 {
        self.vib_temperature
    }

    fn gas_constant(&self) -> f64 {
        1.0 / self.gamma
    }

    fn translational_dof(&self) -> f64 {
        1.0 / (self.gamma - 1.0)
    }

    fn vib_energy(&self, temperature: f64) -> f64 {
        self.vib_temperature / (self.vib_temperature / temperature).exp_m1()
    }

    /// Solves `target = f(T)` on `[0, upper]`, where `f` is increasing and `f(0) = 0`.
    fn invert(&self, property: &'static str, target: f64, upper: f64, f: impl Fn(f64) -> f64) -> f64 {
        if !(target.is_finite() && target > 0.0) {
            tracing::warn!(property, target, "cannot invert a non-positive property");
            return f64::NAN;
        }

        match bisection::solve(|t| f(t) - target, [0.0, upper], &self.inversion) {
            Ok(solution) => {
                if !solution.is_converged() {
                    tracing::warn!(
                        property,
                        target,
                        residual = solution.residual,
                        "temperature inversion stopped at the iteration limit"
                    );
                }
                solution.x
            }
            Err(error) => {
                tracing::warn!(property, target, %error, "temperature inversion failed");
                f64::NAN
            }
        }
    }
}

impl ThermodynamicModel for ThermallyPerfect {
    fn temperature_from_spec_energy(&self, spec_energy: f64) -> f64 {
        // The vibrational term is non-negative, so the frozen-mode temperature bounds the root.
        let upper = spec_energy / (self.gas_constant() * self.translational_dof());
        self.invert("specific energy", spec_energy, upper, |t| self.spec_energy(t))
    }

    fn temperature_from_spec_enthalpy(&self, spec_enthalpy: f64) -> f64 {
        let upper = spec_enthalpy / (self.gas_constant() * (self.translational_dof() + 1.0));
        self.invert("specific enthalpy", spec_enthalpy, upper, |t| {
            self.spec_enthalpy(t)
        })
    }

    fn spec_energy(&self, temperature: f64) -> f64 {
        self.gas_constant() * (self.translational_dof() * temperature + self.vib_energy(temperature))
    }

    fn spec_enthalpy(&self, temperature: f64) -> f64 {
        self.spec_energy(temperature) + self.gas_constant() * temperature
    }

    fn cv(&self, temperature: f64) -> f64 {
        let x = self.vib_temperature / temperature;
        let decay = (-x).exp();
        let vib = x * x * decay / (1.0 - decay).powi(2);
        self.gas_constant() * (self.translational_dof() + vib)
    }

    fn cp(&self, temperature: f64) -> f64 {
        self.cv(temperature) + self.gas_constant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Air with θ = 3056 K referenced to 288.15 K.
    fn air() -> ThermallyPerfect {
        ThermallyPerfect::from_dimensional(
            1.4,
            ThermodynamicTemperature::new::<kelvin>(3056.0),
            ThermodynamicTemperature::new::<kelvin>(288.15),
        )
        .unwrap()
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(ThermallyPerfect::new(1.4, 0.0).is_err());
        assert!(ThermallyPerfect::new(1.4, -2.0).is_err());
        assert!(ThermallyPerfect::new(0.9, 10.0).is_err());
        assert!(
            ThermallyPerfect::from_dimensional(
                1.4,
                ThermodynamicTemperature::new::<kelvin>(3056.0),
                ThermodynamicTemperature::new::<kelvin>(0.0),
            )
            .is_err()
        );
    }

    #[test]
    fn vibrational_mode_is_frozen_at_low_temperature() {
        let model = air();

        assert_relative_eq!(model.gamma(0.05), 1.4, max_relative = 1e-9);
    }

    #[test]
    fn gamma_decreases_as_vibration_is_excited() {
        let model = air();
        // Fully excited limit: cp/cv = (n + 2)/(n + 1) with n = 2.5.
        let excited = 4.5 / 3.5;

        let mut previous = model.gamma(0.5);
        for t in [1.0, 2.0, 5.0, 10.0, 50.0] {
            let gamma = model.gamma(t);
            assert!(gamma < previous, "Γ({t}) = {gamma} did not decrease");
            assert!(gamma > excited);
            previous = gamma;
        }
    }

    #[test]
    fn cv_matches_energy_derivative() {
        let model = air();
        let t = 3.0;
        let dt = 1e-6;

        let derivative = (model.spec_energy(t + dt) - model.spec_energy(t - dt)) / (2.0 * dt);
        assert_relative_eq!(model.cv(t), derivative, max_relative = 1e-7);
    }

    #[test]
    fn energy_inversion_recovers_temperature() {
        let model = air();

        for t in [0.2, 1.0, 4.0, 25.0] {
            let e = model.spec_energy(t);
            assert_relative_eq!(model.temperature_from_spec_energy(e), t, max_relative = 1e-10);

            let h = model.spec_enthalpy(t);
            assert_relative_eq!(model.temperature_from_spec_enthalpy(h), t, max_relative = 1e-10);
        }
    }

    #[test]
    fn inversion_of_negative_energy_is_nan() {
        let model = air();

        assert!(model.temperature_from_spec_energy(-1.0).is_nan());
    }
}
