use fvflux_thermo::GasModel;

use crate::PrimitiveState;

/// Returns the density-weighted (Roe) average of two states.
///
/// With `R = sqrt(ρr/ρl)` the average density is `sqrt(ρl·ρr)`, and velocity,
/// total enthalpy, `k`, and `ω` are averaged as `(left + R·right)/(1 + R)`.
/// The averaged total enthalpy is carried by the returned state through its
/// pressure, so that `roe.enthalpy(gas)` recovers it.
#[must_use]
pub fn roe_average(left: &PrimitiveState, right: &PrimitiveState, gas: GasModel<'_>) -> PrimitiveState {
    let ratio = (right.rho() / left.rho()).sqrt();
    let weighted = |l: f64, r: f64| (l + ratio * r) / (1.0 + ratio);

    let rho = (left.rho() * right.rho()).sqrt();
    let velocity = (left.velocity() + ratio * right.velocity()) / (1.0 + ratio);
    let enthalpy = weighted(left.enthalpy(gas), right.enthalpy(gas));

    let spec_enthalpy = enthalpy - 0.5 * velocity.norm_squared();
    let temperature = gas.thermo().temperature_from_spec_enthalpy(spec_enthalpy);
    let pressure = gas.eos().pressure_rt(rho, temperature);

    PrimitiveState::new(
        rho,
        velocity,
        pressure,
        weighted(left.tke(), right.tke()),
        weighted(left.omega(), right.omega()),
    )
}
