use fvflux_thermo::GasModel;
use nalgebra::Vector3;

use crate::{
    FaceFlux, FluxVector, PrimitiveState, RiemannSolver,
    config::DEFAULT_PRESSURE_WEIGHT_EXPONENT,
};

/// AUSMPW+ flux-vector splitting (Kim, Kim & Rho, 1998).
///
/// The flux is split into a convective part, upwinded with blended split Mach
/// numbers and an interface speed of sound, and a pressure part weighted by
/// split pressure polynomials. The pressure-based weights suppress
/// oscillations behind shocks and pressure-velocity decoupling at low speed.
///
/// For `|Vn| ≤ c*` on both sides, equal states reproduce the physical flux.
/// No maximum wave speed is reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AusmSolver {
    pressure_weight_exponent: f64,
}

impl Default for AusmSolver {
    fn default() -> Self {
        Self {
            pressure_weight_exponent: DEFAULT_PRESSURE_WEIGHT_EXPONENT,
        }
    }
}

impl AusmSolver {
    #[must_use]
    pub fn new(pressure_weight_exponent: f64) -> Self {
        Self {
            pressure_weight_exponent,
        }
    }

    #[must_use]
    pub fn pressure_weight_exponent(&self) -> f64 {
        self.pressure_weight_exponent
    }
}

/// Split Mach numbers and pressures of one side of the face.
#[derive(Debug, Clone, Copy)]
struct Split {
    mach: f64,
    pressure: f64,
}

impl Split {
    /// Left-running split, `M⁺` and `P⁺`.
    fn plus(mach: f64) -> Self {
        if mach.abs() <= 1.0 {
            let m1 = (mach + 1.0).powi(2);
            Self {
                mach: 0.25 * m1,
                pressure: 0.25 * m1 * (2.0 - mach),
            }
        } else {
            Self {
                mach: 0.5 * (mach + mach.abs()),
                pressure: 0.5 * (1.0 + mach.signum()),
            }
        }
    }

    /// Right-running split, `M⁻` and `P⁻`.
    fn minus(mach: f64) -> Self {
        if mach.abs() <= 1.0 {
            let m1 = (mach - 1.0).powi(2);
            Self {
                mach: -0.25 * m1,
                pressure: 0.25 * m1 * (2.0 + mach),
            }
        } else {
            Self {
                mach: 0.5 * (mach - mach.abs()),
                pressure: 0.5 * (1.0 - mach.signum()),
            }
        }
    }
}

impl RiemannSolver for AusmSolver {
    fn flux(
        &self,
        left: &PrimitiveState,
        right: &PrimitiveState,
        gas: GasModel<'_>,
        normal: &Vector3<f64>,
    ) -> FaceFlux {
        let thermo = gas.thermo();

        let tl = left.temperature(gas);
        let tr = right.temperature(gas);
        let h = 0.5 * (thermo.spec_enthalpy(tl) + thermo.spec_enthalpy(tr));
        let gamma = thermo.gamma(0.5 * (tl + tr));
        let sos_star = (2.0 * h * (gamma - 1.0) / (gamma + 1.0)).sqrt();

        let vel_l = left.normal_velocity(normal);
        let vel_r = right.normal_velocity(normal);
        let ml = vel_l / sos_star;
        let mr = vel_r / sos_star;

        // Interface speed of sound, upwinded on the mean normal velocity.
        let vel = 0.5 * (vel_l + vel_r);
        let sos = if vel < 0.0 {
            sos_star * sos_star / vel_l.max(sos_star)
        } else if vel > 0.0 {
            sos_star * sos_star / vel_r.max(sos_star)
        } else {
            0.0
        };

        let plus = Split::plus(ml);
        let minus = Split::minus(mr);

        let (pl, pr) = (left.p(), right.p());
        let ps = plus.pressure * pl + minus.pressure * pr;
        let w = 1.0 - (pl / pr).min(pr / pl).powf(self.pressure_weight_exponent);
        let fl = if ml.abs() < 1.0 { pl / ps - 1.0 } else { 0.0 };
        let fr = if mr.abs() < 1.0 { pr / ps - 1.0 } else { 0.0 };

        let (mach_l, mach_r) = if plus.mach + minus.mach >= 0.0 {
            (
                plus.mach + minus.mach * ((1.0 - w) * (1.0 + fr) - fl),
                minus.mach * w * (1.0 + fr),
            )
        } else {
            (
                plus.mach * w * (1.0 + fl),
                minus.mach + plus.mach * ((1.0 - w) * (1.0 + fl) - fr),
            )
        };

        let side = |state: &PrimitiveState, mach: f64, split_pressure: f64| {
            let mass = state.rho() * mach * sos;
            let momentum = mass * state.velocity() + split_pressure * state.p() * normal;
            FluxVector::from([
                mass,
                momentum.x,
                momentum.y,
                momentum.z,
                mass * state.enthalpy(gas),
                mass * state.tke(),
                mass * state.omega(),
            ])
        };

        let flux = side(left, mach_l, plus.pressure) + side(right, mach_r, minus.pressure);

        FaceFlux::new(flux, None)
    }

    fn name(&self) -> &'static str {
        "ausm"
    }
}
