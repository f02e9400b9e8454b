use fvflux_thermo::GasModel;
use nalgebra::Vector3;

use crate::{
    FaceFlux, FluxVector, PrimitiveState, RiemannSolver, config::DEFAULT_ENTROPY_FIX,
    roe_average,
};

/// Roe's flux-difference splitting with Harten's entropy fix on the acoustic waves.
///
/// The flux is `0.5·(Fl + Fr − D)` where the dissipation `D` sums, over six
/// characteristic families, wave speed times wave strength times right
/// eigenvector, all evaluated at the Roe-averaged state.
/// Wave strengths mix primitive differences (`ΔP`, `Δρ`, `ΔVn`, `Δk`, `Δω`)
/// rather than projecting the conserved jump onto exact left eigenvectors.
///
/// The reported maximum wave speed is `|V̂n| + â`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoeSolver {
    entropy_fix: f64,
}

impl Default for RoeSolver {
    fn default() -> Self {
        Self {
            entropy_fix: DEFAULT_ENTROPY_FIX,
        }
    }
}

impl RoeSolver {
    /// Creates a solver with the given entropy-fix threshold.
    ///
    /// The threshold is assumed positive and finite;
    /// [`FluxConfig`](crate::FluxConfig) validates it.
    #[must_use]
    pub fn new(entropy_fix: f64) -> Self {
        Self { entropy_fix }
    }

    #[must_use]
    pub fn entropy_fix(&self) -> f64 {
        self.entropy_fix
    }
}

/// Harten's entropy fix.
///
/// Wave speeds below `threshold` are replaced by `0.5·(λ²/threshold + threshold)`,
/// which is at least `threshold/2` and meets `λ` with matching slope at the threshold.
#[must_use]
pub fn entropy_fix(speed: f64, threshold: f64) -> f64 {
    if speed < threshold {
        0.5 * (speed * speed / threshold + threshold)
    } else {
        speed
    }
}

impl RiemannSolver for RoeSolver {
    fn flux(
        &self,
        left: &PrimitiveState,
        right: &PrimitiveState,
        gas: GasModel<'_>,
        normal: &Vector3<f64>,
    ) -> FaceFlux {
        let roe = roe_average(left, right, gas);
        let rho = roe.rho();
        let vel = roe.velocity();
        let tke = roe.tke();
        let omega = roe.omega();

        let enthalpy = roe.enthalpy(gas);
        let gamma = gas.thermo().gamma(roe.temperature(gas));
        let sos = ((gamma - 1.0) * (enthalpy - 0.5 * vel.norm_squared())).sqrt();
        let vn = vel.dot(normal);

        let delta = *right - *left;
        let dvel = delta.velocity();
        let dvn = dvel.dot(normal);
        let dp = delta.p();
        let drho = delta.rho();
        let sos2 = sos * sos;

        let strength = [
            (dp - rho * sos * dvn) / (2.0 * sos2),
            drho - dp / sos2,
            (dp + rho * sos * dvn) / (2.0 * sos2),
            rho,
            rho * delta.tke() + tke * drho - dp * tke / sos2,
            rho * delta.omega() + omega * drho - dp * omega / sos2,
        ];

        let speed = [
            entropy_fix((vn - sos).abs(), self.entropy_fix),
            vn.abs(),
            entropy_fix((vn + sos).abs(), self.entropy_fix),
            vn.abs(),
            vn.abs(),
            vn.abs(),
        ];

        let acoustic = |sign: f64| {
            let v = vel + sign * sos * normal;
            FluxVector::from([1.0, v.x, v.y, v.z, enthalpy + sign * sos * vn, tke, omega])
        };
        let shear = dvel - dvn * normal;

        let eigenvectors = [
            acoustic(-1.0),
            FluxVector::from([1.0, vel.x, vel.y, vel.z, 0.5 * vel.norm_squared(), 0.0, 0.0]),
            acoustic(1.0),
            FluxVector::from([0.0, shear.x, shear.y, shear.z, vel.dot(&dvel) - vn * dvn, 0.0, 0.0]),
            FluxVector::from([0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]),
            FluxVector::from([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]),
        ];

        let dissipation = eigenvectors
            .into_iter()
            .zip(speed.iter().zip(&strength))
            .fold(FluxVector::zero(), |acc, (eig, (s, a))| acc + eig * (s * a));

        let flux = 0.5
            * (FluxVector::physical(left, gas, normal) + FluxVector::physical(right, gas, normal)
                - dissipation);

        FaceFlux::new(flux, Some(vn.abs() + sos))
    }

    fn name(&self) -> &'static str {
        "roe"
    }
}
