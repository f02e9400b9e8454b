use approx::assert_relative_eq;
use fvflux_riemann::{
    AusmSolver, ConservedState, FluxVector, PrimitiveState, RiemannSolver, RoeSolver,
    RusanovSolver, SpectralRadiusSign, entropy_fix, roe_average,
};
use fvflux_thermo::{Gas, GasConfig};
use nalgebra::Vector3;

fn air() -> Gas {
    GasConfig::default().build().unwrap()
}

/// A spread of valid states with every component exercised.
fn states() -> Vec<PrimitiveState> {
    vec![
        PrimitiveState::new(1.0, Vector3::new(0.0, 0.0, 0.0), 1.0 / 1.4, 0.0, 1.0),
        PrimitiveState::new(1.2, Vector3::new(0.3, -0.2, 0.1), 0.9, 0.02, 3.0),
        PrimitiveState::new(0.125, Vector3::new(-0.4, 0.0, 0.25), 0.1, 1e-4, 50.0),
        PrimitiveState::new(4.0, Vector3::new(1.5, 0.5, -0.5), 10.0, 0.3, 0.5),
        PrimitiveState::new(1.0, Vector3::new(100.0, 0.0, 0.0), 101_325.0, 0.0, 1.0),
    ]
}

fn normals() -> Vec<Vector3<f64>> {
    vec![
        Vector3::x(),
        -Vector3::y(),
        Vector3::new(0.6, 0.0, 0.8),
        Vector3::new(1.0, -2.0, 2.0) / 3.0,
    ]
}

fn assert_flux_eq(actual: &FluxVector, expected: &FluxVector) {
    let scale = expected
        .as_slice()
        .iter()
        .fold(1.0_f64, |acc, f| acc.max(f.abs()));
    for (a, e) in actual.as_slice().iter().zip(expected.as_slice()) {
        assert_relative_eq!(a, e, epsilon = 1e-12 * scale, max_relative = 1e-11);
    }
}

#[test]
fn roe_is_consistent() {
    let gas = air();
    let model = gas.model();

    for state in states() {
        for normal in normals() {
            let face = RoeSolver::default().flux(&state, &state, model, &normal);
            assert_flux_eq(&face.flux, &FluxVector::physical(&state, model, &normal));
        }
    }
}

#[test]
fn ausm_is_consistent_below_critical_speed() {
    let gas = air();
    let model = gas.model();

    // The interface sound speed equals c* only when |Vn| ≤ c*.
    for state in states().into_iter().take(4) {
        for normal in normals() {
            let face = AusmSolver::default().flux(&state, &state, model, &normal);
            assert_flux_eq(&face.flux, &FluxVector::physical(&state, model, &normal));
        }
    }
}

#[test]
fn rusanov_subtracts_half_spectral_radius_from_equal_states() {
    let gas = air();
    let model = gas.model();

    // The scalar form does not vanish for equal states; each component is
    // offset by exactly half the spectral radius.
    for state in states() {
        for normal in normals() {
            let face = RusanovSolver::default().flux(&state, &state, model, &normal);
            let radius = face.max_wave_speed.unwrap();
            let expected = FluxVector::physical(&state, model, &normal) - 0.5 * radius;

            assert_relative_eq!(
                radius,
                state.normal_velocity(&normal).abs() + state.speed_of_sound(model),
                max_relative = 1e-14
            );
            assert_flux_eq(&face.flux, &expected);
        }
    }
}

#[test]
fn roe_is_antisymmetric_under_swap_and_reversed_normal() {
    let gas = air();
    let model = gas.model();
    let states = states();
    let solver = RoeSolver::default();

    for left in &states[..4] {
        for right in &states[..4] {
            for normal in normals() {
                let forward = solver.flux(left, right, model, &normal).flux;
                let backward = solver.flux(right, left, model, &-normal).flux;
                assert_flux_eq(&forward, &-backward);
            }
        }
    }
}

#[test]
fn rusanov_is_antisymmetric_with_flipped_sign() {
    let gas = air();
    let model = gas.model();
    let states = states();

    for sign in [SpectralRadiusSign::Subtract, SpectralRadiusSign::Add] {
        let forward_solver = RusanovSolver::new(sign);
        let backward_solver = RusanovSolver::new(sign.flipped());

        for left in &states[..4] {
            for right in &states[..4] {
                for normal in normals() {
                    let forward = forward_solver.flux(left, right, model, &normal).flux;
                    let backward = backward_solver.flux(right, left, model, &-normal).flux;
                    assert_flux_eq(&forward, &-backward);
                }
            }
        }
    }
}

#[test]
fn entropy_fix_keeps_acoustic_speeds_positive_and_smooth() {
    let threshold = 0.1;
    let speeds: Vec<f64> = (0..=200u32).map(|i| f64::from(i) * 1e-3).collect();
    let samples: Vec<f64> = speeds
        .iter()
        .map(|&lambda| entropy_fix(lambda, threshold))
        .collect();

    assert!(samples.iter().all(|&s| s >= 0.5 * threshold));
    for (&lambda, pair) in speeds.iter().zip(samples.windows(2)) {
        assert!(pair[0] >= lambda);
        // Monotone with slope at most one.
        assert!(pair[1] >= pair[0]);
        assert!(pair[1] - pair[0] <= 1e-3 + 1e-15);
    }
}

#[test]
fn roe_flux_varies_smoothly_through_sonic_point() {
    let gas = air();
    let model = gas.model();
    let solver = RoeSolver::default();
    let normal = Vector3::x();

    // a = 1 on the left; the left acoustic wave speed passes through zero.
    let fluxes: Vec<FluxVector> = (0..=200)
        .map(|i| {
            let u = 0.9 + f64::from(i) * 1e-3;
            let left = PrimitiveState::new(1.4, Vector3::new(u, 0.0, 0.0), 1.0, 0.0, 1.0);
            let right = PrimitiveState::new(1.3, Vector3::new(u + 0.01, 0.0, 0.0), 0.95, 0.0, 1.0);
            solver.flux(&left, &right, model, &normal).flux
        })
        .collect();

    for pair in fluxes.windows(2) {
        assert!(pair[1].as_slice().iter().all(|f| f.is_finite()));
        let jump = (pair[1] - pair[0])
            .as_slice()
            .iter()
            .fold(0.0_f64, |acc, d| acc.max(d.abs()));
        assert!(jump < 0.02, "flux jumped by {jump}");
    }
}

#[test]
fn conserved_round_trip() {
    let gas = air();
    let model = gas.model();

    let densities = [0.1, 0.5, 1.0, 3.0, 10.0];
    let pressures = [1e3, 1e4, 1e5, 1e6];
    let velocities = [-500.0, -120.0, 0.0, 35.0, 500.0];

    for &rho in &densities {
        for &p in &pressures {
            for &u in &velocities {
                for &v in &velocities {
                    let w = -0.5 * u;
                    let state = PrimitiveState::new(rho, Vector3::new(u, v, w), p, 0.25 * rho, 2.0);

                    let cons = state.to_conserved(model);
                    let back = PrimitiveState::from_conserved(&cons, model);
                    let again = back.to_conserved(model);

                    for (a, e) in again.as_slice().iter().zip(cons.as_slice()) {
                        assert_relative_eq!(a, e, epsilon = 1e-9, max_relative = 1e-11);
                    }
                    assert_relative_eq!(back.p(), p, max_relative = 1e-8);
                }
            }
        }
    }
}

#[test]
fn flux_converts_to_conserved_shape() {
    let gas = air();
    let model = gas.model();
    let state = states()[1];

    let flux = FluxVector::physical(&state, model, &Vector3::x());
    let cons = ConservedState::from(flux);

    assert_eq!(cons.as_slice(), flux.as_slice());
}

#[test]
fn rusanov_spectral_radius_bounds_roe_wave_speed() {
    let gas = air();
    let model = gas.model();
    let normal = Vector3::x();

    // Ten-to-one pressure jump with the shocked gas moving into gas at rest.
    let post = PrimitiveState::new(4.0, Vector3::new(1.5, 0.0, 0.0), 10.0, 0.0, 1.0);
    let pre = PrimitiveState::new(1.0, Vector3::zeros(), 1.0 / 1.4, 0.0, 1.0);

    let roe = RoeSolver::default().flux(&post, &pre, model, &normal);
    let rusanov = RusanovSolver::default().flux(&post, &pre, model, &normal);

    let roe_speed = roe.max_wave_speed.unwrap();
    let rusanov_speed = rusanov.max_wave_speed.unwrap();
    assert!(rusanov_speed >= roe_speed);

    // Dissipation is what each scheme removes from the central flux Fl + Fr.
    let central =
        FluxVector::physical(&post, model, &normal) + FluxVector::physical(&pre, model, &normal);
    let roe_dissipation = central - 2.0 * roe.flux;
    let rusanov_dissipation = central - 2.0 * rusanov.flux;

    // The scalar Rusanov term is the spectral radius in every component,
    // while Roe's energy dissipation across this shock is far larger.
    for d in rusanov_dissipation.as_slice() {
        assert_relative_eq!(*d, rusanov_speed, max_relative = 1e-10);
    }
    assert!(roe_dissipation.energy().abs() > 10.0 * rusanov_speed);
    assert!(roe_dissipation.mass().abs() > rusanov_speed);

    // The Roe-averaged sound speed lies between the two sides.
    let avg = roe_average(&post, &pre, model);
    assert!(avg.speed_of_sound(model) < post.speed_of_sound(model));
    assert!(avg.speed_of_sound(model) > pre.speed_of_sound(model));
}
