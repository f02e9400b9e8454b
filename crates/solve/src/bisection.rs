mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

/// Finds a root of `f` inside `bracket` using the bisection method.
///
/// The bracket may be given in either order. If the iteration limit is reached
/// the best point seen so far is returned with [`Status::MaxIters`].
///
/// # Errors
///
/// Returns an error if the bracket is invalid, the config is invalid,
/// the residual does not change sign across the bracket,
/// or `f` produces a non-finite residual.
pub fn solve<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (mut left, mut right) = validate_bracket(bracket)?;

    let mut left_residual = checked(left, f(left))?;
    if left_residual.abs() <= config.residual_tol {
        return Ok(Solution::new(left, left_residual, Status::Converged, 0));
    }

    let right_residual = checked(right, f(right))?;
    if right_residual.abs() <= config.residual_tol {
        return Ok(Solution::new(right, right_residual, Status::Converged, 0));
    }

    if left_residual.signum() == right_residual.signum() {
        return Err(Error::NoBracket {
            left,
            right,
            left_residual,
            right_residual,
        });
    }

    let (mut best, mut best_residual) = if left_residual.abs() <= right_residual.abs() {
        (left, left_residual)
    } else {
        (right, right_residual)
    };

    for iter in 1..=config.max_iters {
        let mid = 0.5 * (left + right);
        let mid_residual = checked(mid, f(mid))?;

        let x_converged = (right - left).abs() <= config.x_abs_tol + config.x_rel_tol * mid.abs();
        let residual_converged = mid_residual.abs() <= config.residual_tol;

        if x_converged || residual_converged {
            return Ok(Solution::new(mid, mid_residual, Status::Converged, iter));
        }

        if mid_residual.abs() < best_residual.abs() {
            best = mid;
            best_residual = mid_residual;
        }

        if left_residual.signum() == mid_residual.signum() {
            left = mid;
            left_residual = mid_residual;
        } else {
            right = mid;
        }
    }

    Ok(Solution::new(
        best,
        best_residual,
        Status::MaxIters,
        config.max_iters,
    ))
}

fn checked(x: f64, residual: f64) -> Result<f64, Error> {
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}

/// Validates bracket values and returns them in normalized (left < right) order.
fn validate_bracket(bracket: [f64; 2]) -> Result<(f64, f64), Error> {
    let [left, right] = bracket;

    if !left.is_finite() {
        return Err(Error::NonFiniteBracket { value: left });
    }

    if !right.is_finite() {
        return Err(Error::NonFiniteBracket { value: right });
    }

    #[allow(clippy::float_cmp)]
    if left == right {
        return Err(Error::ZeroWidthBracket { value: left });
    }

    if left < right {
        Ok((left, right))
    } else {
        Ok((right, left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_square_root() {
        let solution = solve(|x| x * x - 9.0, [0.0, 10.0], &Config::default())
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn finds_root_of_exponential_energy_curve() {
        // Shape of a vibrational energy term: θ/(exp(θ/x) − 1) + 2.5x.
        let theta = 11.0;
        let energy = |x: f64| theta / ((theta / x).exp() - 1.0) + 2.5 * x;
        let target = energy(4.0);

        let solution = solve(|x| energy(x) - target, [1e-3, 100.0], &Config::default())
            .expect("should solve");

        assert!(solution.is_converged());
        assert_relative_eq!(solution.x, 4.0, max_relative = 1e-12);
    }

    #[test]
    fn normalizes_reversed_bracket() {
        // Bracket is reversed: [10.0, 0.0] instead of [0.0, 10.0]
        let solution = solve(|x| x * x - 36.0, [10.0, 0.0], &Config::default())
            .expect("should solve with reversed bracket");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 6.0, epsilon = 1e-10);
    }

    #[test]
    fn root_on_endpoint_returns_immediately() {
        let solution = solve(|x| x - 2.0, [2.0, 5.0], &Config::default()).unwrap();

        assert_eq!(solution.iters, 0);
        assert_eq!(solution.x, 2.0);
    }

    #[test]
    fn errors_on_zero_width_bracket() {
        let result = solve(|x| x * x - 25.0, [5.0, 5.0], &Config::default());

        assert!(matches!(result, Err(Error::ZeroWidthBracket { .. })));
    }

    #[test]
    fn errors_on_non_finite_bracket() {
        let result = solve(|x| x, [f64::NAN, 10.0], &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteBracket { .. })));

        let result = solve(|x| x, [0.0, f64::INFINITY], &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteBracket { .. })));
    }

    #[test]
    fn errors_on_no_bracket() {
        // Both endpoints are positive (no sign change)
        let result = solve(|x| x * x - 9.0, [5.0, 10.0], &Config::default());

        assert!(matches!(result, Err(Error::NoBracket { .. })));
    }

    #[test]
    fn errors_on_non_finite_residual() {
        let result = solve(|x| 1.0 / x, [0.0, 1.0], &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteResidual { .. })));
    }

    #[test]
    fn errors_on_invalid_config() {
        let config = Config {
            x_abs_tol: -1.0,
            ..Config::default()
        };
        let result = solve(|x| x * x - 4.0, [0.0, 10.0], &config);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn zero_iters_returns_best_endpoint() {
        let config = Config {
            max_iters: 0,
            ..Config::default()
        };
        let solution = solve(|x| x * x - 9.0, [2.0, 10.0], &config)
            .expect("should return best endpoint");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 0);
        // x=2 gives residual |4-9|=5, x=10 gives |100-9|=91
        assert_relative_eq!(solution.x, 2.0);
    }
}
