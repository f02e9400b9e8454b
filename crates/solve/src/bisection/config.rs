/// Configuration for the bisection solver.
///
/// The defaults target temperature inversion, where energy and enthalpy
/// residuals scale with the unknown and have no natural absolute size.
/// Convergence is therefore controlled on the bracket width alone, and
/// `residual_tol` stays `0.0` so only an exact zero stops the search early.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Iteration limit before returning the best point with `Status::MaxIters`.
    pub max_iters: usize,
    /// Absolute bracket-width tolerance on `x`.
    pub x_abs_tol: f64,
    /// Bracket-width tolerance relative to `|x|`.
    pub x_rel_tol: f64,
    /// Residual magnitude accepted as a root.
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 200,
            x_abs_tol: 1e-14,
            x_rel_tol: 1e-13,
            residual_tol: 0.0,
        }
    }
}

impl Config {
    /// Validates that all tolerances are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.x_abs_tol.is_finite() || self.x_abs_tol < 0.0 {
            return Err("x_abs_tol must be finite and non-negative");
        }
        if !self.x_rel_tol.is_finite() || self.x_rel_tol < 0.0 {
            return Err("x_rel_tol must be finite and non-negative");
        }
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err("residual_tol must be finite and non-negative");
        }
        Ok(())
    }
}
