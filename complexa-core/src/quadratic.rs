//! Solvers for `a·x² + b·x + c = 0`.
//!
//! Both solvers return the two solutions as a fixed pair and reject a zero
//! quadratic coefficient with [`CoreError::InvalidArgument`].

use tracing::{debug, warn};

use crate::complex::Complex;
use crate::error::CoreError;

const ZERO_COEFFICIENT: CoreError = CoreError::InvalidArgument {
    argument: "a",
    reason: "the quadratic coefficient must be different from zero",
};

/// Solve a quadratic with real coefficients.
///
/// Returns `[-b/2a + i·s, -b/2a - i·s]` with `s = √|b² - 4ac| / 2a`. The
/// absolute value of the discriminant is always taken, so a positive
/// discriminant still yields a conjugate pair rather than two real roots.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> crate::Result<[Complex; 2]> {
    if a == 0.0 {
        warn!(b, c, "rejected quadratic with a zero leading coefficient");
        return Err(ZERO_COEFFICIENT);
    }

    let delta = b * b - 4.0 * a * c;
    debug!(a, b, c, delta, "solving real quadratic");

    let real = -b / (2.0 * a);
    let imaginary = delta.abs().sqrt() / (2.0 * a);

    Ok([Complex::new(real, imaginary), Complex::new(real, -imaginary)])
}

/// Solve a quadratic with complex coefficients.
///
/// The discriminant's square root is the principal root from
/// [`Complex::first_root`], giving `[(-b + √Δ) / 2a, (-b - √Δ) / 2a]`.
/// Only an `a` exactly equal to zero is rejected.
pub fn solve_quadratic_complex(
    a: Complex,
    b: Complex,
    c: Complex,
) -> crate::Result<[Complex; 2]> {
    if a == Complex::from(0.0_f64) {
        warn!(%b, %c, "rejected quadratic with a zero leading coefficient");
        return Err(ZERO_COEFFICIENT);
    }

    let ac = a * c;
    let delta = b.power(2.0) - Complex::new(4.0 * ac.re, 4.0 * ac.im);
    debug!(%a, %b, %c, %delta, "solving complex quadratic");

    let delta_sqrt = delta.first_root(2.0);
    let denominator = Complex::new(2.0 * a.re, 2.0 * a.im);

    Ok([
        (-b + delta_sqrt) / denominator,
        (-b - delta_sqrt) / denominator,
    ])
}
