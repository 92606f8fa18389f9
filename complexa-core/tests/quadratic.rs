mod common;

use complexa_core::{solve_quadratic, solve_quadratic_complex, Complex, CoreError};

#[test]
fn real_solver_examples() {
    common::init_tracing();

    let s = solve_quadratic(1.0, -4.0, 13.0).unwrap();
    assert_eq!(s, [Complex::new(2.0, 3.0), Complex::new(2.0, -3.0)]);

    let s = Complex::solve_quadratic(1.0, -8.0, 20.0).unwrap();
    assert_eq!(s, [Complex::new(4.0, 2.0), Complex::new(4.0, -2.0)]);
}

#[test]
fn complex_solver_roots_satisfy_equation() {
    common::init_tracing();

    let a = Complex::new(1.0, 1.0);
    let b = Complex::new(-3.0, 2.0);
    let c = Complex::new(0.5, -4.0);
    let [x1, x2] = Complex::solve_quadratic_complex(a, b, c).unwrap();
    for x in [x1, x2] {
        let residual = a * x * x + b * x + c;
        assert!(residual.approx_eq(Complex::ZERO, 1e-9), "residual {residual}");
    }
    // Vieta: x1 + x2 = -b/a
    assert!((x1 + x2).approx_eq(-b / a, 1e-9));
}

#[test]
fn zero_leading_coefficient_is_an_error() {
    common::init_tracing();

    let err = solve_quadratic(0.0, 2.0, 3.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument `a`: the quadratic coefficient must be different from zero"
    );

    let err = solve_quadratic_complex(Complex::ZERO, Complex::ONE, Complex::I).unwrap_err();
    assert!(matches!(err, CoreError::InvalidArgument { argument: "a", .. }));
}
