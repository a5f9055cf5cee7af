use water_quality_toolbox::solver::{
    NewtonSolver, ScalarRootFinder, SecantSolver, SolverError,
};

#[test]
fn newton_finds_quadratic_root() {
    let solver = NewtonSolver {
        tolerance: 1e-9,
        max_iterations: 50,
    };
    let found = solver
        .find_root(&|x| x * x - 4.0, 1.0)
        .expect("newton converges");
    assert!((found.root - 2.0).abs() < 1e-6);
    assert!(found.residual < 1e-9);
    assert!(found.iterations < 20);
}

#[test]
fn secant_finds_quadratic_root() {
    let solver = SecantSolver {
        tolerance: 1e-9,
        max_iterations: 50,
    };
    let found = solver
        .find_root(&|x| x * x - 4.0, 1.0)
        .expect("secant converges");
    assert!((found.root - 2.0).abs() < 1e-6);
    assert!(found.residual < 1e-9);
}

#[test]
fn newton_reports_flat_slope_on_constant_function() {
    let solver = NewtonSolver {
        tolerance: 1e-9,
        max_iterations: 50,
    };
    let err = solver
        .find_root(&|_| 1.0, 0.5)
        .expect_err("constant function has no root");
    assert!(matches!(err, SolverError::FlatSlope { .. }));
}

#[test]
fn newton_reports_iteration_limit_on_rootless_parabola() {
    // x²+1은 실근이 없어 반복 한도까지 진동한다.
    let solver = NewtonSolver {
        tolerance: 1e-9,
        max_iterations: 50,
    };
    let err = solver
        .find_root(&|x| x * x + 1.0, 1.0)
        .expect_err("no real root");
    assert!(matches!(
        err,
        SolverError::IterationLimit { .. } | SolverError::FlatSlope { .. }
    ));
}

#[test]
fn newton_reports_iteration_limit_when_cap_too_small() {
    let solver = NewtonSolver {
        tolerance: 1e-30,
        max_iterations: 3,
    };
    let err = solver
        .find_root(&|x| x * x - 4.0, 10.0)
        .expect_err("cap exceeded");
    match err {
        SolverError::IterationLimit {
            iterations,
            residual,
        } => {
            assert_eq!(iterations, 3);
            assert!(residual.is_finite());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn non_finite_function_value_is_reported() {
    let solver = NewtonSolver {
        tolerance: 1e-9,
        max_iterations: 50,
    };
    let err = solver
        .find_root(&|_| f64::NAN, 0.5)
        .expect_err("nan function");
    assert!(matches!(err, SolverError::NonFinite { .. }));
}
