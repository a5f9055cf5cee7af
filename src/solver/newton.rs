use super::{RootFound, ScalarRootFinder, SolverError};

/// 중앙 차분 수치 미분을 쓰는 뉴턴 방법. 도함수 식이 필요 없다.
#[derive(Debug, Clone, Copy)]
pub struct NewtonSolver {
    /// 잔차 허용 오차
    pub tolerance: f64,
    /// 최대 반복 횟수
    pub max_iterations: usize,
}

/// 수치 미분 간격 비율
const DERIVATIVE_STEP: f64 = 1e-7;

impl ScalarRootFinder for NewtonSolver {
    fn find_root(&self, f: &dyn Fn(f64) -> f64, seed: f64) -> Result<RootFound, SolverError> {
        let mut t = seed;
        for iteration in 0..self.max_iterations {
            let residual = f(t);
            if !residual.is_finite() {
                return Err(SolverError::NonFinite { at: t });
            }
            if residual.abs() < self.tolerance {
                return Ok(RootFound {
                    root: t,
                    iterations: iteration,
                    residual: residual.abs(),
                });
            }

            let h = DERIVATIVE_STEP * t.abs().max(1.0);
            let slope = (f(t + h) - f(t - h)) / (2.0 * h);
            if !slope.is_finite() {
                return Err(SolverError::NonFinite { at: t });
            }
            if slope.abs() < f64::MIN_POSITIVE {
                return Err(SolverError::FlatSlope { at: t });
            }

            t -= residual / slope;
            if !t.is_finite() {
                return Err(SolverError::NonFinite { at: t });
            }
        }
        Err(SolverError::IterationLimit {
            iterations: self.max_iterations,
            residual: f(t).abs(),
        })
    }
}
