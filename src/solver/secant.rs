use super::{RootFound, ScalarRootFinder, SolverError};

/// 두 점 할선으로 근을 찾는 방법. 함수 평가만으로 동작한다.
#[derive(Debug, Clone, Copy)]
pub struct SecantSolver {
    /// 잔차 허용 오차
    pub tolerance: f64,
    /// 최대 반복 횟수
    pub max_iterations: usize,
}

/// 시드에서 두 번째 점을 만드는 간격 비율
const SEED_OFFSET: f64 = 1e-4;

impl ScalarRootFinder for SecantSolver {
    fn find_root(&self, f: &dyn Fn(f64) -> f64, seed: f64) -> Result<RootFound, SolverError> {
        let mut t0 = seed;
        let mut f0 = f(t0);
        if !f0.is_finite() {
            return Err(SolverError::NonFinite { at: t0 });
        }
        if f0.abs() < self.tolerance {
            return Ok(RootFound {
                root: t0,
                iterations: 0,
                residual: f0.abs(),
            });
        }

        let mut t1 = seed + SEED_OFFSET * seed.abs().max(1.0);
        for iteration in 1..=self.max_iterations {
            let f1 = f(t1);
            if !f1.is_finite() {
                return Err(SolverError::NonFinite { at: t1 });
            }
            if f1.abs() < self.tolerance {
                return Ok(RootFound {
                    root: t1,
                    iterations: iteration,
                    residual: f1.abs(),
                });
            }

            let rise = f1 - f0;
            if rise.abs() < f64::MIN_POSITIVE {
                return Err(SolverError::FlatSlope { at: t1 });
            }
            let t2 = t1 - f1 * (t1 - t0) / rise;
            if !t2.is_finite() {
                return Err(SolverError::NonFinite { at: t2 });
            }
            t0 = t1;
            f0 = f1;
            t1 = t2;
        }
        Err(SolverError::IterationLimit {
            iterations: self.max_iterations,
            residual: f(t1).abs(),
        })
    }
}
