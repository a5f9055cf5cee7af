use crate::solver::{ScalarRootFinder, SolverError};

use super::deficit::DeficitCurve;

/// 산소 부족량이 목표 부족량 Dc에 도달하는 임계 시점 tc(day)를 찾는다.
/// 시드에서 가장 먼저 도달하는 근을 취한다. 해가 없으면 수렴 오류를 돌려준다.
pub fn find_critical_time(
    curve: &DeficitCurve,
    target_deficit_mg_per_l: f64,
    finder: &dyn ScalarRootFinder,
    seed_days: f64,
) -> Result<f64, SolverError> {
    let f = |t: f64| curve.deficit_at(t) - target_deficit_mg_per_l;
    let found = finder.find_root(&f, seed_days)?;
    Ok(found.root)
}
