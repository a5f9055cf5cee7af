use crate::kinetics::RateConstants;

/// 허용 부하 보정 중 발생 가능한 설정 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// e^(-K2·tc)와 e^(-K1·tc)가 사실상 같아 분모가 퇴화함
    DegenerateDenominator { critical_time_days: f64 },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::DegenerateDenominator { critical_time_days } => write!(
                f,
                "tc={critical_time_days} 에서 e^(-K2·tc)와 e^(-K1·tc)가 같아 허용 부하를 보정할 수 없습니다."
            ),
        }
    }
}

impl std::error::Error for LoadError {}

/// 분모 퇴화 판정 한계
const DENOMINATOR_EPS: f64 = 1e-12;

/// 임계 시점 tc에서 목표 부족량 Dc에 도달하도록 최종 BOD 부하 La를 보정한다.
///
/// La = K1·Dc / (K2·(e^(-K2·tc) - e^(-K1·tc))) + Da·e^(-K1·tc)
///
/// 이 식을 그대로 한 번만 적용한다. 수렴할 때까지 반복하지 않는다.
pub fn corrected_ultimate_load(
    rates: &RateConstants,
    target_deficit_mg_per_l: f64,
    initial_deficit_mg_per_l: f64,
    critical_time_days: f64,
) -> Result<f64, LoadError> {
    let k1 = rates.deoxygenation_per_day;
    let k2 = rates.reaeration_per_day;

    let decay1 = (-k1 * critical_time_days).exp();
    let decay2 = (-k2 * critical_time_days).exp();
    let gap = decay2 - decay1;
    if gap.abs() < DENOMINATOR_EPS {
        return Err(LoadError::DegenerateDenominator { critical_time_days });
    }

    Ok((k1 * target_deficit_mg_per_l) / (k2 * gap) + initial_deficit_mg_per_l * decay1)
}
