use serde::{Deserialize, Serialize};

use crate::kinetics::{KineticsConfig, KineticsError, RateConstants};
use crate::river::{mix_streams, oxygen_saturation_mg_per_l, MixedWater, MixingError, StreamState};
use crate::solver::{SolverError, SolverSettings};

use super::compliance::{evaluate_compliance, ComplianceInput, ComplianceResult};
use super::critical::find_critical_time;
use super::deficit::DeficitCurve;
use super::load::{corrected_ultimate_load, LoadError};
use super::profile::{generate_profile, ProfileSample, ProfileSettings};

/// 수질 기준 설정. 설정 파일의 [standard] 섹션에 대응한다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QualityStandard {
    /// 용존산소 기준치(mg/l)
    pub do_standard_mg_per_l: f64,
    /// 가정한 포화 용존산소(mg/l). 생략하면 혼합 수온으로부터 추정한다.
    pub do_saturation_mg_per_l: Option<f64>,
}

/// 평가 파이프라인 입력. 모든 값은 불변으로 전달된다.
#[derive(Debug, Clone)]
pub struct AssessmentInput {
    /// 하천 본류 상태
    pub river: StreamState,
    /// 처리 전 방류수 상태
    pub discharge: StreamState,
    /// 반응 속도 상수 설정
    pub kinetics: KineticsConfig,
    /// 수질 기준
    pub standard: QualityStandard,
    /// 근 탐색 설정
    pub solver: SolverSettings,
    /// 프로파일 설정
    pub profile: ProfileSettings,
}

/// 평가 파이프라인 오류. 설정 오류와 수렴 오류를 구분해 담는다.
#[derive(Debug)]
pub enum AssessmentError {
    /// 혼합 계산 설정 오류
    Mixing(MixingError),
    /// 속도 상수 설정 오류
    Kinetics(KineticsError),
    /// 임계 시점 탐색이 수렴하지 않음
    CriticalTime(SolverError),
    /// 허용 부하 보정 분모 퇴화
    Load(LoadError),
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentError::Mixing(e) => write!(f, "혼합 계산 오류: {e}"),
            AssessmentError::Kinetics(e) => write!(f, "속도 상수 오류: {e}"),
            AssessmentError::CriticalTime(e) => write!(f, "임계 시점 탐색 오류: {e}"),
            AssessmentError::Load(e) => write!(f, "허용 부하 보정 오류: {e}"),
        }
    }
}

impl std::error::Error for AssessmentError {}

impl From<MixingError> for AssessmentError {
    fn from(value: MixingError) -> Self {
        AssessmentError::Mixing(value)
    }
}

impl From<KineticsError> for AssessmentError {
    fn from(value: KineticsError) -> Self {
        AssessmentError::Kinetics(value)
    }
}

impl From<SolverError> for AssessmentError {
    fn from(value: SolverError) -> Self {
        AssessmentError::CriticalTime(value)
    }
}

impl From<LoadError> for AssessmentError {
    fn from(value: LoadError) -> Self {
        AssessmentError::Load(value)
    }
}

/// 전체 평가 결과. 차트를 그리는 쪽에서 쓰는 기준값들을 함께 담는다.
#[derive(Debug, Clone)]
pub struct AssessmentResult {
    /// 혼합 수질
    pub mixed: MixedWater,
    /// 보정된 속도 상수
    pub rates: RateConstants,
    /// 포화 용존산소(mg/l)
    pub saturation_mg_per_l: f64,
    /// 용존산소 기준치(mg/l)
    pub do_standard_mg_per_l: f64,
    /// 초기 산소 부족량 Da(mg/l)
    pub initial_deficit_mg_per_l: f64,
    /// 목표(임계) 산소 부족량 Dc(mg/l)
    pub target_deficit_mg_per_l: f64,
    /// 임계 시점 tc(day)
    pub critical_time_days: f64,
    /// 보정된 최종 BOD 부하 La(mg/l)
    pub ultimate_load_mg_per_l: f64,
    /// 방류 기준 평가
    pub compliance: ComplianceResult,
    /// 부족량/용존산소 프로파일
    pub profile: Vec<ProfileSample>,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// 혼합 → 속도 보정 → 임계 시점 탐색 → 부하 보정 → 기준 평가 → 프로파일 순의
/// 단일 파이프라인을 실행한다.
///
/// La는 혼합 BOD를 시드로 tc를 먼저 구한 뒤 한 번만 보정한다.
/// 수렴할 때까지 반복하는 구조가 아니다.
pub fn run_assessment(input: &AssessmentInput) -> Result<AssessmentResult, AssessmentError> {
    let mut warnings = Vec::new();

    let mixed = mix_streams(&input.river, &input.discharge)?;
    let rates = input.kinetics.rates_at(mixed.temperature_c)?;
    if input.kinetics.deoxygenation_theta <= 1.0 {
        warnings.push(format!(
            "탈산소 온도 보정 계수가 1 이하입니다: {}",
            input.kinetics.deoxygenation_theta
        ));
    }
    if input.kinetics.reaeration_theta <= 1.0 {
        warnings.push(format!(
            "재폭기 온도 보정 계수가 1 이하입니다: {}",
            input.kinetics.reaeration_theta
        ));
    }

    let saturation_mg_per_l = match input.standard.do_saturation_mg_per_l {
        Some(assumed) => assumed,
        None => oxygen_saturation_mg_per_l(mixed.temperature_c),
    };
    if mixed.do_mg_per_l > saturation_mg_per_l {
        warnings.push(format!(
            "혼합 DO {:.2} mg/l가 포화 DO {:.2} mg/l를 초과합니다.",
            mixed.do_mg_per_l, saturation_mg_per_l
        ));
    }

    let initial_deficit_mg_per_l = saturation_mg_per_l - mixed.do_mg_per_l;
    let target_deficit_mg_per_l = saturation_mg_per_l - input.standard.do_standard_mg_per_l;
    if initial_deficit_mg_per_l > target_deficit_mg_per_l {
        warnings.push(
            "합류 직후 산소 부족량이 이미 목표 부족량을 초과합니다.".into(),
        );
    }

    let seed_curve = DeficitCurve {
        deoxygenation_per_day: rates.deoxygenation_per_day,
        reaeration_per_day: rates.reaeration_per_day,
        ultimate_load_mg_per_l: mixed.bod_mg_per_l,
        initial_deficit_mg_per_l,
    };
    let finder = input
        .solver
        .method
        .build(input.solver.tolerance, input.solver.max_iterations);
    let critical_time_days = find_critical_time(
        &seed_curve,
        target_deficit_mg_per_l,
        finder.as_ref(),
        input.solver.seed_days,
    )?;

    let ultimate_load_mg_per_l = corrected_ultimate_load(
        &rates,
        target_deficit_mg_per_l,
        initial_deficit_mg_per_l,
        critical_time_days,
    )?;

    let compliance = evaluate_compliance(&ComplianceInput {
        ultimate_load_mg_per_l,
        critical_time_days,
        deoxygenation_per_day: rates.deoxygenation_per_day,
        river: input.river,
        discharge: input.discharge,
    });

    let profile = generate_profile(
        &seed_curve.with_load(ultimate_load_mg_per_l),
        saturation_mg_per_l,
        &input.profile,
    );

    Ok(AssessmentResult {
        mixed,
        rates,
        saturation_mg_per_l,
        do_standard_mg_per_l: input.standard.do_standard_mg_per_l,
        initial_deficit_mg_per_l,
        target_deficit_mg_per_l,
        critical_time_days,
        ultimate_load_mg_per_l,
        compliance,
        profile,
        warnings,
    })
}
