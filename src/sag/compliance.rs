use crate::river::StreamState;

/// 방류 기준 평가 입력.
#[derive(Debug, Clone)]
pub struct ComplianceInput {
    /// 보정된 최종 BOD 부하 La(mg/l)
    pub ultimate_load_mg_per_l: f64,
    /// 임계 시점 tc(day)
    pub critical_time_days: f64,
    /// 탈산소 계수 K1(1/day)
    pub deoxygenation_per_day: f64,
    /// 하천 본류 상태
    pub river: StreamState,
    /// 처리 전 방류수 상태
    pub discharge: StreamState,
}

/// 방류 기준 평가 결과.
#[derive(Debug, Clone)]
pub struct ComplianceResult {
    /// 합류 지점에서 허용 가능한 최대 혼합 BOD(mg/l)
    pub max_permissible_bod_mg_per_l: f64,
    /// 그 허용치를 만드는 처리 후 방류수 BOD(mg/l)
    pub treated_discharge_bod_mg_per_l: f64,
    /// 필요한 처리 효율(%). 음수나 100 초과도 그대로 보고한다.
    pub required_efficiency_percent: f64,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// 허용 혼합 BOD와 필요한 처리 효율을 계산한다.
///
/// BOD_max = La / e^(K1·tc),
/// C2_final = ((Q1+Q2)·BOD_max - Q1·C1) / Q2,
/// 효율 = (C2 - C2_final) / C2 · 100
///
/// 유량은 혼합 단계에서 이미 검증된 값이라고 가정한다.
pub fn evaluate_compliance(input: &ComplianceInput) -> ComplianceResult {
    let max_permissible_bod_mg_per_l = input.ultimate_load_mg_per_l
        / (input.deoxygenation_per_day * input.critical_time_days).exp();

    let q1 = input.river.flow_m3_per_s;
    let q2 = input.discharge.flow_m3_per_s;
    let treated_discharge_bod_mg_per_l =
        ((q1 + q2) * max_permissible_bod_mg_per_l - q1 * input.river.bod_mg_per_l) / q2;

    let mut warnings = Vec::new();
    let actual = input.discharge.bod_mg_per_l;
    let required_efficiency_percent = if actual > 0.0 {
        (actual - treated_discharge_bod_mg_per_l) / actual * 100.0
    } else {
        warnings.push("방류수 BOD가 0 이하라 처리 효율을 정의할 수 없습니다.".into());
        0.0
    };

    if required_efficiency_percent < 0.0 {
        warnings.push(
            "필요 처리 효율이 음수입니다. 현재 방류 부하로도 기준을 만족합니다.".into(),
        );
    } else if required_efficiency_percent > 100.0 {
        warnings.push(
            "필요 처리 효율이 100%를 초과합니다. 방류수 처리만으로는 기준을 만족할 수 없습니다."
                .into(),
        );
    }

    ComplianceResult {
        max_permissible_bod_mg_per_l,
        treated_discharge_bod_mg_per_l,
        required_efficiency_percent,
        warnings,
    }
}
