use serde::{Deserialize, Serialize};

/// 합류 전 단일 흐름(하천 본류 또는 방류수)의 상태.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StreamState {
    /// 유량(m³/s)
    pub flow_m3_per_s: f64,
    /// BOD 농도(mg/l)
    pub bod_mg_per_l: f64,
    /// 용존산소 농도(mg/l)
    pub do_mg_per_l: f64,
    /// 수온(°C)
    pub temperature_c: f64,
}

/// 유량 가중 평균으로 구한 합류 직후 혼합 수질.
#[derive(Debug, Clone, Copy)]
pub struct MixedWater {
    /// 혼합 BOD 농도(mg/l)
    pub bod_mg_per_l: f64,
    /// 혼합 용존산소 농도(mg/l)
    pub do_mg_per_l: f64,
    /// 혼합 수온(°C)
    pub temperature_c: f64,
}

/// 혼합 계산 중 발생 가능한 설정 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum MixingError {
    /// 개별 유량이 음수
    NegativeFlow { which: &'static str, value: f64 },
    /// 합산 유량이 0 이하
    NoTotalFlow,
}

impl std::fmt::Display for MixingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MixingError::NegativeFlow { which, value } => {
                write!(f, "{which}이(가) 음수입니다: {value} m³/s")
            }
            MixingError::NoTotalFlow => {
                write!(f, "합산 유량이 0 이하라 혼합 농도를 계산할 수 없습니다.")
            }
        }
    }
}

impl std::error::Error for MixingError {}

/// 두 흐름을 유량 가중 산술 평균으로 혼합한다.
/// mixed_x = (Q1·x1 + Q2·x2) / (Q1 + Q2)
pub fn mix_streams(river: &StreamState, discharge: &StreamState) -> Result<MixedWater, MixingError> {
    if river.flow_m3_per_s < 0.0 {
        return Err(MixingError::NegativeFlow {
            which: "하천 유량(Q1)",
            value: river.flow_m3_per_s,
        });
    }
    if discharge.flow_m3_per_s < 0.0 {
        return Err(MixingError::NegativeFlow {
            which: "방류수 유량(Q2)",
            value: discharge.flow_m3_per_s,
        });
    }
    let total = river.flow_m3_per_s + discharge.flow_m3_per_s;
    if total <= 0.0 {
        return Err(MixingError::NoTotalFlow);
    }

    let weighted = |a: f64, b: f64| (river.flow_m3_per_s * a + discharge.flow_m3_per_s * b) / total;
    Ok(MixedWater {
        bod_mg_per_l: weighted(river.bod_mg_per_l, discharge.bod_mg_per_l),
        do_mg_per_l: weighted(river.do_mg_per_l, discharge.do_mg_per_l),
        temperature_c: weighted(river.temperature_c, discharge.temperature_c),
    })
}
