use serde::{Deserialize, Serialize};

/// 20°C 기준 반응 속도 상수와 온도 보정 계수 설정.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KineticsConfig {
    /// 20°C 탈산소 계수 K1(1/day)
    pub deoxygenation_rate_20c_per_day: f64,
    /// 탈산소 계수 온도 보정 계수
    pub deoxygenation_theta: f64,
    /// 20°C 재폭기 계수 K2(1/day)
    pub reaeration_rate_20c_per_day: f64,
    /// 재폭기 계수 온도 보정 계수
    pub reaeration_theta: f64,
}

/// 혼합 수온 기준으로 보정된 속도 상수 쌍.
#[derive(Debug, Clone, Copy)]
pub struct RateConstants {
    /// 탈산소 계수 K1(1/day)
    pub deoxygenation_per_day: f64,
    /// 재폭기 계수 K2(1/day)
    pub reaeration_per_day: f64,
}

/// 속도 상수 보정 중 발생 가능한 설정 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum KineticsError {
    /// 20°C 기준값이 0 이하
    NonPositiveRate { which: &'static str, value: f64 },
    /// 온도 보정 계수가 0 이하
    NonPositiveTheta { which: &'static str, value: f64 },
    /// 보정 결과가 유한하지 않음
    NonFiniteRate { which: &'static str },
}

impl std::fmt::Display for KineticsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KineticsError::NonPositiveRate { which, value } => {
                write!(f, "{which}이(가) 0 이하입니다: {value} /day")
            }
            KineticsError::NonPositiveTheta { which, value } => {
                write!(f, "{which}이(가) 0 이하입니다: {value}")
            }
            KineticsError::NonFiniteRate { which } => {
                write!(f, "{which} 보정 결과가 유한하지 않습니다. 입력을 확인하세요.")
            }
        }
    }
}

impl std::error::Error for KineticsError {}

/// 단일 속도 상수를 수온으로 보정한다. K = K_ref · θ^(T - 20)
pub fn temperature_corrected_rate(reference_20c: f64, theta: f64, temperature_c: f64) -> f64 {
    reference_20c * theta.powf(temperature_c - 20.0)
}

impl KineticsConfig {
    /// K1/K2를 주어진 수온 기준으로 보정한다. 비물리적 입력은 설정 오류로 돌려준다.
    pub fn rates_at(&self, temperature_c: f64) -> Result<RateConstants, KineticsError> {
        if self.deoxygenation_rate_20c_per_day <= 0.0 {
            return Err(KineticsError::NonPositiveRate {
                which: "20°C 탈산소 계수(K1)",
                value: self.deoxygenation_rate_20c_per_day,
            });
        }
        if self.reaeration_rate_20c_per_day <= 0.0 {
            return Err(KineticsError::NonPositiveRate {
                which: "20°C 재폭기 계수(K2)",
                value: self.reaeration_rate_20c_per_day,
            });
        }
        if self.deoxygenation_theta <= 0.0 {
            return Err(KineticsError::NonPositiveTheta {
                which: "탈산소 온도 보정 계수",
                value: self.deoxygenation_theta,
            });
        }
        if self.reaeration_theta <= 0.0 {
            return Err(KineticsError::NonPositiveTheta {
                which: "재폭기 온도 보정 계수",
                value: self.reaeration_theta,
            });
        }

        let deoxygenation_per_day = temperature_corrected_rate(
            self.deoxygenation_rate_20c_per_day,
            self.deoxygenation_theta,
            temperature_c,
        );
        if !deoxygenation_per_day.is_finite() {
            return Err(KineticsError::NonFiniteRate {
                which: "탈산소 계수(K1)",
            });
        }
        let reaeration_per_day = temperature_corrected_rate(
            self.reaeration_rate_20c_per_day,
            self.reaeration_theta,
            temperature_c,
        );
        if !reaeration_per_day.is_finite() {
            return Err(KineticsError::NonFiniteRate {
                which: "재폭기 계수(K2)",
            });
        }

        Ok(RateConstants {
            deoxygenation_per_day,
            reaeration_per_day,
        })
    }
}
