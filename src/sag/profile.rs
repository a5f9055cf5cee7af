use serde::{Deserialize, Serialize};

use super::deficit::DeficitCurve;

/// 프로파일의 단일 표본.
#[derive(Debug, Clone, Copy)]
pub struct ProfileSample {
    /// 경과 시간(day)
    pub time_days: f64,
    /// 산소 부족량 D(t)(mg/l)
    pub deficit_mg_per_l: f64,
    /// 용존산소 DO(t) = DO_sat - D(t)(mg/l)
    pub dissolved_oxygen_mg_per_l: f64,
}

/// 프로파일 표본화 설정. 설정 파일의 [profile] 섹션에 대응한다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// 표본화 구간 길이(day)
    pub duration_days: f64,
    /// 표본 개수(양 끝 포함)
    pub samples: usize,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            duration_days: 1.0,
            samples: 100,
        }
    }
}

/// [0, duration] 구간을 균등 분할해 부족량/용존산소 곡선을 표본화한다.
pub fn generate_profile(
    curve: &DeficitCurve,
    saturation_mg_per_l: f64,
    settings: &ProfileSettings,
) -> Vec<ProfileSample> {
    let mut out = Vec::with_capacity(settings.samples);
    if settings.samples == 0 {
        return out;
    }
    let step = if settings.samples > 1 {
        settings.duration_days / (settings.samples - 1) as f64
    } else {
        0.0
    };
    for i in 0..settings.samples {
        let time_days = step * i as f64;
        let deficit_mg_per_l = curve.deficit_at(time_days);
        out.push(ProfileSample {
            time_days,
            deficit_mg_per_l,
            dissolved_oxygen_mg_per_l: saturation_mg_per_l - deficit_mg_per_l,
        });
    }
    out
}

/// 프로파일 표본을 CSV 문자열로 만든다. CLI/GUI 내보내기에서 사용한다.
pub fn profile_csv(samples: &[ProfileSample]) -> String {
    let mut out = String::from("time_days,deficit_mg_per_l,dissolved_oxygen_mg_per_l\n");
    for s in samples {
        out.push_str(&format!(
            "{:.6},{:.6},{:.6}\n",
            s.time_days, s.deficit_mg_per_l, s.dissolved_oxygen_mg_per_l
        ));
    }
    out
}
