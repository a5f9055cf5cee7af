use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::kinetics::KineticsConfig;
use crate::river::StreamState;
use crate::sag::assessment::{AssessmentInput, QualityStandard};
use crate::sag::profile::ProfileSettings;
use crate::solver::SolverSettings;

/// 애플리케이션 설정. 시나리오 상수와 풀이기/프로파일 설정, UI 언어를 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어(auto/ko/en)
    pub language: String,
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

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            river: StreamState {
                flow_m3_per_s: 250.0,
                bod_mg_per_l: 20.0,
                do_mg_per_l: 6.0,
                temperature_c: 31.0,
            },
            discharge: StreamState {
                flow_m3_per_s: 125.0,
                bod_mg_per_l: 800.0,
                do_mg_per_l: 8.0,
                temperature_c: 22.0,
            },
            kinetics: KineticsConfig {
                deoxygenation_rate_20c_per_day: 3.00,
                deoxygenation_theta: 1.024,
                reaeration_rate_20c_per_day: 0.23,
                reaeration_theta: 1.047,
            },
            standard: QualityStandard {
                do_standard_mg_per_l: 5.0,
                do_saturation_mg_per_l: Some(8.2),
            },
            solver: SolverSettings::default(),
            profile: ProfileSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }

    /// 평가 파이프라인 입력으로 변환한다.
    pub fn assessment_input(&self) -> AssessmentInput {
        AssessmentInput {
            river: self.river,
            discharge: self.discharge,
            kinetics: self.kinetics,
            standard: self.standard,
            solver: self.solver,
            profile: self.profile,
        }
    }
}
