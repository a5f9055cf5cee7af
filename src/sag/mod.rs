//! Streeter-Phelps 산소 수지 계산 모듈 모음.
//! 부족 곡선, 임계 시점 탐색, 허용 부하 보정, 방류 기준 평가, 프로파일 생성으로 구성한다.

pub mod assessment;
pub mod compliance;
pub mod critical;
pub mod deficit;
pub mod load;
pub mod profile;

pub use assessment::{run_assessment, AssessmentError, AssessmentInput, AssessmentResult, QualityStandard};
pub use compliance::{evaluate_compliance, ComplianceInput, ComplianceResult};
pub use critical::find_critical_time;
pub use deficit::DeficitCurve;
pub use load::{corrected_ultimate_load, LoadError};
pub use profile::{generate_profile, profile_csv, ProfileSample, ProfileSettings};
