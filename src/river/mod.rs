//! 하천 수질 상태 관련 모듈 모음.
//! 합류 혼합 계산과 용존산소 포화 농도 추정으로 구성한다.

pub mod mixing;
pub mod saturation;

pub use mixing::{mix_streams, MixedWater, MixingError, StreamState};
pub use saturation::oxygen_saturation_mg_per_l;
