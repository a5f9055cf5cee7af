/// Elmore-Hayes 다항식으로 담수의 포화 용존산소 농도를 추정한다.
/// 수온은 °C, 결과는 mg/l. 0~35°C 담수 범위에서 유효한 경험식이다.
pub fn oxygen_saturation_mg_per_l(temperature_c: f64) -> f64 {
    let t = temperature_c;
    14.652 - 0.41022 * t + 0.007991 * t * t - 0.000077774 * t * t * t
}
