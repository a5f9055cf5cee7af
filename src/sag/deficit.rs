/// Streeter-Phelps 산소 부족 곡선 D(t)의 계수 묶음.
#[derive(Debug, Clone, Copy)]
pub struct DeficitCurve {
    /// 탈산소 계수 K1(1/day)
    pub deoxygenation_per_day: f64,
    /// 재폭기 계수 K2(1/day)
    pub reaeration_per_day: f64,
    /// 최종 BOD 부하 La(mg/l)
    pub ultimate_load_mg_per_l: f64,
    /// 초기 산소 부족량 Da(mg/l)
    pub initial_deficit_mg_per_l: f64,
}

/// K1과 K2를 같은 값으로 취급하는 상대 오차 한계. 일반식의 분모가 퇴화하는 구간이다.
pub const RATE_EQUALITY_EPS: f64 = 1e-9;

impl DeficitCurve {
    /// K1 == K2 여부.
    pub fn rates_coincide(&self) -> bool {
        let k1 = self.deoxygenation_per_day;
        let k2 = self.reaeration_per_day;
        (k2 - k1).abs() <= RATE_EQUALITY_EPS * k1.abs().max(k2.abs())
    }

    /// 경과 시간 t(day)에서의 산소 부족량 D(t)(mg/l).
    ///
    /// D(t) = (K1·La/(K2-K1))·(e^(-K1·t) - e^(-K2·t)) + Da·e^(-K1·t)
    ///
    /// K1 == K2이면 극한형 D(t) = K1·La·t·e^(-K1·t) + Da·e^(-K1·t) 를 쓴다.
    pub fn deficit_at(&self, t_days: f64) -> f64 {
        let k1 = self.deoxygenation_per_day;
        let k2 = self.reaeration_per_day;
        let la = self.ultimate_load_mg_per_l;
        let da = self.initial_deficit_mg_per_l;

        let decay1 = (-k1 * t_days).exp();
        if self.rates_coincide() {
            k1 * la * t_days * decay1 + da * decay1
        } else {
            let decay2 = (-k2 * t_days).exp();
            (k1 * la / (k2 - k1)) * (decay1 - decay2) + da * decay1
        }
    }

    /// 같은 계수에 다른 최종 부하를 적용한 곡선을 만든다.
    pub fn with_load(&self, ultimate_load_mg_per_l: f64) -> Self {
        Self {
            ultimate_load_mg_per_l,
            ..*self
        }
    }
}
