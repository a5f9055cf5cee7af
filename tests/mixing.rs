use water_quality_toolbox::river::{mix_streams, MixingError, StreamState};

fn river() -> StreamState {
    StreamState {
        flow_m3_per_s: 250.0,
        bod_mg_per_l: 20.0,
        do_mg_per_l: 6.0,
        temperature_c: 31.0,
    }
}

fn discharge() -> StreamState {
    StreamState {
        flow_m3_per_s: 125.0,
        bod_mg_per_l: 800.0,
        do_mg_per_l: 8.0,
        temperature_c: 22.0,
    }
}

#[test]
fn reference_mixture_matches_hand_calculation() {
    let mixed = mix_streams(&river(), &discharge()).expect("mixing");
    assert!((mixed.bod_mg_per_l - 280.0).abs() < 1e-9);
    assert!((mixed.do_mg_per_l - 20.0 / 3.0).abs() < 1e-9);
    assert!((mixed.temperature_c - 28.0).abs() < 1e-9);
}

#[test]
fn mixture_stays_between_inputs() {
    for (q1, q2) in [(1.0, 1.0), (10.0, 0.5), (0.25, 4.0)] {
        let mut a = river();
        let mut b = discharge();
        a.flow_m3_per_s = q1;
        b.flow_m3_per_s = q2;
        let mixed = mix_streams(&a, &b).expect("mixing");

        let bounded = |x: f64, lo: f64, hi: f64| x >= lo.min(hi) && x <= lo.max(hi);
        assert!(bounded(mixed.bod_mg_per_l, a.bod_mg_per_l, b.bod_mg_per_l));
        assert!(bounded(mixed.do_mg_per_l, a.do_mg_per_l, b.do_mg_per_l));
        assert!(bounded(mixed.temperature_c, a.temperature_c, b.temperature_c));
    }
}

#[test]
fn zero_total_flow_is_rejected() {
    let mut a = river();
    let mut b = discharge();
    a.flow_m3_per_s = 0.0;
    b.flow_m3_per_s = 0.0;
    let err = mix_streams(&a, &b).expect_err("zero total flow");
    assert_eq!(err, MixingError::NoTotalFlow);
}

#[test]
fn negative_flow_is_rejected() {
    let mut a = river();
    a.flow_m3_per_s = -1.0;
    let err = mix_streams(&a, &discharge()).expect_err("negative flow");
    assert!(matches!(err, MixingError::NegativeFlow { .. }));
}
