use water_quality_toolbox::config::Config;
use water_quality_toolbox::kinetics::RateConstants;
use water_quality_toolbox::river::oxygen_saturation_mg_per_l;
use water_quality_toolbox::sag::{
    self, corrected_ultimate_load, find_critical_time, DeficitCurve, LoadError,
};
use water_quality_toolbox::solver::NewtonSolver;

// 기준 시나리오에서 보정된 속도 상수
const K1: f64 = 3.626777458843888; // 3.00 * 1.024^8
const K2: f64 = 0.33212478742359985; // 0.23 * 1.047^8

fn reference_curve() -> DeficitCurve {
    DeficitCurve {
        deoxygenation_per_day: K1,
        reaeration_per_day: K2,
        ultimate_load_mg_per_l: 280.0,
        initial_deficit_mg_per_l: 8.2 - 20.0 / 3.0,
    }
}

#[test]
fn reference_scenario_end_to_end() {
    let cfg = Config::default();
    let r = sag::run_assessment(&cfg.assessment_input()).expect("assessment");

    assert!((r.mixed.bod_mg_per_l - 280.0).abs() < 1e-9);
    assert!((r.mixed.do_mg_per_l - 20.0 / 3.0).abs() < 1e-9);
    assert!((r.mixed.temperature_c - 28.0).abs() < 1e-9);

    assert!((r.rates.deoxygenation_per_day - K1).abs() < 1e-9);
    assert!((r.rates.reaeration_per_day - K2).abs() < 1e-9);

    assert!((r.initial_deficit_mg_per_l - (8.2 - 20.0 / 3.0)).abs() < 1e-9);
    assert!((r.target_deficit_mg_per_l - 3.2).abs() < 1e-9);

    // 원본 프로그램의 기준 실행 결과와 같은 값이어야 한다.
    assert!(r.critical_time_days > 0.0);
    assert!((r.critical_time_days - 1.6556863963046841e-3).abs() < 1e-9);
    assert!((r.ultimate_load_mg_per_l - 6428.4705205803575).abs() < 1e-5);
    assert!(r.compliance.max_permissible_bod_mg_per_l > 0.0);
    assert!((r.compliance.max_permissible_bod_mg_per_l - 6389.984467863281).abs() < 1e-5);
    assert!((r.compliance.required_efficiency_percent - -2291.24417544873).abs() < 1e-5);

    // 허용 부하가 방류 부하보다 커서 효율이 음수로 나오는 시나리오다.
    assert!(!r.compliance.warnings.is_empty());
}

#[test]
fn critical_time_residual_is_within_tolerance() {
    let curve = reference_curve();
    let solver = NewtonSolver {
        tolerance: 1e-9,
        max_iterations: 100,
    };
    let tc = find_critical_time(&curve, 3.2, &solver, 0.1).expect("critical time");
    assert!((curve.deficit_at(tc) - 3.2).abs() < 1e-9);
}

#[test]
fn load_corrector_matches_reference_value() {
    let rates = RateConstants {
        deoxygenation_per_day: K1,
        reaeration_per_day: K2,
    };
    let da = 8.2 - 20.0 / 3.0;
    let la = corrected_ultimate_load(&rates, 3.2, da, 1.6556863963046841e-3)
        .expect("load correction");
    assert!((la - 6428.4705205803575).abs() < 1e-5);
}

#[test]
fn equal_rates_use_limiting_form() {
    let limiting = DeficitCurve {
        deoxygenation_per_day: 1.0,
        reaeration_per_day: 1.0,
        ultimate_load_mg_per_l: 10.0,
        initial_deficit_mg_per_l: 2.0,
    };
    assert!(limiting.rates_coincide());

    // t=1에서 극한형 값: K1·La·t·e^(-t) + Da·e^(-t) = 12/e
    let expected = 12.0 * (-1.0_f64).exp();
    assert!((limiting.deficit_at(1.0) - expected).abs() < 1e-12);

    // K2 → K1 극한에서 일반식과 이어져야 한다.
    let nearby = DeficitCurve {
        reaeration_per_day: 1.0 + 1e-6,
        ..limiting
    };
    assert!(!nearby.rates_coincide());
    for i in 0..=40 {
        let t = 0.05 * i as f64;
        assert!((limiting.deficit_at(t) - nearby.deficit_at(t)).abs() < 1e-4);
    }
}

#[test]
fn equal_rates_degenerate_load_is_rejected() {
    let rates = RateConstants {
        deoxygenation_per_day: 1.0,
        reaeration_per_day: 1.0,
    };
    let err = corrected_ultimate_load(&rates, 3.2, 1.5, 0.5).expect_err("degenerate rates");
    assert!(matches!(err, LoadError::DegenerateDenominator { .. }));
}

#[test]
fn no_crossing_scenario_reports_convergence_failure() {
    // 부하가 작아 부족량이 목표치에 끝내 도달하지 않는 경우
    let curve = DeficitCurve {
        deoxygenation_per_day: 0.3,
        reaeration_per_day: 0.4,
        ultimate_load_mg_per_l: 1.0,
        initial_deficit_mg_per_l: 0.5,
    };
    let solver = NewtonSolver {
        tolerance: 1e-9,
        max_iterations: 100,
    };
    assert!(find_critical_time(&curve, 3.2, &solver, 0.1).is_err());
}

#[test]
fn no_crossing_pipeline_surfaces_solver_error() {
    let mut cfg = Config::default();
    cfg.river.bod_mg_per_l = 1.0;
    cfg.river.do_mg_per_l = 8.0;
    cfg.river.temperature_c = 20.0;
    cfg.discharge.bod_mg_per_l = 1.0;
    cfg.discharge.do_mg_per_l = 8.0;
    cfg.discharge.temperature_c = 20.0;
    cfg.kinetics.deoxygenation_rate_20c_per_day = 0.3;
    cfg.kinetics.reaeration_rate_20c_per_day = 0.4;

    let err = sag::run_assessment(&cfg.assessment_input()).expect_err("no crossing");
    assert!(matches!(
        err,
        sag::AssessmentError::CriticalTime(_)
    ));
}

#[test]
fn rate_correction_is_monotonic_in_temperature() {
    let cfg = Config::default();
    let cold = cfg.kinetics.rates_at(20.0).expect("rates at 20");
    let warm = cfg.kinetics.rates_at(30.0).expect("rates at 30");
    assert!((cold.deoxygenation_per_day - 3.00).abs() < 1e-12);
    assert!((cold.reaeration_per_day - 0.23).abs() < 1e-12);
    assert!(warm.deoxygenation_per_day > cold.deoxygenation_per_day);
    assert!(warm.reaeration_per_day > cold.reaeration_per_day);
}

#[test]
fn saturation_correlation_matches_known_values() {
    assert!((oxygen_saturation_mg_per_l(20.0) - 9.021808).abs() < 1e-6);
    assert!(oxygen_saturation_mg_per_l(0.0) > oxygen_saturation_mg_per_l(10.0));
    assert!(oxygen_saturation_mg_per_l(10.0) > oxygen_saturation_mg_per_l(30.0));
}

#[test]
fn omitted_saturation_is_estimated_from_mixed_temperature() {
    let mut cfg = Config::default();
    cfg.standard.do_saturation_mg_per_l = None;
    let r = sag::run_assessment(&cfg.assessment_input()).expect("assessment");
    // 혼합 수온 28°C 기준 Elmore-Hayes 추정치
    assert!((r.saturation_mg_per_l - 7.723489152).abs() < 1e-6);
    assert!(r.critical_time_days > 0.0);
}

#[test]
fn profile_covers_requested_domain() {
    let cfg = Config::default();
    let r = sag::run_assessment(&cfg.assessment_input()).expect("assessment");

    assert_eq!(r.profile.len(), 100);
    assert!((r.profile[0].time_days - 0.0).abs() < 1e-12);
    assert!((r.profile[99].time_days - 1.0).abs() < 1e-9);
    for s in &r.profile {
        assert!(
            (s.dissolved_oxygen_mg_per_l - (r.saturation_mg_per_l - s.deficit_mg_per_l)).abs()
                < 1e-9
        );
    }
    // 프로파일은 보정된 부하 기준 곡선이어야 한다.
    let curve = reference_curve().with_load(r.ultimate_load_mg_per_l);
    assert!((r.profile[50].deficit_mg_per_l - curve.deficit_at(r.profile[50].time_days)).abs() < 1e-6);
}
