use water_quality_toolbox::config::Config;

#[test]
fn default_config_round_trips_through_toml() {
    let cfg = Config::default();
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    assert!(text.contains("language"));
    assert!(text.contains("[river]"));
    assert!(text.contains("[solver]"));

    let parsed: Config = toml::from_str(&text).expect("parse");
    assert_eq!(parsed.language, "auto");
    assert!((parsed.river.flow_m3_per_s - 250.0).abs() < 1e-12);
    assert!((parsed.discharge.bod_mg_per_l - 800.0).abs() < 1e-12);
    assert_eq!(parsed.standard.do_saturation_mg_per_l, Some(8.2));
    assert_eq!(parsed.profile.samples, 100);
}

#[test]
fn omitted_saturation_parses_as_none() {
    let cfg = Config::default();
    let mut text = toml::to_string_pretty(&cfg).expect("serialize");
    text = text
        .lines()
        .filter(|l| !l.starts_with("do_saturation_mg_per_l"))
        .collect::<Vec<_>>()
        .join("\n");
    let parsed: Config = toml::from_str(&text).expect("parse");
    assert_eq!(parsed.standard.do_saturation_mg_per_l, None);
}
