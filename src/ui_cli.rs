use std::fs;
use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::sag::{self, profile_csv, AssessmentResult};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Assessment,
    Profile,
    ExportCsv,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ASSESSMENT));
    println!("{}", tr.t(keys::MAIN_MENU_PROFILE));
    println!("{}", tr.t(keys::MAIN_MENU_EXPORT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Assessment),
            "2" => return Ok(MenuChoice::Profile),
            "3" => return Ok(MenuChoice::ExportCsv),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 방류 부하 평가를 실행하고 보고서를 출력한다.
pub fn handle_assessment(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ASSESSMENT_HEADING));
    let result = sag::run_assessment(&cfg.assessment_input())?;
    print_report(tr, &result);
    Ok(())
}

/// 평가 결과 보고서를 출력한다. `--report` 단일 실행에서도 같이 쓴다.
pub fn print_report(tr: &Translator, r: &AssessmentResult) {
    println!("{} {:.2} mg/l", tr.t(keys::RESULT_MIXED_BOD), r.mixed.bod_mg_per_l);
    println!("{} {:.2} mg/l", tr.t(keys::RESULT_MIXED_DO), r.mixed.do_mg_per_l);
    println!("{} {:.1} °C", tr.t(keys::RESULT_MIXED_TEMP), r.mixed.temperature_c);
    println!("{} {:.4} /day", tr.t(keys::RESULT_K1), r.rates.deoxygenation_per_day);
    println!("{} {:.4} /day", tr.t(keys::RESULT_K2), r.rates.reaeration_per_day);
    println!("{} {:.2} mg/l", tr.t(keys::RESULT_SATURATION), r.saturation_mg_per_l);
    println!("{} {:.2} mg/l", tr.t(keys::RESULT_STANDARD), r.do_standard_mg_per_l);
    println!("{} {:.3} mg/l", tr.t(keys::RESULT_INITIAL_DEFICIT), r.initial_deficit_mg_per_l);
    println!("{} {:.3} mg/l", tr.t(keys::RESULT_TARGET_DEFICIT), r.target_deficit_mg_per_l);
    println!("{} {:.5} day", tr.t(keys::RESULT_CRITICAL_TIME), r.critical_time_days);
    println!("{} {:.2} mg/l", tr.t(keys::RESULT_ULTIMATE_LOAD), r.ultimate_load_mg_per_l);
    println!(
        "{} {:.2} mg/l",
        tr.t(keys::RESULT_MAX_BOD),
        r.compliance.max_permissible_bod_mg_per_l
    );
    println!(
        "{} {:.2} mg/l",
        tr.t(keys::RESULT_TREATED_BOD),
        r.compliance.treated_discharge_bod_mg_per_l
    );
    println!(
        "{} {:.1} %",
        tr.t(keys::RESULT_EFFICIENCY),
        r.compliance.required_efficiency_percent
    );

    if !r.warnings.is_empty() || !r.compliance.warnings.is_empty() {
        println!("{}", tr.t(keys::WARNINGS_HEADING));
        for w in r.warnings.iter().chain(r.compliance.warnings.iter()) {
            println!(" - {w}");
        }
    }
}

/// 부족량/용존산소 프로파일을 표로 출력한다.
pub fn handle_profile(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let result = sag::run_assessment(&cfg.assessment_input())?;
    println!("{}", tr.t(keys::PROFILE_HEADING));
    println!("{}", tr.t(keys::PROFILE_TABLE_HEADER));
    for s in &result.profile {
        println!(
            "{:>9.4} {:>11.3} {:>11.3}",
            s.time_days, s.deficit_mg_per_l, s.dissolved_oxygen_mg_per_l
        );
    }
    Ok(())
}

/// 프로파일을 CSV 파일로 저장한다.
pub fn handle_export_csv(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let result = sag::run_assessment(&cfg.assessment_input())?;
    let path = read_line(tr.t(keys::PROMPT_CSV_PATH))?;
    let path = match path.trim() {
        "" => "profile.csv",
        other => other,
    }
    .to_string();
    fs::write(&path, profile_csv(&result.profile))?;
    println!("{} {path}", tr.t(keys::EXPORT_DONE));
    Ok(())
}

/// 설정 메뉴를 처리한다. 현재는 언어 변경만 제공한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.language = "ko".into(),
        "2" => cfg.language = "en".into(),
        "3" => cfg.language = "auto".into(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
