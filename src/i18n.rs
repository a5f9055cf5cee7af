use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ASSESSMENT: &str = "main_menu.assessment";
    pub const MAIN_MENU_PROFILE: &str = "main_menu.profile";
    pub const MAIN_MENU_EXPORT: &str = "main_menu.export";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const ASSESSMENT_HEADING: &str = "assessment.heading";
    pub const RESULT_MIXED_BOD: &str = "result.mixed_bod";
    pub const RESULT_MIXED_DO: &str = "result.mixed_do";
    pub const RESULT_MIXED_TEMP: &str = "result.mixed_temp";
    pub const RESULT_K1: &str = "result.k1";
    pub const RESULT_K2: &str = "result.k2";
    pub const RESULT_SATURATION: &str = "result.saturation";
    pub const RESULT_STANDARD: &str = "result.standard";
    pub const RESULT_INITIAL_DEFICIT: &str = "result.initial_deficit";
    pub const RESULT_TARGET_DEFICIT: &str = "result.target_deficit";
    pub const RESULT_CRITICAL_TIME: &str = "result.critical_time";
    pub const RESULT_ULTIMATE_LOAD: &str = "result.ultimate_load";
    pub const RESULT_MAX_BOD: &str = "result.max_bod";
    pub const RESULT_TREATED_BOD: &str = "result.treated_bod";
    pub const RESULT_EFFICIENCY: &str = "result.efficiency";
    pub const WARNINGS_HEADING: &str = "result.warnings_heading";

    pub const PROFILE_HEADING: &str = "profile.heading";
    pub const PROFILE_TABLE_HEADER: &str = "profile.table_header";

    pub const PROMPT_CSV_PATH: &str = "export.prompt_csv_path";
    pub const EXPORT_DONE: &str = "export.done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const GUI_INPUTS_HEADING: &str = "gui.inputs_heading";
    pub const GUI_RIVER_HEADING: &str = "gui.river_heading";
    pub const GUI_DISCHARGE_HEADING: &str = "gui.discharge_heading";
    pub const GUI_KINETICS_HEADING: &str = "gui.kinetics_heading";
    pub const GUI_STANDARD_HEADING: &str = "gui.standard_heading";
    pub const GUI_SOLVER_HEADING: &str = "gui.solver_heading";
    pub const GUI_FLOW: &str = "gui.flow";
    pub const GUI_BOD: &str = "gui.bod";
    pub const GUI_DO: &str = "gui.do";
    pub const GUI_TEMP: &str = "gui.temp";
    pub const GUI_K1_20: &str = "gui.k1_20";
    pub const GUI_THETA_K1: &str = "gui.theta_k1";
    pub const GUI_K2_20: &str = "gui.k2_20";
    pub const GUI_THETA_K2: &str = "gui.theta_k2";
    pub const GUI_DO_STANDARD: &str = "gui.do_standard";
    pub const GUI_DO_SATURATION: &str = "gui.do_saturation";
    pub const GUI_SATURATION_AUTO: &str = "gui.saturation_auto";
    pub const GUI_COMPUTE: &str = "gui.compute";
    pub const GUI_SAVE_CONFIG: &str = "gui.save_config";
    pub const GUI_EXPORT_CSV: &str = "gui.export_csv";
    pub const GUI_RESULTS_HEADING: &str = "gui.results_heading";
    pub const GUI_SAVED: &str = "gui.saved";
    pub const GUI_LANGUAGE: &str = "gui.language";

    pub const CHART_AXIS_TIME: &str = "chart.axis_time";
    pub const CHART_AXIS_CONCENTRATION: &str = "chart.axis_concentration";
    pub const CHART_DEFICIT: &str = "chart.deficit";
    pub const CHART_DO: &str = "chart.do";
    pub const CHART_SATURATION: &str = "chart.saturation";
    pub const CHART_STANDARD: &str = "chart.standard";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Water Quality Toolbox ===",
        MAIN_MENU_ASSESSMENT => "1) 방류 부하 평가",
        MAIN_MENU_PROFILE => "2) 산소 부족 프로파일",
        MAIN_MENU_EXPORT => "3) 프로파일 CSV 저장",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ASSESSMENT_HEADING => "\n-- 방류 부하 평가 --",
        RESULT_MIXED_BOD => "혼합 BOD:",
        RESULT_MIXED_DO => "혼합 DO:",
        RESULT_MIXED_TEMP => "혼합 수온:",
        RESULT_K1 => "탈산소 계수 K1:",
        RESULT_K2 => "재폭기 계수 K2:",
        RESULT_SATURATION => "포화 DO:",
        RESULT_STANDARD => "기준 DO:",
        RESULT_INITIAL_DEFICIT => "초기 부족량 Da:",
        RESULT_TARGET_DEFICIT => "목표 부족량 Dc:",
        RESULT_CRITICAL_TIME => "임계 시점 tc:",
        RESULT_ULTIMATE_LOAD => "최종 BOD 부하 La:",
        RESULT_MAX_BOD => "하천에 방류 가능한 최대 BOD:",
        RESULT_TREATED_BOD => "처리 후 방류수 BOD 목표:",
        RESULT_EFFICIENCY => "필요한 처리 효율:",
        WARNINGS_HEADING => "주의:",
        PROFILE_HEADING => "\n-- 산소 부족 프로파일 --",
        PROFILE_TABLE_HEADER => "   t(day)     D(mg/l)    DO(mg/l)",
        PROMPT_CSV_PATH => "저장할 CSV 경로(엔터 시 profile.csv): ",
        EXPORT_DONE => "프로파일을 저장했습니다:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_LANGUAGE_OPTIONS => "1) 한국어  2) English  3) auto",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어 설정이 변경되었습니다:",
        GUI_INPUTS_HEADING => "입력",
        GUI_RIVER_HEADING => "하천 본류",
        GUI_DISCHARGE_HEADING => "방류수",
        GUI_KINETICS_HEADING => "반응 계수",
        GUI_STANDARD_HEADING => "수질 기준",
        GUI_SOLVER_HEADING => "근 탐색",
        GUI_FLOW => "유량 (m³/s)",
        GUI_BOD => "BOD (mg/l)",
        GUI_DO => "DO (mg/l)",
        GUI_TEMP => "수온 (°C)",
        GUI_K1_20 => "K1 (20°C, 1/day)",
        GUI_THETA_K1 => "K1 보정 계수 θ",
        GUI_K2_20 => "K2 (20°C, 1/day)",
        GUI_THETA_K2 => "K2 보정 계수 θ",
        GUI_DO_STANDARD => "기준 DO (mg/l)",
        GUI_DO_SATURATION => "포화 DO (mg/l)",
        GUI_SATURATION_AUTO => "수온으로 포화 DO 추정",
        GUI_COMPUTE => "계산",
        GUI_SAVE_CONFIG => "설정 저장",
        GUI_EXPORT_CSV => "프로파일 CSV 저장",
        GUI_RESULTS_HEADING => "결과",
        GUI_SAVED => "저장했습니다:",
        GUI_LANGUAGE => "언어",
        CHART_AXIS_TIME => "시간 (day)",
        CHART_AXIS_CONCENTRATION => "농도 (mg/l)",
        CHART_DEFICIT => "산소 부족량 D(t)",
        CHART_DO => "용존산소 DO",
        CHART_SATURATION => "포화 DO",
        CHART_STANDARD => "기준 DO",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Water Quality Toolbox ===",
        MAIN_MENU_ASSESSMENT => "1) Discharge Load Assessment",
        MAIN_MENU_PROFILE => "2) Oxygen Deficit Profile",
        MAIN_MENU_EXPORT => "3) Export Profile CSV",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ASSESSMENT_HEADING => "\n-- Discharge Load Assessment --",
        RESULT_MIXED_BOD => "Mixed BOD:",
        RESULT_MIXED_DO => "Mixed DO:",
        RESULT_MIXED_TEMP => "Mixed temperature:",
        RESULT_K1 => "Deoxygenation rate K1:",
        RESULT_K2 => "Reaeration rate K2:",
        RESULT_SATURATION => "Saturation DO:",
        RESULT_STANDARD => "Standard DO:",
        RESULT_INITIAL_DEFICIT => "Initial deficit Da:",
        RESULT_TARGET_DEFICIT => "Target deficit Dc:",
        RESULT_CRITICAL_TIME => "Critical time tc:",
        RESULT_ULTIMATE_LOAD => "Ultimate BOD load La:",
        RESULT_MAX_BOD => "Maximum permissible BOD to the river:",
        RESULT_TREATED_BOD => "Treated discharge BOD target:",
        RESULT_EFFICIENCY => "Required treatment efficiency:",
        WARNINGS_HEADING => "Warnings:",
        PROFILE_HEADING => "\n-- Oxygen Deficit Profile --",
        PROFILE_TABLE_HEADER => "   t(day)     D(mg/l)    DO(mg/l)",
        PROMPT_CSV_PATH => "CSV path to save (enter for profile.csv): ",
        EXPORT_DONE => "Profile saved:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) Korean  2) English  3) auto",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        GUI_INPUTS_HEADING => "Inputs",
        GUI_RIVER_HEADING => "River",
        GUI_DISCHARGE_HEADING => "Discharge",
        GUI_KINETICS_HEADING => "Rate constants",
        GUI_STANDARD_HEADING => "Quality standard",
        GUI_SOLVER_HEADING => "Root finding",
        GUI_FLOW => "Flow (m³/s)",
        GUI_BOD => "BOD (mg/l)",
        GUI_DO => "DO (mg/l)",
        GUI_TEMP => "Temperature (°C)",
        GUI_K1_20 => "K1 (20°C, 1/day)",
        GUI_THETA_K1 => "K1 correction θ",
        GUI_K2_20 => "K2 (20°C, 1/day)",
        GUI_THETA_K2 => "K2 correction θ",
        GUI_DO_STANDARD => "Standard DO (mg/l)",
        GUI_DO_SATURATION => "Saturation DO (mg/l)",
        GUI_SATURATION_AUTO => "Estimate saturation from temperature",
        GUI_COMPUTE => "Compute",
        GUI_SAVE_CONFIG => "Save settings",
        GUI_EXPORT_CSV => "Export profile CSV",
        GUI_RESULTS_HEADING => "Results",
        GUI_SAVED => "Saved:",
        GUI_LANGUAGE => "Language",
        CHART_AXIS_TIME => "Time (day)",
        CHART_AXIS_CONCENTRATION => "Concentration (mg/l)",
        CHART_DEFICIT => "Oxygen deficit D(t)",
        CHART_DO => "Dissolved oxygen",
        CHART_SATURATION => "Saturation DO",
        CHART_STANDARD => "Standard DO",
        _ => return None,
    })
}
