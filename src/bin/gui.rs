#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.
//! 시나리오 입력을 편집하고 산소 부족 곡선을 차트로 보여준다.

use eframe::{egui, App, Frame};
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use water_quality_toolbox::{
    config,
    i18n::{self, keys},
    river::StreamState,
    sag::{self, profile_csv, AssessmentResult},
    solver::SolverMethod,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Water Quality Toolbox",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 한글 지원 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래의 폰트
/// 2) Windows/Linux 시스템 폰트
/// 3) 모두 실패 시 Err를 반환하고 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_candidates = [
        "assets/fonts/malgun.ttf",
        "assets/fonts/NotoSansKR-Regular.ttf",
    ];
    for cand in asset_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    if let Some(windir) = env::var_os("WINDIR") {
        let fonts_dir = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts_dir.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    let system_candidates = [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    ];
    for cand in system_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    Err("Font not found. Korean labels may not render with the default fonts.".into())
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    /// 포화 DO를 수온에서 추정할지 여부. 체크 해제 시 가정값을 쓴다.
    saturation_auto: bool,
    /// 체크박스를 되돌릴 때 복원할 가정값
    assumed_saturation: f64,
    result: Option<AssessmentResult>,
    error: Option<String>,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang = i18n::resolve_language(config.language.as_str(), None);
        let tr = i18n::Translator::new(&lang);
        let saturation_auto = config.standard.do_saturation_mg_per_l.is_none();
        let assumed_saturation = config.standard.do_saturation_mg_per_l.unwrap_or(8.2);
        let mut app = Self {
            config,
            tr,
            saturation_auto,
            assumed_saturation,
            result: None,
            error: None,
            status: None,
        };
        app.recompute();
        app
    }

    fn recompute(&mut self) {
        match sag::run_assessment(&self.config.assessment_input()) {
            Ok(r) => {
                self.result = Some(r);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
    }

    fn save_config(&mut self) {
        match self.config.save() {
            Ok(()) => {
                self.status = Some(format!("{} config.toml", self.tr.t(keys::GUI_SAVED)));
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn export_csv(&mut self) {
        let Some(result) = &self.result else {
            return;
        };
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("profile.csv")
            .save_file()
        else {
            return;
        };
        match fs::write(&path, profile_csv(&result.profile)) {
            Ok(()) => {
                self.status = Some(format!(
                    "{} {}",
                    self.tr.t(keys::GUI_SAVED),
                    path.display()
                ));
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    fn stream_inputs(ui: &mut egui::Ui, tr: &i18n::Translator, id: &str, state: &mut StreamState) {
        egui::Grid::new(id).num_columns(2).show(ui, |ui| {
            ui.label(tr.t(keys::GUI_FLOW));
            ui.add(egui::DragValue::new(&mut state.flow_m3_per_s).speed(1.0));
            ui.end_row();
            ui.label(tr.t(keys::GUI_BOD));
            ui.add(egui::DragValue::new(&mut state.bod_mg_per_l).speed(1.0));
            ui.end_row();
            ui.label(tr.t(keys::GUI_DO));
            ui.add(egui::DragValue::new(&mut state.do_mg_per_l).speed(0.1));
            ui.end_row();
            ui.label(tr.t(keys::GUI_TEMP));
            ui.add(egui::DragValue::new(&mut state.temperature_c).speed(0.5));
            ui.end_row();
        });
    }

    fn inputs_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_INPUTS_HEADING));

        ui.horizontal(|ui| {
            ui.label(self.tr.t(keys::GUI_LANGUAGE));
            let mut lang = self.config.language.clone();
            egui::ComboBox::from_id_source("language")
                .selected_text(lang.clone())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut lang, "auto".to_string(), "auto");
                    ui.selectable_value(&mut lang, "ko".to_string(), "한국어");
                    ui.selectable_value(&mut lang, "en".to_string(), "English");
                });
            if lang != self.config.language {
                self.config.language = lang;
                let resolved = i18n::resolve_language(self.config.language.as_str(), None);
                self.tr = i18n::Translator::new(&resolved);
            }
        });
        ui.separator();

        ui.label(self.tr.t(keys::GUI_RIVER_HEADING));
        Self::stream_inputs(ui, &self.tr, "river_grid", &mut self.config.river);
        ui.separator();

        ui.label(self.tr.t(keys::GUI_DISCHARGE_HEADING));
        Self::stream_inputs(ui, &self.tr, "discharge_grid", &mut self.config.discharge);
        ui.separator();

        ui.label(self.tr.t(keys::GUI_KINETICS_HEADING));
        egui::Grid::new("kinetics_grid").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::GUI_K1_20));
            ui.add(
                egui::DragValue::new(&mut self.config.kinetics.deoxygenation_rate_20c_per_day)
                    .speed(0.01),
            );
            ui.end_row();
            ui.label(self.tr.t(keys::GUI_THETA_K1));
            ui.add(
                egui::DragValue::new(&mut self.config.kinetics.deoxygenation_theta).speed(0.001),
            );
            ui.end_row();
            ui.label(self.tr.t(keys::GUI_K2_20));
            ui.add(
                egui::DragValue::new(&mut self.config.kinetics.reaeration_rate_20c_per_day)
                    .speed(0.01),
            );
            ui.end_row();
            ui.label(self.tr.t(keys::GUI_THETA_K2));
            ui.add(egui::DragValue::new(&mut self.config.kinetics.reaeration_theta).speed(0.001));
            ui.end_row();
        });
        ui.separator();

        ui.label(self.tr.t(keys::GUI_STANDARD_HEADING));
        egui::Grid::new("standard_grid").num_columns(2).show(ui, |ui| {
            ui.label(self.tr.t(keys::GUI_DO_STANDARD));
            ui.add(
                egui::DragValue::new(&mut self.config.standard.do_standard_mg_per_l).speed(0.1),
            );
            ui.end_row();
        });
        if ui
            .checkbox(&mut self.saturation_auto, self.tr.t(keys::GUI_SATURATION_AUTO))
            .changed()
        {
            self.config.standard.do_saturation_mg_per_l = if self.saturation_auto {
                None
            } else {
                Some(self.assumed_saturation)
            };
        }
        if let Some(assumed) = self.config.standard.do_saturation_mg_per_l.as_mut() {
            ui.horizontal(|ui| {
                ui.label(self.tr.t(keys::GUI_DO_SATURATION));
                ui.add(egui::DragValue::new(assumed).speed(0.1));
            });
            self.assumed_saturation = *assumed;
        }
        ui.separator();

        ui.label(self.tr.t(keys::GUI_SOLVER_HEADING));
        egui::ComboBox::from_id_source("solver_method")
            .selected_text(match self.config.solver.method {
                SolverMethod::Newton => "Newton",
                SolverMethod::Secant => "Secant",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.config.solver.method, SolverMethod::Newton, "Newton");
                ui.selectable_value(&mut self.config.solver.method, SolverMethod::Secant, "Secant");
            });
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button(self.tr.t(keys::GUI_COMPUTE)).clicked() {
                self.recompute();
            }
            if ui.button(self.tr.t(keys::GUI_SAVE_CONFIG)).clicked() {
                self.save_config();
            }
            if ui.button(self.tr.t(keys::GUI_EXPORT_CSV)).clicked() {
                self.export_csv();
            }
        });
    }

    fn results_panel(&self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.heading(tr.t(keys::GUI_RESULTS_HEADING));

        if let Some(err) = &self.error {
            ui.colored_label(egui::Color32::RED, format!("{}: {err}", tr.t(keys::ERROR_PREFIX)));
            return;
        }
        let Some(r) = &self.result else {
            return;
        };

        egui::Grid::new("results_grid").num_columns(2).show(ui, |ui| {
            ui.label(tr.t(keys::RESULT_MIXED_BOD));
            ui.label(format!("{:.2} mg/l", r.mixed.bod_mg_per_l));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_MIXED_DO));
            ui.label(format!("{:.2} mg/l", r.mixed.do_mg_per_l));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_MIXED_TEMP));
            ui.label(format!("{:.1} °C", r.mixed.temperature_c));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_K1));
            ui.label(format!("{:.4} /day", r.rates.deoxygenation_per_day));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_K2));
            ui.label(format!("{:.4} /day", r.rates.reaeration_per_day));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_CRITICAL_TIME));
            ui.label(format!("{:.5} day", r.critical_time_days));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_ULTIMATE_LOAD));
            ui.label(format!("{:.2} mg/l", r.ultimate_load_mg_per_l));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_MAX_BOD));
            ui.label(format!("{:.2} mg/l", r.compliance.max_permissible_bod_mg_per_l));
            ui.end_row();
            ui.label(tr.t(keys::RESULT_EFFICIENCY));
            ui.label(format!("{:.1} %", r.compliance.required_efficiency_percent));
            ui.end_row();
        });

        for w in r.warnings.iter().chain(r.compliance.warnings.iter()) {
            ui.colored_label(egui::Color32::YELLOW, format!("⚠ {w}"));
        }
        if let Some(status) = &self.status {
            ui.label(status);
        }

        ui.separator();
        self.sag_chart(ui, r);
    }

    fn sag_chart(&self, ui: &mut egui::Ui, r: &AssessmentResult) {
        let tr = &self.tr;
        let deficit: PlotPoints = r
            .profile
            .iter()
            .map(|s| [s.time_days, s.deficit_mg_per_l])
            .collect();
        let dissolved: PlotPoints = r
            .profile
            .iter()
            .map(|s| [s.time_days, s.dissolved_oxygen_mg_per_l])
            .collect();

        Plot::new("sag_profile")
            .legend(Legend::default())
            .x_axis_label(tr.t(keys::CHART_AXIS_TIME))
            .y_axis_label(tr.t(keys::CHART_AXIS_CONCENTRATION))
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(deficit).name(tr.t(keys::CHART_DEFICIT)));
                plot_ui.line(Line::new(dissolved).name(tr.t(keys::CHART_DO)));
                plot_ui.hline(
                    HLine::new(r.saturation_mg_per_l)
                        .style(egui_plot::LineStyle::dashed_loose())
                        .name(tr.t(keys::CHART_SATURATION)),
                );
                plot_ui.hline(
                    HLine::new(r.do_standard_mg_per_l)
                        .style(egui_plot::LineStyle::dashed_loose())
                        .name(tr.t(keys::CHART_STANDARD)),
                );
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("inputs")
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.inputs_panel(ui);
                });
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.results_panel(ui);
        });
    }
}
