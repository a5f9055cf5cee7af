use clap::Parser;
use water_quality_toolbox::{app, config, i18n, sag, ui_cli};

/// Streeter-Phelps 기반 하천 수질 평가 CLI.
#[derive(Debug, Parser)]
#[command(name = "water_quality_toolbox_cli")]
struct Cli {
    /// UI 언어 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 대화형 메뉴 없이 평가를 한 번 실행하고 종료한다
    #[arg(long)]
    report: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&lang);

    if cli.report {
        let result = sag::run_assessment(&cfg.assessment_input())?;
        ui_cli::print_report(&tr, &result);
        return Ok(());
    }

    app::run(&mut cfg, &tr)?;
    Ok(())
}
