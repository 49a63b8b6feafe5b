use clap::Parser;
use std::process::ExitCode;

use cleanroom_hvac_toolbox::{
    app::{self, AppError},
    config, i18n, telemetry,
    ui_cli::Cli,
};

/// 프로그램의 엔트리 포인트. 설정과 언어를 결정한 뒤 하위 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.json_logs);

    let cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            let lang = i18n::resolve_language(cli.lang.as_deref(), None);
            let tr = i18n::Translator::new_with_pack(&lang, None);
            eprintln!("{}: {}", tr.t(i18n::keys::ERROR_PREFIX), AppError::from(err));
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);

    match app::run(&cli.command, &cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}
