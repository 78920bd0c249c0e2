use clap::Parser;
use vessel_sizing::app::{self, AppError, Cli};
use vessel_sizing::config;
use vessel_sizing::i18n::{self, keys, Translator};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 한 번의 사이징을 실행한다.
fn main() {
    let cli = Cli::parse();
    let cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("오류: {err}");
            std::process::exit(1);
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), cfg.language_hint());
    let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());

    if let Err(err) = app::run(&cli, &cfg, &tr) {
        match err {
            AppError::NoInput => eprintln!("{}", tr.t(keys::NO_INPUT)),
            other => eprintln!("{}: {other}", tr.t(keys::ERROR_PREFIX)),
        }
        std::process::exit(1);
    }
}
