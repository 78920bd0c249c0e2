use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::datasheet::{DataSheetExport, DataSheetInput};
use crate::i18n::{keys, Translator};
use crate::input::SizingInput;
use crate::report::SizingReport;
use crate::separator;
use crate::ui_cli;

/// 명령행 인자.
#[derive(Debug, Clone, Parser)]
#[command(name = "vessel_sizing_cli", version, about = "Vertical gas-liquid separator sizing")]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 표시 언어 (ko/en/auto)
    #[arg(long)]
    pub lang: Option<String>,
    /// 언어팩 디렉터리
    #[arg(long)]
    pub locales: Option<PathBuf>,
    /// 입력 스냅샷 (TOML)
    pub input: Option<PathBuf>,
    /// 공정 데이터시트 값 (TOML). 입력 스냅샷의 공정 조건에 덮어쓴다
    #[arg(long)]
    pub sheet: Option<PathBuf>,
    /// 보고서 저장 경로
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// 데이터시트 내보내기 경로
    #[arg(long)]
    pub datasheet: Option<PathBuf>,
    /// 재질 목록 출력
    #[arg(long)]
    pub list_materials: bool,
    /// 호칭경별 스케줄 출력
    #[arg(long, value_name = "NOMINAL")]
    pub schedules: Option<String>,
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("{}: 입력 파싱 오류: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 입력 파일도 목록 옵션도 없음
    #[error("입력 파일이 없음")]
    NoInput,
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| AppError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    fs::write(path, content).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// 입력 스냅샷과 선택적 데이터시트 값을 읽어 엔진 입력을 만든다.
pub fn load_input(path: &Path, sheet: Option<&Path>, cfg: &Config) -> Result<SizingInput, AppError> {
    let mut input: SizingInput = read_toml(path)?;
    if input.units.is_none() {
        input.units = Some(cfg.input_units);
    }
    if let Some(sheet) = sheet {
        let values: DataSheetInput = read_toml(sheet)?;
        values.apply_to(&mut input.process);
    }
    Ok(input)
}

/// 한 번의 CLI 실행을 처리한다.
pub fn run(cli: &Cli, cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    if cli.list_materials {
        ui_cli::print_materials(tr);
    }
    if let Some(nominal) = &cli.schedules {
        ui_cli::print_schedules(nominal, tr);
    }
    let Some(path) = &cli.input else {
        if cli.list_materials || cli.schedules.is_some() {
            return Ok(());
        }
        return Err(AppError::NoInput);
    };

    let input = load_input(path, cli.sheet.as_deref(), cfg)?;
    let result = separator::size_vessel(&input);
    let report = SizingReport::from_result(&result, &input.project, cfg.report_units);
    ui_cli::print_report(&report, tr);

    if let Some(out) = &cli.output {
        write_file(out, &report.to_toml()?)?;
        println!("{} {}", tr.t(keys::REPORT_WRITTEN), out.display());
    }
    if let Some(out) = &cli.datasheet {
        let export = DataSheetExport::new(&input, &result);
        write_file(out, &export.to_toml()?)?;
        println!("{} {}", tr.t(keys::DATASHEET_WRITTEN), out.display());
    }
    Ok(())
}
