use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::input::InputUnits;
use crate::report::ReportUnits;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ko / en / auto
    pub language: String,
    /// 단위를 선언하지 않은 입력 스냅샷에 적용할 단위
    pub input_units: InputUnits,
    pub report_units: ReportUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            input_units: InputUnits::default(),
            report_units: ReportUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 만들어 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 설정 언어. "auto"면 `None`.
    pub fn language_hint(&self) -> Option<&str> {
        match self.language.trim() {
            "" | "auto" => None,
            code => Some(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{LengthUnit, TemperatureUnit};

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            language = "en"
            [input_units]
            temperature = "Fahrenheit"
            pressure = "Psi"
            length = "Millimeter"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.language_hint(), Some("en"));
        assert_eq!(cfg.input_units.temperature, TemperatureUnit::Fahrenheit);
        assert_eq!(cfg.input_units.length, LengthUnit::Millimeter);
        assert_eq!(cfg.report_units, ReportUnits::default());
    }

    #[test]
    fn auto_language_has_no_hint() {
        assert_eq!(Config::default().language_hint(), None);
    }
}
