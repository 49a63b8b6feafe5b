use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::HvacConstants;
use crate::room::RoomDefaults;

/// 설정 파일 기본 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 출력 언어 코드 (auto/ko/en)
    pub language: String,
    /// 계산 상수
    pub constants: HvacConstants,
    /// 실 입력 기본값
    pub room_defaults: RoomDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            constants: HvacConstants::default(),
            room_defaults: RoomDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 만들어 저장한다.
///
/// 파일에 없는 항목은 기본값으로 채운다. 기존 파일을 읽거나 해석하지 못하면 오류를 돌려준다.
/// 기본 설정 파일을 쓰지 못한 경우에만 경고 후 기본값으로 계속한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        match cfg.save(path) {
            Ok(()) => tracing::info!(path = %path.display(), "default config written"),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "default config not written")
            }
        }
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
