use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::RoomInput;

/// 실 입력 파일 로드 시 발생 가능한 오류.
#[derive(Debug)]
pub enum RoomFileError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for RoomFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomFileError::Io(e) => write!(f, "실 입력 파일 입출력 오류: {e}"),
            RoomFileError::Parse(e) => write!(f, "실 입력 파일 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for RoomFileError {}

impl From<std::io::Error> for RoomFileError {
    fn from(value: std::io::Error) -> Self {
        RoomFileError::Io(value)
    }
}

impl From<toml::de::Error> for RoomFileError {
    fn from(value: toml::de::Error) -> Self {
        RoomFileError::Parse(value)
    }
}

/// `[[rooms]]` 배열 테이블로 구성된 입력 문서.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomFile {
    #[serde(default)]
    pub rooms: Vec<RoomInput>,
}

/// TOML 문자열에서 실 입력 목록을 읽는다.
pub fn parse_rooms(content: &str) -> Result<Vec<RoomInput>, RoomFileError> {
    let file: RoomFile = toml::from_str(content)?;
    Ok(file.rooms)
}

/// TOML 파일에서 실 입력 목록을 읽는다.
pub fn load_rooms(path: &Path) -> Result<Vec<RoomInput>, RoomFileError> {
    let content = fs::read_to_string(path)?;
    let rooms = parse_rooms(&content)?;
    tracing::debug!(path = %path.display(), rooms = rooms.len(), "loaded room file");
    Ok(rooms)
}
