use crate::config::Config;
use crate::conversion;
use crate::i18n::Translator;
use crate::room::{RoomFileError, RoomValidationError};
use crate::ui_cli::{self, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 실 입력 파일 오류
    RoomFile(RoomFileError),
    /// 실 입력 완결성 오류
    Validation(RoomValidationError),
    /// 기타 입력 파일 파싱 오류
    InputParse(toml::de::Error),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::RoomFile(e) => write!(f, "{e}"),
            AppError::Validation(e) => write!(f, "입력 검사 오류: {e}"),
            AppError::InputParse(e) => write!(f, "입력 파일 파싱 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<RoomFileError> for AppError {
    fn from(value: RoomFileError) -> Self {
        AppError::RoomFile(value)
    }
}

impl From<RoomValidationError> for AppError {
    fn from(value: RoomValidationError) -> Self {
        AppError::Validation(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// 선택된 하위 명령을 실행한다.
pub fn run(command: &Command, config: &Config, tr: &Translator) -> Result<(), AppError> {
    match command {
        Command::Calc(args) => ui_cli::handle_calc(tr, config, args),
        Command::Export(args) => ui_cli::handle_export(tr, config, args),
        Command::AirChanges(args) => ui_cli::handle_air_changes(tr, args),
        Command::StaticPressure(args) => ui_cli::handle_static_pressure(tr, args),
        Command::Convert(args) => ui_cli::handle_convert(tr, args),
        Command::Psychro(args) => ui_cli::handle_psychro(tr, config, args),
    }
}
