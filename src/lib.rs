//! 클린룸 HVAC 부하 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod cleanroom;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod hvac;
pub mod i18n;
pub mod quantity;
pub mod room;
pub mod telemetry;
pub mod ui_cli;
pub mod units;

pub use constants::HvacConstants;
pub use hvac::{CalculationResults, HvacCalculator};
pub use room::{Room, RoomDefaults, RoomInput};
