//! 클린룸 등급별 환기 횟수 표와 필터/정압 집계. 실 입력값을 미리 채울 때 쓴다.

pub mod air_changes;
pub mod pressure_drop;

pub use air_changes::{air_changes_for, find_class, AirChangeRate, GmpStandard};
pub use pressure_drop::{
    filtration_stages, parse_int_prefix, static_pressure, PressureDropItem, PressureDropSheet,
};
