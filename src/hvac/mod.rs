//! 클린룸 HVAC 부하 계산 엔진.
//! 계산식(formulas) → 실 단위 계산·집계(calculator) → CSV 출력(csv_export) 순으로 구성한다.

pub mod calculator;
pub mod csv_export;
pub mod formulas;
pub mod psychrometrics;

pub use calculator::{
    aggregate, calculate_room, room_heat_loads, CalculationResults, HeatLoads, HvacCalculator,
};
pub use csv_export::{export_csv, CSV_COLUMN_COUNT, CSV_HEADERS};
