//! HVAC 실무 단위 정의 및 변환 모듈 모음.

pub mod airflow;
pub mod area;
pub mod heat_rate;
pub mod length;
pub mod power;
pub mod temperature;
pub mod volume;
pub mod water_flow;

pub use airflow::{convert_airflow, AirflowUnit};
pub use area::{convert_area, AreaUnit};
pub use heat_rate::{convert_heat_rate, HeatRateUnit};
pub use length::{convert_length, LengthUnit};
pub use power::{convert_power, PowerUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use volume::{convert_volume, VolumeUnit};
pub use water_flow::{convert_water_flow, WaterFlowUnit};
