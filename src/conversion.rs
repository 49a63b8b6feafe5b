use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `cfm`, `l/s`, `gpm`, `tr`, `hp`, `ft`, `m2`, `cft` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Airflow => {
            let from = parse_airflow_unit(from_unit_str)?;
            let to = parse_airflow_unit(to_unit_str)?;
            Ok(convert_airflow(value, from, to))
        }
        QuantityKind::WaterFlow => {
            let from = parse_water_flow_unit(from_unit_str)?;
            let to = parse_water_flow_unit(to_unit_str)?;
            Ok(convert_water_flow(value, from, to))
        }
        QuantityKind::HeatRate => {
            let from = parse_heat_rate_unit(from_unit_str)?;
            let to = parse_heat_rate_unit(to_unit_str)?;
            Ok(convert_heat_rate(value, from, to))
        }
        QuantityKind::Power => {
            let from = parse_power_unit(from_unit_str)?;
            let to = parse_power_unit(to_unit_str)?;
            Ok(convert_power(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_airflow_unit(s: &str) -> Result<AirflowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "cfm" => Ok(AirflowUnit::Cfm),
        "l/s" | "lps" => Ok(AirflowUnit::LitrePerSecond),
        "m3/h" | "m^3/h" | "cmh" => Ok(AirflowUnit::CubicMeterPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_water_flow_unit(s: &str) -> Result<WaterFlowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "gpm" | "gal/min" => Ok(WaterFlowUnit::Gpm),
        "l/s" | "lps" => Ok(WaterFlowUnit::LitrePerSecond),
        "m3/h" | "m^3/h" => Ok(WaterFlowUnit::CubicMeterPerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_heat_rate_unit(s: &str) -> Result<HeatRateUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "btu/h" | "btu/hr" | "btuh" => Ok(HeatRateUnit::BtuPerHour),
        "w" | "watt" => Ok(HeatRateUnit::Watt),
        "kw" | "kilowatt" => Ok(HeatRateUnit::Kilowatt),
        "tr" | "ton" | "rt" => Ok(HeatRateUnit::TonRefrigeration),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kw" | "kilowatt" => Ok(PowerUnit::Kilowatt),
        "hp" | "horsepower" => Ok(PowerUnit::Horsepower),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
        "in" | "inch" | "\"" => Ok(LengthUnit::Inch),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "ft2" | "ft^2" | "sqft" | "sft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "ft3" | "ft^3" | "cft" | "cuft" => Ok(VolumeUnit::CubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
