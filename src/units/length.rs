use serde::{Deserialize, Serialize};

/// 길이 단위. 실 치수는 m, 층고는 ft, 배관경은 inch를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Foot,
    Inch,
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value,
        LengthUnit::Millimeter => value / 1000.0,
        LengthUnit::Foot => value * 0.3048,
        LengthUnit::Inch => value * 0.0254,
    }
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m,
        LengthUnit::Millimeter => value_m * 1000.0,
        LengthUnit::Foot => value_m / 0.3048,
        LengthUnit::Inch => value_m / 0.0254,
    }
}

/// 길이를 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    from_meter(to_meter(value, from), to)
}
