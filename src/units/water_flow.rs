use serde::{Deserialize, Serialize};

/// 냉온수 유량 단위. 내부 기준은 US GPM이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterFlowUnit {
    Gpm,
    LitrePerSecond,
    CubicMeterPerHour,
}

const LPS_PER_GPM: f64 = 0.0630902;

fn to_gpm(value: f64, unit: WaterFlowUnit) -> f64 {
    match unit {
        WaterFlowUnit::Gpm => value,
        WaterFlowUnit::LitrePerSecond => value / LPS_PER_GPM,
        WaterFlowUnit::CubicMeterPerHour => value / 3.6 / LPS_PER_GPM,
    }
}

fn from_gpm(gpm: f64, unit: WaterFlowUnit) -> f64 {
    match unit {
        WaterFlowUnit::Gpm => gpm,
        WaterFlowUnit::LitrePerSecond => gpm * LPS_PER_GPM,
        WaterFlowUnit::CubicMeterPerHour => gpm * LPS_PER_GPM * 3.6,
    }
}

/// 유량을 변환한다.
pub fn convert_water_flow(value: f64, from: WaterFlowUnit, to: WaterFlowUnit) -> f64 {
    from_gpm(to_gpm(value, from), to)
}
