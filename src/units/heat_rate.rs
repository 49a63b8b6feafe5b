use serde::{Deserialize, Serialize};

/// 열량(냉방 능력) 단위. 내부 기준은 Btu/hr이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatRateUnit {
    BtuPerHour,
    Watt,
    Kilowatt,
    /// 냉동톤 (12,000 Btu/hr)
    TonRefrigeration,
}

fn to_btuh(value: f64, unit: HeatRateUnit) -> f64 {
    match unit {
        HeatRateUnit::BtuPerHour => value,
        HeatRateUnit::Watt => value * 3.412,
        HeatRateUnit::Kilowatt => value * 3412.0,
        HeatRateUnit::TonRefrigeration => value * 12_000.0,
    }
}

fn from_btuh(btuh: f64, unit: HeatRateUnit) -> f64 {
    match unit {
        HeatRateUnit::BtuPerHour => btuh,
        HeatRateUnit::Watt => btuh / 3.412,
        HeatRateUnit::Kilowatt => btuh / 3412.0,
        HeatRateUnit::TonRefrigeration => btuh / 12_000.0,
    }
}

/// 열량을 변환한다.
pub fn convert_heat_rate(value: f64, from: HeatRateUnit, to: HeatRateUnit) -> f64 {
    from_btuh(to_btuh(value, from), to)
}
