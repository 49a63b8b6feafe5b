use serde::{Deserialize, Serialize};

/// 풍량 단위. 내부 기준은 CFM이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirflowUnit {
    Cfm,
    LitrePerSecond,
    CubicMeterPerHour,
}

const LPS_PER_CFM: f64 = 0.471947;
const M3H_PER_CFM: f64 = 1.699011;

fn to_cfm(value: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::Cfm => value,
        AirflowUnit::LitrePerSecond => value / LPS_PER_CFM,
        AirflowUnit::CubicMeterPerHour => value / M3H_PER_CFM,
    }
}

fn from_cfm(cfm: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::Cfm => cfm,
        AirflowUnit::LitrePerSecond => cfm * LPS_PER_CFM,
        AirflowUnit::CubicMeterPerHour => cfm * M3H_PER_CFM,
    }
}

/// 풍량을 변환한다.
pub fn convert_airflow(value: f64, from: AirflowUnit, to: AirflowUnit) -> f64 {
    from_cfm(to_cfm(value, from), to)
}
