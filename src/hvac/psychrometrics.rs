//! 습공기 보조 계산. 부하 계산 본체와 별개로 설계 조건을 추정할 때 쓴다.

use crate::constants::HvacConstants;
use crate::units::temperature;

/// Magnus 식 계수 a
const MAGNUS_A: f64 = 17.27;
/// Magnus 식 계수 b [°C]
const MAGNUS_B: f64 = 237.7;
/// 1 lb 당 grain
const GRAINS_PER_POUND: f64 = 7000.0;

/// °C → °F
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    temperature::celsius_to_fahrenheit(celsius)
}

/// °F → °C
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    temperature::fahrenheit_to_celsius(fahrenheit)
}

/// 건구온도[°C]와 상대습도[%]로 이슬점[°C]을 근사한다 (Magnus 식).
///
/// RH가 0이면 ln(0) = -inf 이 되어 결과는 NaN/inf 쪽으로 간다.
pub fn dew_point_c(temp_c: f64, rh_pct: f64) -> f64 {
    let alpha = (MAGNUS_A * temp_c) / (MAGNUS_B + temp_c) + (rh_pct / 100.0).ln();
    (MAGNUS_B * alpha) / (MAGNUS_A - alpha)
}

/// 건구온도[°F]와 상대습도[%]로 건공기 1 lb 당 수분량[grain]을 근사한다.
pub fn grains_of_moisture(temp_f: f64, rh_pct: f64, k: &HvacConstants) -> f64 {
    let t = temp_f - 32.0;
    let saturation_pressure = 0.62198 * ((17.2694 * t) / (t + 238.3)).exp();
    let vapor_pressure = (rh_pct / 100.0) * saturation_pressure;
    GRAINS_PER_POUND * (vapor_pressure / (k.standard_pressure_psia - vapor_pressure))
}

/// 임의 온도[°F]·압력[psia]에서의 공기 밀도 [lb/ft³]
pub fn air_density(temp_f: f64, pressure_psia: f64, k: &HvacConstants) -> f64 {
    let absolute_temp_r = temp_f + 459.67;
    k.air_density_lb_per_ft3
        * (k.density_reference_temp_r / absolute_temp_r)
        * (pressure_psia / k.standard_pressure_psia)
}

/// 표준 대기압에서의 공기 밀도 [lb/ft³]
pub fn air_density_at_standard_pressure(temp_f: f64, k: &HvacConstants) -> f64 {
    air_density(temp_f, k.standard_pressure_psia, k)
}

/// 한 지점의 습공기 상태 요약.
#[derive(Debug, Clone, PartialEq)]
pub struct AirState {
    pub dry_bulb_c: f64,
    pub dry_bulb_f: f64,
    pub relative_humidity_pct: f64,
    pub dew_point_c: f64,
    pub grains_per_lb: f64,
    pub density_lb_per_ft3: f64,
}

/// 건구온도[°C]와 상대습도[%]로 습공기 상태를 계산한다.
pub fn air_state(dry_bulb_c: f64, rh_pct: f64, k: &HvacConstants) -> AirState {
    let dry_bulb_f = celsius_to_fahrenheit(dry_bulb_c);
    AirState {
        dry_bulb_c,
        dry_bulb_f,
        relative_humidity_pct: rh_pct,
        dew_point_c: dew_point_c(dry_bulb_c, rh_pct),
        grains_per_lb: grains_of_moisture(dry_bulb_f, rh_pct, k),
        density_lb_per_ft3: air_density_at_standard_pressure(dry_bulb_f, k),
    }
}
