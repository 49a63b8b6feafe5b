//! 실 단위 부하 계산식.
//!
//! 모든 함수는 순수 함수이며 입력을 검증하지 않는다. 0으로 나누는 경우 등은
//! IEEE-754 규칙대로 inf/NaN을 그대로 돌려준다.

use crate::constants::HvacConstants;

/// 냉수 유량[GPM] 상한과 그에 대응하는 배관 호칭경[inch]. 상한은 포함 구간이다.
pub const PIPE_SIZE_STEPS: [(f64, f64); 5] = [
    (10.0, 0.75),
    (25.0, 1.0),
    (50.0, 1.5),
    (100.0, 2.0),
    (200.0, 2.5),
];

/// 모든 구간을 넘는 유량에 쓰는 배관 호칭경[inch].
pub const MAX_PIPE_SIZE_IN: f64 = 3.0;

/// 바닥 면적 [m²]
pub fn area(length_m: f64, width_m: f64) -> f64 {
    length_m * width_m
}

/// 면적[m²]과 높이[ft]로 체적[ft³]을 계산한다. 높이를 m로 바꾼 뒤 m³ → ft³ 환산한다.
pub fn volume(area_m2: f64, height_ft: f64, k: &HvacConstants) -> f64 {
    let height_m = height_ft * k.foot_to_meter;
    let volume_m3 = area_m2 * height_m;
    volume_m3 * k.cubic_meter_to_cubic_foot
}

/// 환기 횟수 기준 필요 풍량 [CFM]
pub fn required_cfm(volume_cft: f64, air_changes_per_hour: f64) -> f64 {
    (volume_cft * air_changes_per_hour) / 60.0
}

/// 외기 풍량 [CFM]
pub fn fresh_air_cfm(room_cfm: f64, fresh_air_pct: f64) -> f64 {
    (room_cfm * fresh_air_pct) / 100.0
}

/// 현열 부하 입력.
#[derive(Debug, Clone, Copy)]
pub struct SensibleLoadInput {
    pub area_m2: f64,
    pub lighting_load_w_per_sqft: f64,
    pub equipment_load_kw: f64,
    pub occupancy: f64,
    pub fresh_air_cfm: f64,
    pub delta_temp_f: f64,
}

/// 실 현열 부하(RSH) [Btu/hr]. 조명 + 기기 + 재실자 + 외기 현열의 합이다.
pub fn sensible_heat(input: SensibleLoadInput, k: &HvacConstants) -> f64 {
    let lighting = input.area_m2 * input.lighting_load_w_per_sqft * k.watt_to_btu_per_hour;
    let equipment = input.equipment_load_kw * k.kilowatt_to_btu_per_hour;
    let people = input.occupancy * k.people_sensible_btu_per_hour;
    let fresh_air = input.fresh_air_cfm
        * k.air_density_lb_per_ft3
        * k.air_specific_heat_btu_per_lb_f
        * input.delta_temp_f;
    lighting + equipment + people + fresh_air
}

/// 실 잠열 부하(RLH) [Btu/hr]. 재실자 잠열 + 외기 잠열.
pub fn latent_heat(
    occupancy: f64,
    fresh_air_cfm: f64,
    delta_grains: f64,
    k: &HvacConstants,
) -> f64 {
    let people = occupancy * k.people_latent_btu_per_hour;
    let fresh_air = fresh_air_cfm * k.air_density_lb_per_ft3 * delta_grains * k.latent_grains_factor;
    people + fresh_air
}

/// 전열 부하 [Btu/hr]
pub fn total_heat(sensible_btuh: f64, latent_btuh: f64) -> f64 {
    sensible_btuh + latent_btuh
}

/// Btu/hr → TR
pub fn btuh_to_tr(btu_per_hour: f64, k: &HvacConstants) -> f64 {
    btu_per_hour / k.btu_per_hour_per_tr
}

/// 냉수 유량 [GPM]. 설계 온도차(10°F)에서 1 GPM/TR을 기준으로 온도차 보정한다.
pub fn chilled_water_gpm(ac_load_tr: f64, delta_temp_f: f64, k: &HvacConstants) -> f64 {
    let correction = k.chilled_water_design_delta_f / delta_temp_f;
    ac_load_tr * correction
}

/// GPM → L/s
pub fn gpm_to_lps(gpm: f64, k: &HvacConstants) -> f64 {
    gpm * k.gpm_to_lps
}

/// 냉수 유량[GPM]에 맞는 배관 호칭경[inch]. NaN은 어느 구간에도 들지 않아 최대 호칭경이 된다.
pub fn pipe_size_in(flow_gpm: f64) -> f64 {
    PIPE_SIZE_STEPS
        .iter()
        .find(|(limit, _)| flow_gpm <= *limit)
        .map(|(_, size)| *size)
        .unwrap_or(MAX_PIPE_SIZE_IN)
}

/// AHU 풍량 [CFM] = 실 CFM + 외기 CFM - 배기 CFM. 0 미만으로 내려가도 자르지 않는다.
pub fn resultant_cfm(room_cfm: f64, fresh_air_cfm: f64, exhaust_air_cfm: f64) -> f64 {
    room_cfm + fresh_air_cfm - exhaust_air_cfm
}

/// 팬 소비 동력 [kW].
///
/// HP = CFM × SP / (6356 × η), 이후 HP → kW 환산.
pub fn fan_power_kw(ahu_cfm: f64, static_pressure: f64, k: &HvacConstants) -> f64 {
    let power_hp = (ahu_cfm * static_pressure) / (k.fan_power_constant * k.fan_efficiency);
    power_hp * k.horsepower_to_kilowatt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_size_boundaries_are_inclusive() {
        assert_eq!(pipe_size_in(0.0), 0.75);
        assert_eq!(pipe_size_in(10.0), 0.75);
        assert_eq!(pipe_size_in(10.01), 1.0);
        assert_eq!(pipe_size_in(25.0), 1.0);
        assert_eq!(pipe_size_in(50.0), 1.5);
        assert_eq!(pipe_size_in(100.0), 2.0);
        assert_eq!(pipe_size_in(200.0), 2.5);
        assert_eq!(pipe_size_in(200.01), 3.0);
        assert_eq!(pipe_size_in(f64::INFINITY), 3.0);
        assert_eq!(pipe_size_in(f64::NAN), 3.0);
        assert_eq!(pipe_size_in(-4.0), 0.75);
    }

    #[test]
    fn zero_delta_temperature_propagates_infinity() {
        let k = HvacConstants::default();
        assert!(chilled_water_gpm(5.0, 0.0, &k).is_infinite());
        assert!(chilled_water_gpm(0.0, 0.0, &k).is_nan());
    }
}
