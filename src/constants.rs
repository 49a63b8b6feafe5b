use serde::{Deserialize, Serialize};

/// 부하 계산식에 주입되는 물리 상수·환산 계수 묶음.
///
/// 모든 계산 함수는 이 값을 인자로 받으며, 기본값은 표준 공기 조건(70°F, 14.696 psia)
/// 기준의 실무 계수를 사용한다. config.toml의 `[constants]` 테이블로 일부만 덮어쓸 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HvacConstants {
    /// 표준 공기 밀도 [lb/ft³]
    pub air_density_lb_per_ft3: f64,
    /// 공기 정압비열 [Btu/lb·°F]
    pub air_specific_heat_btu_per_lb_f: f64,
    /// 물의 증발잠열 [Btu/lb]
    pub latent_heat_vaporization_btu_per_lb: f64,
    /// 표준 공기 온도 [°F]
    pub standard_temp_f: f64,
    /// 표준 대기압 [psia]
    pub standard_pressure_psia: f64,
    /// 밀도 보정 기준 절대온도 [°R]
    pub density_reference_temp_r: f64,
    /// 1 TR 당 Btu/hr
    pub btu_per_hour_per_tr: f64,
    /// 1 CFM 당 L/s
    pub cfm_to_lps: f64,
    /// 1 GPM 당 L/s
    pub gpm_to_lps: f64,
    /// 1 ft 당 m
    pub foot_to_meter: f64,
    /// 1 m³ 당 ft³
    pub cubic_meter_to_cubic_foot: f64,
    /// 1 W 당 Btu/hr
    pub watt_to_btu_per_hour: f64,
    /// 1 kW 당 Btu/hr
    pub kilowatt_to_btu_per_hour: f64,
    /// 재실자 1인 현열 [Btu/hr]
    pub people_sensible_btu_per_hour: f64,
    /// 재실자 1인 잠열 [Btu/hr]
    pub people_latent_btu_per_hour: f64,
    /// 외기 잠열 계산의 grain 계수
    pub latent_grains_factor: f64,
    /// 냉수 유량 1 GPM/TR 기준 온도차 [°F]
    pub chilled_water_design_delta_f: f64,
    /// 팬 동력식 상수 (CFM·inWG → HP)
    pub fan_power_constant: f64,
    /// 팬 효율 (0~1)
    pub fan_efficiency: f64,
    /// 1 HP 당 kW
    pub horsepower_to_kilowatt: f64,
}

impl Default for HvacConstants {
    fn default() -> Self {
        Self {
            air_density_lb_per_ft3: 0.075,
            air_specific_heat_btu_per_lb_f: 0.24,
            latent_heat_vaporization_btu_per_lb: 1060.0,
            standard_temp_f: 70.0,
            standard_pressure_psia: 14.696,
            density_reference_temp_r: 530.0,
            btu_per_hour_per_tr: 12_000.0,
            cfm_to_lps: 0.471947,
            gpm_to_lps: 0.0630902,
            foot_to_meter: 0.3048,
            cubic_meter_to_cubic_foot: 35.3147,
            watt_to_btu_per_hour: 3.412,
            kilowatt_to_btu_per_hour: 3412.0,
            people_sensible_btu_per_hour: 250.0,
            people_latent_btu_per_hour: 200.0,
            latent_grains_factor: 0.68,
            chilled_water_design_delta_f: 10.0,
            fan_power_constant: 6356.0,
            fan_efficiency: 0.7,
            horsepower_to_kilowatt: 0.746,
        }
    }
}
