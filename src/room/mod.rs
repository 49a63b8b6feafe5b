//! 실(room) 단위 데이터 모델. 부분 입력(`RoomInput`)과 기본값이 채워진 완전한 레코드(`Room`)로 나뉜다.
//! 정규화·입력 파일·완결성 검사를 하위 모듈로 둔다.

pub mod file;
pub mod normalize;
pub mod validation;

pub use file::{load_rooms, parse_rooms, RoomFileError};
pub use normalize::{normalize_room, normalize_rooms, RoomDefaults};
pub use validation::{require_rooms, validate_rooms, IncompleteRoom, RoomValidationError};

use serde::{Deserialize, Serialize};

/// 기본값이 모두 채워진 실 레코드.
///
/// 길이/폭은 m, 높이는 ft, 면적은 m², 체적은 ft³ 기준이다.
/// 부하 시트의 열 구성을 그대로 따르므로 계산에 쓰이지 않는 원시 열도 보존한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    /// 1부터 시작하는 입력 순번
    pub s_no: usize,
    pub ahu_no: String,
    pub room_name: String,
    pub length_m: f64,
    pub width_m: f64,
    pub height_ft: f64,
    pub area_m2: f64,
    pub volume_cft: f64,
    pub standard: String,
    pub classification: String,
    pub air_changes_per_hour: f64,
    pub room_cfm: f64,
    /// 재실 인원
    pub occupancy: f64,
    pub equipment_load_kw: f64,
    pub lighting_load_w_per_sqft: f64,
    /// 외기 비율 [%]
    pub fresh_air_pct: f64,
    pub fresh_air_cfm: f64,
    pub exhaust_air_cfm: f64,
    pub dehumidification_cfm: f64,
    /// 실 CFM + 외기 CFM - 배기 CFM. 음수도 그대로 둔다.
    pub resultant_cfm: f64,
    pub room_ac_load_tr: f64,
    pub cfm_ac_load_tr: f64,
    pub res_ac_load_tr: f64,
    pub chilled_water_gpm: f64,
    pub chilled_water_lps: f64,
    pub actual_pipe_in: f64,
    pub design_pipe_in: f64,
    pub hot_water_gpm: f64,
    pub hot_water_lps: f64,
    pub actual_pipe_hot_in: f64,
    pub design_pipe_hot_in: f64,
    /// 등급(K) / NC 표기
    pub class_k_nc: String,
    pub inside_temp_c: f64,
    pub required_rh_pct: f64,
    pub outside_rh_pct: f64,
    pub outside_temp_f: f64,
    pub inside_temp_f: f64,
    pub outside_temp_c: f64,
    pub delta_temp_f: f64,
    /// 코일 입구 grain/lb 건공기
    pub grains_before_coil: f64,
    /// 코일 출구 grain/lb 건공기
    pub grains_after_coil: f64,
    pub delta_grains: f64,
    pub walls: f64,
    pub partition: f64,
    pub floor: f64,
    pub roof: f64,
    pub lighting_heat_btuh: f64,
    pub equipment_heat_btuh: f64,
    pub people_rsh: f64,
    pub fresh_air_rsh: f64,
    pub ersh: f64,
    pub people_rlh: f64,
    pub fresh_air_rlh: f64,
    pub erlh: f64,
    pub erth: f64,
    pub ac_load: f64,
    pub dehumidification_cfm_final: f64,
    pub final_filtration: String,
    pub nc20_micron: f64,
    pub plenum_hepa: String,
    pub terminal_hepa_100k: String,
    pub terminal_hepa_1k: String,
    pub ahu_cfm: f64,
    /// 정압 [inWG]
    pub static_pressure: f64,
    pub blower_model: String,
    pub motor_rating_hp: f64,
    pub ahu_size: String,
    pub cooling_coil_size: String,
    pub exhaust_ahu_cfm: f64,
    pub exhaust_static_pressure: f64,
    pub exhaust_blower_model: String,
    pub exhaust_motor_hp: f64,
    pub power_consumption_kw: f64,
}

/// 사용자가 입력한 부분 실 레코드. 어떤 필드든 생략할 수 있다.
///
/// `s_no`는 입력 위치로 다시 매겨지므로 여기에는 두지 않는다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomInput {
    pub ahu_no: Option<String>,
    pub room_name: Option<String>,
    pub length_m: Option<f64>,
    pub width_m: Option<f64>,
    pub height_ft: Option<f64>,
    pub area_m2: Option<f64>,
    pub volume_cft: Option<f64>,
    pub standard: Option<String>,
    pub classification: Option<String>,
    pub air_changes_per_hour: Option<f64>,
    pub room_cfm: Option<f64>,
    pub occupancy: Option<f64>,
    pub equipment_load_kw: Option<f64>,
    pub lighting_load_w_per_sqft: Option<f64>,
    pub fresh_air_pct: Option<f64>,
    pub fresh_air_cfm: Option<f64>,
    pub exhaust_air_cfm: Option<f64>,
    pub dehumidification_cfm: Option<f64>,
    pub resultant_cfm: Option<f64>,
    pub room_ac_load_tr: Option<f64>,
    pub cfm_ac_load_tr: Option<f64>,
    pub res_ac_load_tr: Option<f64>,
    pub chilled_water_gpm: Option<f64>,
    pub chilled_water_lps: Option<f64>,
    pub actual_pipe_in: Option<f64>,
    pub design_pipe_in: Option<f64>,
    pub hot_water_gpm: Option<f64>,
    pub hot_water_lps: Option<f64>,
    pub actual_pipe_hot_in: Option<f64>,
    pub design_pipe_hot_in: Option<f64>,
    pub class_k_nc: Option<String>,
    pub inside_temp_c: Option<f64>,
    pub required_rh_pct: Option<f64>,
    pub outside_rh_pct: Option<f64>,
    pub outside_temp_f: Option<f64>,
    pub inside_temp_f: Option<f64>,
    pub outside_temp_c: Option<f64>,
    pub delta_temp_f: Option<f64>,
    pub grains_before_coil: Option<f64>,
    pub grains_after_coil: Option<f64>,
    pub delta_grains: Option<f64>,
    pub walls: Option<f64>,
    pub partition: Option<f64>,
    pub floor: Option<f64>,
    pub roof: Option<f64>,
    pub lighting_heat_btuh: Option<f64>,
    pub equipment_heat_btuh: Option<f64>,
    pub people_rsh: Option<f64>,
    pub fresh_air_rsh: Option<f64>,
    pub ersh: Option<f64>,
    pub people_rlh: Option<f64>,
    pub fresh_air_rlh: Option<f64>,
    pub erlh: Option<f64>,
    pub erth: Option<f64>,
    pub ac_load: Option<f64>,
    pub dehumidification_cfm_final: Option<f64>,
    pub final_filtration: Option<String>,
    pub nc20_micron: Option<f64>,
    pub plenum_hepa: Option<String>,
    pub terminal_hepa_100k: Option<String>,
    pub terminal_hepa_1k: Option<String>,
    pub ahu_cfm: Option<f64>,
    pub static_pressure: Option<f64>,
    pub blower_model: Option<String>,
    pub motor_rating_hp: Option<f64>,
    pub ahu_size: Option<String>,
    pub cooling_coil_size: Option<String>,
    pub exhaust_ahu_cfm: Option<f64>,
    pub exhaust_static_pressure: Option<f64>,
    pub exhaust_blower_model: Option<String>,
    pub exhaust_motor_hp: Option<f64>,
    pub power_consumption_kw: Option<f64>,
}

/// 값이 "비어 있음"으로 취급되는지 판단한다. 0과 NaN은 입력되지 않은 것과 같다.
pub fn is_unset(value: f64) -> bool {
    value == 0.0 || value.is_nan()
}

/// `is_unset`의 반대.
pub fn is_set(value: f64) -> bool {
    !is_unset(value)
}
