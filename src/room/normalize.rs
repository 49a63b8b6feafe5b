use serde::{Deserialize, Serialize};

use super::{is_set, Room, RoomInput};

/// 입력이 비어 있는 필드에 채워 넣을 기본값 표.
///
/// 설계 조건 기본값은 외기 50°C/85%RH, 실내 24°C/40%RH 기준이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomDefaults {
    /// AHU 번호 접두어. `{prefix}-{순번:03}` 형식으로 생성한다.
    pub ahu_prefix: String,
    /// 실 이름 접두어. `{prefix} {순번}` 형식으로 생성한다.
    pub room_name_prefix: String,
    pub height_ft: f64,
    pub standard: String,
    pub classification: String,
    pub air_changes_per_hour: f64,
    pub lighting_load_w_per_sqft: f64,
    pub fresh_air_pct: f64,
    pub inside_temp_c: f64,
    pub required_rh_pct: f64,
    pub outside_rh_pct: f64,
    pub outside_temp_f: f64,
    pub inside_temp_f: f64,
    pub outside_temp_c: f64,
    pub delta_temp_f: f64,
    pub grains_before_coil: f64,
    pub grains_after_coil: f64,
    pub delta_grains: f64,
    pub final_filtration: String,
    /// 등급 표기와 HEPA 단 표기에 공통으로 쓰는 라벨
    pub grade_label: String,
}

impl Default for RoomDefaults {
    fn default() -> Self {
        Self {
            ahu_prefix: "ACAHU".into(),
            room_name_prefix: "Room".into(),
            height_ft: 9.0,
            standard: "ISO 8".into(),
            classification: "Gene/Entry".into(),
            air_changes_per_hour: 40.0,
            lighting_load_w_per_sqft: 1.75,
            fresh_air_pct: 10.0,
            inside_temp_c: 24.0,
            required_rh_pct: 40.0,
            outside_rh_pct: 85.0,
            outside_temp_f: 122.0,
            inside_temp_f: 75.2,
            outside_temp_c: 50.0,
            delta_temp_f: 46.8,
            grains_before_coil: 502.5390781,
            grains_after_coil: 51.89502281,
            delta_grains: 450.6440553,
            final_filtration: "100K".into(),
            grade_label: "Gene/Entry".into(),
        }
    }
}

impl RoomDefaults {
    /// 1부터 시작하는 순번으로 AHU 번호를 만든다. (1 → ACAHU-001)
    pub fn ahu_label(&self, s_no: usize) -> String {
        format!("{}-{:03}", self.ahu_prefix, s_no)
    }

    /// 1부터 시작하는 순번으로 실 이름을 만든다.
    pub fn room_label(&self, s_no: usize) -> String {
        format!("{} {}", self.room_name_prefix, s_no)
    }
}

fn num(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if is_set(v) => v,
        _ => default,
    }
}

fn text(value: &Option<String>, default: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s.clone(),
        _ => default.to_string(),
    }
}

/// 부분 입력 하나를 기본값으로 채워 완전한 레코드로 만든다. `s_no`는 1부터 시작한다.
///
/// 오류를 내지 않는다. 없는 값, 0, NaN, 빈 문자열은 모두 기본값으로 대체된다.
pub fn normalize_room(input: &RoomInput, s_no: usize, defaults: &RoomDefaults) -> Room {
    let d = defaults;
    let grade = d.grade_label.as_str();
    Room {
        s_no,
        ahu_no: input
            .ahu_no
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| d.ahu_label(s_no)),
        room_name: input
            .room_name
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| d.room_label(s_no)),
        length_m: num(input.length_m, 0.0),
        width_m: num(input.width_m, 0.0),
        height_ft: num(input.height_ft, d.height_ft),
        area_m2: num(input.area_m2, 0.0),
        volume_cft: num(input.volume_cft, 0.0),
        standard: text(&input.standard, &d.standard),
        classification: text(&input.classification, &d.classification),
        air_changes_per_hour: num(input.air_changes_per_hour, d.air_changes_per_hour),
        room_cfm: num(input.room_cfm, 0.0),
        occupancy: num(input.occupancy, 0.0),
        equipment_load_kw: num(input.equipment_load_kw, 0.0),
        lighting_load_w_per_sqft: num(input.lighting_load_w_per_sqft, d.lighting_load_w_per_sqft),
        fresh_air_pct: num(input.fresh_air_pct, d.fresh_air_pct),
        fresh_air_cfm: num(input.fresh_air_cfm, 0.0),
        exhaust_air_cfm: num(input.exhaust_air_cfm, 0.0),
        dehumidification_cfm: num(input.dehumidification_cfm, 0.0),
        resultant_cfm: num(input.resultant_cfm, 0.0),
        room_ac_load_tr: num(input.room_ac_load_tr, 0.0),
        cfm_ac_load_tr: num(input.cfm_ac_load_tr, 0.0),
        res_ac_load_tr: num(input.res_ac_load_tr, 0.0),
        chilled_water_gpm: num(input.chilled_water_gpm, 0.0),
        chilled_water_lps: num(input.chilled_water_lps, 0.0),
        actual_pipe_in: num(input.actual_pipe_in, 0.0),
        design_pipe_in: num(input.design_pipe_in, 0.0),
        hot_water_gpm: num(input.hot_water_gpm, 0.0),
        hot_water_lps: num(input.hot_water_lps, 0.0),
        actual_pipe_hot_in: num(input.actual_pipe_hot_in, 0.0),
        design_pipe_hot_in: num(input.design_pipe_hot_in, 0.0),
        class_k_nc: text(&input.class_k_nc, grade),
        inside_temp_c: num(input.inside_temp_c, d.inside_temp_c),
        required_rh_pct: num(input.required_rh_pct, d.required_rh_pct),
        outside_rh_pct: num(input.outside_rh_pct, d.outside_rh_pct),
        outside_temp_f: num(input.outside_temp_f, d.outside_temp_f),
        inside_temp_f: num(input.inside_temp_f, d.inside_temp_f),
        outside_temp_c: num(input.outside_temp_c, d.outside_temp_c),
        delta_temp_f: num(input.delta_temp_f, d.delta_temp_f),
        grains_before_coil: num(input.grains_before_coil, d.grains_before_coil),
        grains_after_coil: num(input.grains_after_coil, d.grains_after_coil),
        delta_grains: num(input.delta_grains, d.delta_grains),
        walls: num(input.walls, 0.0),
        partition: num(input.partition, 0.0),
        floor: num(input.floor, 0.0),
        roof: num(input.roof, 0.0),
        lighting_heat_btuh: num(input.lighting_heat_btuh, 0.0),
        equipment_heat_btuh: num(input.equipment_heat_btuh, 0.0),
        people_rsh: num(input.people_rsh, 0.0),
        fresh_air_rsh: num(input.fresh_air_rsh, 0.0),
        ersh: num(input.ersh, 0.0),
        people_rlh: num(input.people_rlh, 0.0),
        fresh_air_rlh: num(input.fresh_air_rlh, 0.0),
        erlh: num(input.erlh, 0.0),
        erth: num(input.erth, 0.0),
        ac_load: num(input.ac_load, 0.0),
        dehumidification_cfm_final: num(input.dehumidification_cfm_final, 0.0),
        final_filtration: text(&input.final_filtration, &d.final_filtration),
        nc20_micron: num(input.nc20_micron, 0.0),
        plenum_hepa: text(&input.plenum_hepa, grade),
        terminal_hepa_100k: text(&input.terminal_hepa_100k, grade),
        terminal_hepa_1k: text(&input.terminal_hepa_1k, grade),
        ahu_cfm: num(input.ahu_cfm, 0.0),
        static_pressure: num(input.static_pressure, 0.0),
        blower_model: text(&input.blower_model, ""),
        motor_rating_hp: num(input.motor_rating_hp, 0.0),
        ahu_size: text(&input.ahu_size, ""),
        cooling_coil_size: text(&input.cooling_coil_size, ""),
        exhaust_ahu_cfm: num(input.exhaust_ahu_cfm, 0.0),
        exhaust_static_pressure: num(input.exhaust_static_pressure, 0.0),
        exhaust_blower_model: text(&input.exhaust_blower_model, ""),
        exhaust_motor_hp: num(input.exhaust_motor_hp, 0.0),
        power_consumption_kw: num(input.power_consumption_kw, 0.0),
    }
}

/// 입력 순서를 유지하며 모든 실을 정규화한다.
pub fn normalize_rooms(inputs: &[RoomInput], defaults: &RoomDefaults) -> Vec<Room> {
    inputs
        .iter()
        .enumerate()
        .map(|(idx, input)| normalize_room(input, idx + 1, defaults))
        .collect()
}
