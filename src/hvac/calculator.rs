use serde::Serialize;
use tracing::{debug, info};

use super::csv_export;
use super::formulas::{self, SensibleLoadInput};
use crate::constants::HvacConstants;
use crate::room::{is_set, is_unset, normalize_rooms, Room, RoomDefaults, RoomInput};

/// 실 하나의 열부하 분해 [Btu/hr].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatLoads {
    pub sensible_btuh: f64,
    pub latent_btuh: f64,
    pub total_btuh: f64,
}

/// 실 목록 전체에 대한 집계 결과. 호출마다 새로 만들어진다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResults {
    pub total_area_m2: f64,
    pub total_volume_cft: f64,
    /// AHU CFM 합계
    pub total_cfm: f64,
    pub total_ac_load_tr: f64,
    pub total_chilled_water_gpm: f64,
    pub total_power_kw: f64,
    /// 입력 순서를 유지한 실별 계산 결과
    pub room_breakdown: Vec<Room>,
}

/// 실의 현재 면적·외기 풍량·설계 조건으로 현열/잠열/전열 부하를 계산한다.
pub fn room_heat_loads(room: &Room, k: &HvacConstants) -> HeatLoads {
    let sensible_btuh = formulas::sensible_heat(
        SensibleLoadInput {
            area_m2: room.area_m2,
            lighting_load_w_per_sqft: room.lighting_load_w_per_sqft,
            equipment_load_kw: room.equipment_load_kw,
            occupancy: room.occupancy,
            fresh_air_cfm: room.fresh_air_cfm,
            delta_temp_f: room.delta_temp_f,
        },
        k,
    );
    let latent_btuh =
        formulas::latent_heat(room.occupancy, room.fresh_air_cfm, room.delta_grains, k);
    HeatLoads {
        sensible_btuh,
        latent_btuh,
        total_btuh: formulas::total_heat(sensible_btuh, latent_btuh),
    }
}

/// 정규화된 실 하나에 계산식을 적용해 새 레코드를 돌려준다. 입력 레코드는 바꾸지 않는다.
///
/// 면적·체적·실 CFM은 비어 있을(0) 때만 계산한다. 미리 0이 아닌 값을 넣어두면 그대로 유지된다.
/// 외기 CFM, 부하, 냉수, 배관경, AHU CFM, 동력은 항상 다시 계산한다.
pub fn calculate_room(room: &Room, k: &HvacConstants) -> Room {
    let area_m2 = if is_unset(room.area_m2) && is_set(room.length_m) && is_set(room.width_m) {
        formulas::area(room.length_m, room.width_m)
    } else {
        room.area_m2
    };
    let volume_cft = if is_unset(room.volume_cft) && is_set(area_m2) && is_set(room.height_ft) {
        formulas::volume(area_m2, room.height_ft, k)
    } else {
        room.volume_cft
    };
    let room_cfm = if is_unset(room.room_cfm) {
        formulas::required_cfm(volume_cft, room.air_changes_per_hour)
    } else {
        room.room_cfm
    };

    let airflow = Room {
        area_m2,
        volume_cft,
        room_cfm,
        fresh_air_cfm: formulas::fresh_air_cfm(room_cfm, room.fresh_air_pct),
        ..room.clone()
    };

    let loads = room_heat_loads(&airflow, k);
    let room_ac_load_tr = formulas::btuh_to_tr(loads.total_btuh, k);
    let chilled_water_gpm = formulas::chilled_water_gpm(room_ac_load_tr, airflow.delta_temp_f, k);
    let resultant_cfm =
        formulas::resultant_cfm(airflow.room_cfm, airflow.fresh_air_cfm, airflow.exhaust_air_cfm);

    debug!(
        room = %airflow.room_name,
        sensible_btuh = loads.sensible_btuh,
        latent_btuh = loads.latent_btuh,
        ac_load_tr = room_ac_load_tr,
        "room calculated"
    );

    Room {
        room_ac_load_tr,
        chilled_water_gpm,
        chilled_water_lps: formulas::gpm_to_lps(chilled_water_gpm, k),
        design_pipe_in: formulas::pipe_size_in(chilled_water_gpm),
        resultant_cfm,
        ahu_cfm: resultant_cfm,
        power_consumption_kw: formulas::fan_power_kw(resultant_cfm, airflow.static_pressure, k),
        ..airflow
    }
}

/// 모든 실을 계산하고 합계를 누적한다. 합산은 입력 순서대로 왼쪽부터 진행한다.
pub fn aggregate(rooms: &[Room], k: &HvacConstants) -> CalculationResults {
    let room_breakdown: Vec<Room> = rooms.iter().map(|room| calculate_room(room, k)).collect();
    let empty = CalculationResults {
        total_area_m2: 0.0,
        total_volume_cft: 0.0,
        total_cfm: 0.0,
        total_ac_load_tr: 0.0,
        total_chilled_water_gpm: 0.0,
        total_power_kw: 0.0,
        room_breakdown: Vec::new(),
    };
    let totals = room_breakdown.iter().fold(empty, |acc, room| CalculationResults {
        total_area_m2: acc.total_area_m2 + room.area_m2,
        total_volume_cft: acc.total_volume_cft + room.volume_cft,
        total_cfm: acc.total_cfm + room.ahu_cfm,
        total_ac_load_tr: acc.total_ac_load_tr + room.room_ac_load_tr,
        total_chilled_water_gpm: acc.total_chilled_water_gpm + room.chilled_water_gpm,
        total_power_kw: acc.total_power_kw + room.power_consumption_kw,
        ..acc
    });
    info!(
        rooms = room_breakdown.len(),
        total_ac_load_tr = totals.total_ac_load_tr,
        total_cfm = totals.total_cfm,
        "aggregation finished"
    );
    CalculationResults {
        room_breakdown,
        ..totals
    }
}

/// 정규화된 실 목록과 상수를 보관하는 계산기. 생성 후 보관 값은 바뀌지 않는다.
#[derive(Debug, Clone)]
pub struct HvacCalculator {
    rooms: Vec<Room>,
    constants: HvacConstants,
}

impl HvacCalculator {
    /// 기본 상수와 기본값 표로 계산기를 만든다.
    pub fn new(inputs: &[RoomInput]) -> Self {
        Self::with_settings(inputs, &RoomDefaults::default(), HvacConstants::default())
    }

    /// 기본값 표와 상수를 지정해 계산기를 만든다.
    pub fn with_settings(
        inputs: &[RoomInput],
        defaults: &RoomDefaults,
        constants: HvacConstants,
    ) -> Self {
        Self {
            rooms: normalize_rooms(inputs, defaults),
            constants,
        }
    }

    /// 정규화된(계산 전) 실 목록
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn constants(&self) -> &HvacConstants {
        &self.constants
    }

    pub fn calculate_room(&self, room: &Room) -> Room {
        calculate_room(room, &self.constants)
    }

    pub fn calculate_all(&self) -> CalculationResults {
        aggregate(&self.rooms, &self.constants)
    }

    /// 이름이 정확히 일치하는 첫 번째 실
    pub fn room_by_name(&self, room_name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.room_name == room_name)
    }

    /// 같은 AHU에 속한 실들 (입력 순서)
    pub fn rooms_by_ahu(&self, ahu_no: &str) -> Vec<&Room> {
        self.rooms.iter().filter(|room| room.ahu_no == ahu_no).collect()
    }

    /// 계산 전 정규화된 실 목록을 CSV 텍스트로 만든다.
    pub fn export_csv(&self) -> String {
        csv_export::export_csv(&self.rooms)
    }
}
