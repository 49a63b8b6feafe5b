//! 실 목록의 CSV 직렬화.
//!
//! 구분자는 쉼표이며 따옴표 처리나 이스케이프를 하지 않는다. 문자열 필드에 쉼표가 들어가면
//! 열이 밀리므로 입력 측에서 막아야 한다.

use crate::room::Room;

/// CSV 열 수
pub const CSV_COLUMN_COUNT: usize = 48;

/// 헤더 행의 열 이름. `csv_row`의 값 순서와 같다.
pub const CSV_HEADERS: [&str; CSV_COLUMN_COUNT] = [
    "S. No.",
    "AHU No",
    "Room Name",
    "Length in Mtrs",
    "Width in Mtrs",
    "Height in Ft",
    "Area in Sq. Mtrs",
    "Volume in Cft",
    "Standard & Classification",
    "No. of Air Ch.",
    "Room CFM",
    "Occupancy",
    "Eqpt. Load in KW",
    "Lighting Load in W/Sft",
    "Fresh Air Cfm in % of Total Air",
    "Fresh Air Cfm Air",
    "Exhaust Air Cfm",
    "Deh. CFM",
    "Resultant CFM",
    "Room AC Load in TR",
    "CFm AC Load in TR",
    "Res. AC load in TR",
    "Ch. Water In Gal/m",
    "Ch. Water In L/s",
    "Act. Pipe in Inch",
    "Des. Pipe in Inch",
    "Class in K / NC 20/5",
    "In Temp in C (+/-2)",
    "Required RH in % +/- 5",
    "Outside RH in % +/- 5",
    "Out. Temp. in F",
    "Inside Temp. in F",
    "Out Temp in C (+/-2)",
    "Delta Temp in F",
    "Grains / Pound of Dry Air before Coil",
    "Grains / Pound of Dry Air After Coil",
    "Delta Grains / pound of Air",
    "ERSH",
    "ERLH",
    "ERTH or Grand Total Heat",
    "AC Load",
    "Final Filtration",
    "NC 20 / 5 Micron",
    "AHU CFM",
    "Static Pressure",
    "Blower Model",
    "Motor rating in Hp",
    "Power cons. in KW/hr",
];

/// 숫자를 JavaScript `String(number)`와 같은 모양으로 만든다.
///
/// 정수값은 소수점 없이(`9`), 비유한 값은 `NaN`/`Infinity`/`-Infinity`,
/// 1e21 이상 또는 1e-6 미만의 크기는 지수 표기(`1e+21`, `1e-7`)를 쓴다.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if value == 0.0 {
        return "0".into();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    format!("{value}")
}

/// 실 하나를 헤더와 같은 순서의 문자열 열로 만든다.
pub fn csv_row(room: &Room) -> [String; CSV_COLUMN_COUNT] {
    let n = format_number;
    [
        room.s_no.to_string(),
        room.ahu_no.clone(),
        room.room_name.clone(),
        n(room.length_m),
        n(room.width_m),
        n(room.height_ft),
        n(room.area_m2),
        n(room.volume_cft),
        room.standard.clone(),
        n(room.air_changes_per_hour),
        n(room.room_cfm),
        n(room.occupancy),
        n(room.equipment_load_kw),
        n(room.lighting_load_w_per_sqft),
        n(room.fresh_air_pct),
        n(room.fresh_air_cfm),
        n(room.exhaust_air_cfm),
        n(room.dehumidification_cfm),
        n(room.resultant_cfm),
        n(room.room_ac_load_tr),
        n(room.cfm_ac_load_tr),
        n(room.res_ac_load_tr),
        n(room.chilled_water_gpm),
        n(room.chilled_water_lps),
        n(room.actual_pipe_in),
        n(room.design_pipe_in),
        room.class_k_nc.clone(),
        n(room.inside_temp_c),
        n(room.required_rh_pct),
        n(room.outside_rh_pct),
        n(room.outside_temp_f),
        n(room.inside_temp_f),
        n(room.outside_temp_c),
        n(room.delta_temp_f),
        n(room.grains_before_coil),
        n(room.grains_after_coil),
        n(room.delta_grains),
        n(room.ersh),
        n(room.erlh),
        n(room.erth),
        n(room.ac_load),
        room.final_filtration.clone(),
        n(room.nc20_micron),
        n(room.ahu_cfm),
        n(room.static_pressure),
        room.blower_model.clone(),
        n(room.motor_rating_hp),
        n(room.power_consumption_kw),
    ]
}

/// 헤더 한 줄 + 실마다 한 줄. 줄바꿈은 `\n`이며 마지막 줄 뒤에는 붙이지 않는다.
pub fn export_csv(rooms: &[Room]) -> String {
    let mut lines = Vec::with_capacity(rooms.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for room in rooms {
        lines.push(csv_row(room).join(","));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_like_javascript() {
        assert_eq!(format_number(9.0), "9");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(75.2), "75.2");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(502.5390781), "502.5390781");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn headers_have_no_delimiter() {
        assert!(CSV_HEADERS.iter().all(|h| !h.contains(',')));
    }
}
