use approx::{assert_abs_diff_eq, assert_relative_eq};
use cleanroom_hvac_toolbox::{
    hvac::{calculate_room, room_heat_loads},
    HvacCalculator, HvacConstants, RoomDefaults, RoomInput,
};

fn filling_room() -> RoomInput {
    RoomInput {
        room_name: Some("Filling".into()),
        length_m: Some(10.0),
        width_m: Some(5.0),
        height_ft: Some(9.0),
        occupancy: Some(4.0),
        equipment_load_kw: Some(2.0),
        exhaust_air_cfm: Some(100.0),
        static_pressure: Some(2.0),
        ..Default::default()
    }
}

#[test]
fn full_room_pipeline() {
    let calc = HvacCalculator::new(&[filling_room()]);
    let results = calc.calculate_all();
    let room = &results.room_breakdown[0];

    let volume = 50.0 * (9.0 * 0.3048) * 35.3147;
    let room_cfm = volume * 40.0 / 60.0;
    let fresh = room_cfm * 10.0 / 100.0;
    let sensible = 50.0 * 1.75 * 3.412 + 2.0 * 3412.0 + 4.0 * 250.0 + fresh * 0.075 * 0.24 * 46.8;
    let latent = 4.0 * 200.0 + fresh * 0.075 * 450.6440553 * 0.68;
    let tr = (sensible + latent) / 12_000.0;
    let gpm = tr * (10.0 / 46.8);
    let ahu = room_cfm + fresh - 100.0;
    let kw = (ahu * 2.0) / (6356.0 * 0.7) * 0.746;

    assert_eq!(room.area_m2, 50.0);
    assert_relative_eq!(room.volume_cft, volume, max_relative = 1e-12);
    assert_relative_eq!(room.room_cfm, room_cfm, max_relative = 1e-12);
    assert_relative_eq!(room.fresh_air_cfm, fresh, max_relative = 1e-12);
    assert_relative_eq!(room.room_ac_load_tr, tr, max_relative = 1e-12);
    assert_relative_eq!(room.chilled_water_gpm, gpm, max_relative = 1e-12);
    assert_relative_eq!(room.chilled_water_lps, gpm * 0.0630902, max_relative = 1e-12);
    assert_eq!(room.design_pipe_in, 0.75);
    assert_relative_eq!(room.resultant_cfm, ahu, max_relative = 1e-12);
    assert_eq!(room.ahu_cfm, room.resultant_cfm);
    assert_relative_eq!(room.power_consumption_kw, kw, max_relative = 1e-12);

    assert_eq!(results.total_area_m2, 50.0);
    assert_eq!(results.total_cfm, room.ahu_cfm);
    assert_eq!(results.total_ac_load_tr, room.room_ac_load_tr);
    assert_eq!(results.total_chilled_water_gpm, room.chilled_water_gpm);
    assert_eq!(results.total_power_kw, room.power_consumption_kw);
}

#[test]
fn heat_loads_match_calculated_room() {
    let k = HvacConstants::default();
    let calc = HvacCalculator::new(&[filling_room()]);
    let room = calc.calculate_room(&calc.rooms()[0]);
    let loads = room_heat_loads(&room, &k);
    assert_abs_diff_eq!(loads.total_btuh / 12_000.0, room.room_ac_load_tr, epsilon = 1e-12);
    assert_eq!(loads.total_btuh, loads.sensible_btuh + loads.latent_btuh);
}

#[test]
fn zero_length_room_has_no_airflow() {
    let input = RoomInput {
        width_m: Some(5.0),
        occupancy: Some(2.0),
        ..Default::default()
    };
    let results = HvacCalculator::new(&[input]).calculate_all();
    let room = &results.room_breakdown[0];
    assert_eq!(room.area_m2, 0.0);
    assert_eq!(room.volume_cft, 0.0);
    assert_eq!(room.room_cfm, 0.0);
    assert_eq!(room.fresh_air_cfm, 0.0);
    assert_eq!(room.ahu_cfm, 0.0);
    // 재실자 부하만 남는다.
    assert_abs_diff_eq!(room.room_ac_load_tr, 900.0 / 12_000.0, epsilon = 1e-12);
}

#[test]
fn preset_area_is_not_recomputed() {
    let input = RoomInput {
        length_m: Some(10.0),
        width_m: Some(5.0),
        area_m2: Some(123.0),
        ..Default::default()
    };
    let k = HvacConstants::default();
    let results = HvacCalculator::new(&[input]).calculate_all();
    let room = &results.room_breakdown[0];
    assert_eq!(room.area_m2, 123.0);
    assert_relative_eq!(
        room.volume_cft,
        123.0 * (9.0 * k.foot_to_meter) * k.cubic_meter_to_cubic_foot,
        max_relative = 1e-12
    );
}

#[test]
fn preset_room_cfm_drives_fresh_air() {
    let input = RoomInput {
        length_m: Some(10.0),
        width_m: Some(5.0),
        room_cfm: Some(1000.0),
        fresh_air_pct: Some(25.0),
        ..Default::default()
    };
    let room = &HvacCalculator::new(&[input]).calculate_all().room_breakdown[0];
    assert_eq!(room.room_cfm, 1000.0);
    assert_eq!(room.fresh_air_cfm, 250.0);
    assert_eq!(room.ahu_cfm, 1250.0);
}

#[test]
fn stale_outputs_are_recomputed() {
    let input = RoomInput {
        length_m: Some(4.0),
        width_m: Some(4.0),
        fresh_air_cfm: Some(9999.0),
        chilled_water_gpm: Some(9999.0),
        ahu_cfm: Some(9999.0),
        ..Default::default()
    };
    let room = &HvacCalculator::new(&[input]).calculate_all().room_breakdown[0];
    assert_relative_eq!(room.fresh_air_cfm, room.room_cfm * 0.1, max_relative = 1e-12);
    assert!(room.chilled_water_gpm < 9999.0);
    assert!(room.ahu_cfm < 9999.0);
}

#[test]
fn large_exhaust_gives_negative_airflow_and_power() {
    let input = RoomInput {
        length_m: Some(2.0),
        width_m: Some(2.0),
        exhaust_air_cfm: Some(10_000.0),
        static_pressure: Some(1.5),
        ..Default::default()
    };
    let room = &HvacCalculator::new(&[input]).calculate_all().room_breakdown[0];
    assert!(room.ahu_cfm < 0.0);
    assert!(room.power_consumption_kw < 0.0);
}

#[test]
fn zero_delta_temperature_propagates_to_pipe_size() {
    let k = HvacConstants::default();
    let calc = HvacCalculator::new(&[filling_room()]);
    let mut room = calc.rooms()[0].clone();
    room.delta_temp_f = 0.0;
    let result = calculate_room(&room, &k);
    assert!(result.chilled_water_gpm.is_infinite());
    assert_eq!(result.design_pipe_in, 3.0);
}

#[test]
fn calculation_does_not_touch_stored_rooms() {
    let calc = HvacCalculator::new(&[filling_room()]);
    let first = calc.calculate_all();
    let second = calc.calculate_all();
    assert_eq!(first, second);
    assert_eq!(calc.rooms()[0].area_m2, 0.0);
    assert_eq!(calc.rooms()[0].room_cfm, 0.0);
}

#[test]
fn totals_follow_input_order() {
    let inputs = [
        filling_room(),
        RoomInput {
            length_m: Some(3.0),
            width_m: Some(3.0),
            ..Default::default()
        },
    ];
    let results = HvacCalculator::new(&inputs).calculate_all();
    assert_eq!(results.room_breakdown.len(), 2);
    assert_eq!(results.room_breakdown[0].room_name, "Filling");
    assert_eq!(results.room_breakdown[1].room_name, "Room 2");
    assert_eq!(results.total_area_m2, 59.0);
    let cfm = results.room_breakdown[0].ahu_cfm + results.room_breakdown[1].ahu_cfm;
    assert_eq!(results.total_cfm, cfm);
}

#[test]
fn empty_room_list_has_zero_totals() {
    let results = HvacCalculator::new(&[]).calculate_all();
    assert!(results.room_breakdown.is_empty());
    assert_eq!(results.total_area_m2, 0.0);
    assert_eq!(results.total_cfm, 0.0);
    assert_eq!(results.total_power_kw, 0.0);
}

#[test]
fn lookup_by_name_and_ahu() {
    let inputs = [
        RoomInput {
            room_name: Some("Airlock".into()),
            ahu_no: Some("AHU-1".into()),
            ..Default::default()
        },
        RoomInput {
            room_name: Some("Corridor".into()),
            ahu_no: Some("AHU-2".into()),
            ..Default::default()
        },
        RoomInput {
            room_name: Some("Airlock".into()),
            ahu_no: Some("AHU-1".into()),
            ..Default::default()
        },
    ];
    let calc = HvacCalculator::new(&inputs);
    assert_eq!(calc.room_by_name("Airlock").map(|r| r.s_no), Some(1));
    assert!(calc.room_by_name("airlock").is_none());
    let ahu1: Vec<usize> = calc.rooms_by_ahu("AHU-1").iter().map(|r| r.s_no).collect();
    assert_eq!(ahu1, vec![1, 3]);
    assert!(calc.rooms_by_ahu("AHU-9").is_empty());
}

#[test]
fn custom_constants_are_used() {
    let constants = HvacConstants {
        btu_per_hour_per_tr: 6_000.0,
        ..Default::default()
    };
    let defaults = RoomDefaults::default();
    let halved = HvacCalculator::with_settings(&[filling_room()], &defaults, constants);
    let normal = HvacCalculator::new(&[filling_room()]);
    assert_relative_eq!(
        halved.calculate_all().total_ac_load_tr,
        normal.calculate_all().total_ac_load_tr * 2.0,
        max_relative = 1e-12
    );
}
