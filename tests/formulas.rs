use approx::assert_abs_diff_eq;
use cleanroom_hvac_toolbox::{
    hvac::{formulas, psychrometrics},
    HvacConstants,
};

#[test]
fn area_and_volume_for_typical_room() {
    let k = HvacConstants::default();
    let area = formulas::area(10.0, 5.0);
    assert_eq!(area, 50.0);
    // 9 ft = 2.7432 m → 137.16 m³ → ft³
    let volume = formulas::volume(area, 9.0, &k);
    assert_abs_diff_eq!(volume, 4843.764, epsilon = 0.01);
}

#[test]
fn zero_dimension_gives_zero_area_and_volume() {
    let k = HvacConstants::default();
    let area = formulas::area(0.0, 5.0);
    assert_eq!(area, 0.0);
    assert_eq!(formulas::volume(area, 9.0, &k), 0.0);
}

#[test]
fn required_cfm_from_air_changes() {
    assert_abs_diff_eq!(formulas::required_cfm(484.5, 40.0), 323.0, epsilon = 0.5);
    assert_abs_diff_eq!(formulas::fresh_air_cfm(323.0, 10.0), 32.3, epsilon = 1e-9);
}

#[test]
fn load_and_water_conversions_are_exact() {
    let k = HvacConstants::default();
    assert_eq!(formulas::btuh_to_tr(120_000.0, &k), 10.0);
    assert_eq!(formulas::chilled_water_gpm(10.0, 10.0, &k), 10.0);
    assert_abs_diff_eq!(formulas::gpm_to_lps(10.0, &k), 0.630902, epsilon = 1e-9);
}

#[test]
fn sensible_and_latent_components_add_up() {
    let k = HvacConstants::default();
    let sensible = formulas::sensible_heat(
        formulas::SensibleLoadInput {
            area_m2: 50.0,
            lighting_load_w_per_sqft: 1.75,
            equipment_load_kw: 2.0,
            occupancy: 4.0,
            fresh_air_cfm: 100.0,
            delta_temp_f: 46.8,
        },
        &k,
    );
    let expected = 50.0 * 1.75 * 3.412 + 2.0 * 3412.0 + 4.0 * 250.0 + 100.0 * 0.075 * 0.24 * 46.8;
    assert_abs_diff_eq!(sensible, expected, epsilon = 1e-9);

    let latent = formulas::latent_heat(4.0, 100.0, 450.6440553, &k);
    let expected = 4.0 * 200.0 + 100.0 * 0.075 * 450.6440553 * 0.68;
    assert_abs_diff_eq!(latent, expected, epsilon = 1e-9);
    assert_eq!(formulas::total_heat(sensible, latent), sensible + latent);
}

#[test]
fn pipe_size_table() {
    let cases = [
        (5.0, 0.75),
        (10.0, 0.75),
        (15.0, 1.0),
        (25.0, 1.0),
        (40.0, 1.5),
        (75.0, 2.0),
        (150.0, 2.5),
        (200.0, 2.5),
        (250.0, 3.0),
    ];
    for (gpm, size) in cases {
        assert_eq!(formulas::pipe_size_in(gpm), size, "gpm={gpm}");
    }
}

#[test]
fn resultant_cfm_may_go_negative() {
    assert_eq!(formulas::resultant_cfm(100.0, 10.0, 500.0), -390.0);
}

#[test]
fn fan_power_at_reference_point() {
    let k = HvacConstants::default();
    // 6356 × 0.7 CFM·inWG = 1 HP
    assert_abs_diff_eq!(formulas::fan_power_kw(4449.2, 1.0, &k), 0.746, epsilon = 1e-9);
    assert_eq!(formulas::fan_power_kw(0.0, 2.0, &k), 0.0);
}

#[test]
fn dew_point_equals_dry_bulb_at_saturation() {
    assert_abs_diff_eq!(psychrometrics::dew_point_c(24.0, 100.0), 24.0, epsilon = 1e-9);
    assert_abs_diff_eq!(psychrometrics::dew_point_c(24.0, 40.0), 9.5568, epsilon = 1e-3);
}

#[test]
fn grains_rise_with_humidity() {
    let k = HvacConstants::default();
    assert_eq!(psychrometrics::grains_of_moisture(75.2, 0.0, &k), 0.0);
    let dry = psychrometrics::grains_of_moisture(75.2, 40.0, &k);
    let wet = psychrometrics::grains_of_moisture(75.2, 85.0, &k);
    assert!(dry > 0.0 && wet > dry, "dry={dry} wet={wet}");
}

#[test]
fn grains_at_inside_design_condition() {
    let k = HvacConstants::default();
    let grains = psychrometrics::grains_of_moisture(75.2, 40.0, &k);
    assert_abs_diff_eq!(grains, 2206.537352, epsilon = 1e-5);
}

#[test]
fn air_density_reference_conditions() {
    let k = HvacConstants::default();
    // 530 °R = 70.33 °F
    assert_abs_diff_eq!(
        psychrometrics::air_density_at_standard_pressure(70.33, &k),
        0.075,
        epsilon = 1e-9
    );
    let half = psychrometrics::air_density(70.33, k.standard_pressure_psia / 2.0, &k);
    assert_abs_diff_eq!(half, 0.0375, epsilon = 1e-9);
}

#[test]
fn air_state_reports_both_temperature_scales() {
    let k = HvacConstants::default();
    let state = psychrometrics::air_state(24.0, 40.0, &k);
    assert_abs_diff_eq!(state.dry_bulb_f, 75.2, epsilon = 1e-9);
    assert_eq!(state.relative_humidity_pct, 40.0);
    assert!(state.density_lb_per_ft3 < 0.075);
}
