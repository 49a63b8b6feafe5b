use approx::assert_abs_diff_eq;
use cleanroom_hvac_toolbox::{
    cleanroom::{self, AirChangeRate, PressureDropSheet},
    conversion,
    quantity::QuantityKind,
};

#[test]
fn air_changes_lookup_is_case_insensitive() {
    let rate = cleanroom::air_changes_for("grade b (iso 5 at rest & iso 7 in oper.)", "who");
    assert_eq!(rate, Some(AirChangeRate::Fixed(60)));
    let grade_a = cleanroom::air_changes_for("Grade A (ISO 5 at Rest & ISO 5 in Oper.)", "TGA");
    assert_eq!(grade_a.map(|r| r.to_string()), Some("ULPA".to_string()));
}

#[test]
fn every_class_has_a_tga_value() {
    for class in cleanroom::air_changes::classes() {
        assert!(class.tga.is_some(), "{}", class.classification);
    }
}

#[test]
fn pressure_sheet_from_toml() {
    let sheet: PressureDropSheet = toml::from_str(
        r#"
[filters]
"G4 Pre filter" = true
"F9 Fine filter" = true
"H14 HEPA" = false

[[items]]
name = "Pre filter"
initial_value = "10 mmWC"
selected = true

[[items]]
name = "Cooling coil"
initial_value = "25"
selected = true

[[items]]
name = "Heater"
initial_value = "8"

[[items]]
name = "Damper"
initial_value = "n/a"
selected = true
"#,
    )
    .expect("parse sheet");
    assert_eq!(sheet.static_pressure(), 35.0);
    assert_eq!(sheet.filtration_stages(), 2);
}

#[test]
fn conversions_between_hvac_units() {
    let tr = conversion::convert(QuantityKind::HeatRate, 1.0, "TR", "btu/h").expect("heat");
    assert_eq!(tr, 12_000.0);
    let f = conversion::convert(QuantityKind::Temperature, 100.0, "C", "F").expect("temp");
    assert_abs_diff_eq!(f, 212.0, epsilon = 1e-9);
    let cfm = conversion::convert(QuantityKind::Airflow, 1000.0, "cfm", "l/s").expect("air");
    assert_abs_diff_eq!(cfm, 471.947, epsilon = 1e-3);
    let ft = conversion::convert(QuantityKind::Length, 3.048, "m", "ft").expect("len");
    assert_abs_diff_eq!(ft, 10.0, epsilon = 1e-9);
}

#[test]
fn unknown_unit_is_reported() {
    let err = conversion::convert(QuantityKind::Airflow, 1.0, "furlong/s", "cfm").unwrap_err();
    assert!(err.to_string().contains("furlong/s"));
}
