use serde::{Deserialize, Serialize};

/// 축동력 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Kilowatt,
    Horsepower,
}

const KW_PER_HP: f64 = 0.746;

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    match (from, to) {
        (PowerUnit::Horsepower, PowerUnit::Kilowatt) => value * KW_PER_HP,
        (PowerUnit::Kilowatt, PowerUnit::Horsepower) => value / KW_PER_HP,
        _ => value,
    }
}
