use serde::{Deserialize, Serialize};

/// 면적 단위. 조명 부하(W/ft²) 입력 때문에 ft²도 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareFoot,
}

const M2_PER_FT2: f64 = 0.092903;

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    match (from, to) {
        (AreaUnit::SquareFoot, AreaUnit::SquareMeter) => value * M2_PER_FT2,
        (AreaUnit::SquareMeter, AreaUnit::SquareFoot) => value / M2_PER_FT2,
        _ => value,
    }
}
