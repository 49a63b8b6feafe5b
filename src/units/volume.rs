use serde::{Deserialize, Serialize};

/// 체적 단위. 환기 풍량 계산은 ft³ 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    CubicFoot,
}

const FT3_PER_M3: f64 = 35.3147;

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    match (from, to) {
        (VolumeUnit::CubicMeter, VolumeUnit::CubicFoot) => value * FT3_PER_M3,
        (VolumeUnit::CubicFoot, VolumeUnit::CubicMeter) => value / FT3_PER_M3,
        _ => value,
    }
}
