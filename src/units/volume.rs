use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    CubicFoot,
}

impl VolumeUnit {
    fn cubic_meters(self) -> f64 {
        match self {
            VolumeUnit::CubicMeter => 1.0,
            VolumeUnit::Liter => 0.001,
            VolumeUnit::CubicFoot => 0.0283168,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::CubicMeter => "m³",
            VolumeUnit::Liter => "L",
            VolumeUnit::CubicFoot => "ft³",
        }
    }
}

/// 체적(액 보유량, 용기 체적)을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    value * from.cubic_meters() / to.cubic_meters()
}
