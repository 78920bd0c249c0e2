use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareFoot,
}

impl AreaUnit {
    fn square_meters(self) -> f64 {
        match self {
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareFoot => 0.092903,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m²",
            AreaUnit::SquareFoot => "ft²",
        }
    }
}

/// 면적을 변환한다. 표면적/단면적 표시용.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    value * from.square_meters() / to.square_meters()
}
