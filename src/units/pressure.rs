use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 kg/cm²(게이지)이며 두께 계산식도 이 단위를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    KgPerCm2,
    Bar,
    KiloPascal,
    MegaPascal,
    Psi,
}

const BAR_PER_KGCM2: f64 = 0.980665;

fn to_kg_per_cm2(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::KgPerCm2 => value,
        PressureUnit::Bar => value / BAR_PER_KGCM2,
        PressureUnit::KiloPascal => value / 100.0 / BAR_PER_KGCM2,
        PressureUnit::MegaPascal => value * 10.0 / BAR_PER_KGCM2,
        PressureUnit::Psi => value * 0.0689476 / BAR_PER_KGCM2,
    }
}

fn from_kg_per_cm2(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::KgPerCm2 => value,
        PressureUnit::Bar => value * BAR_PER_KGCM2,
        PressureUnit::KiloPascal => value * BAR_PER_KGCM2 * 100.0,
        PressureUnit::MegaPascal => value * BAR_PER_KGCM2 / 10.0,
        PressureUnit::Psi => value * BAR_PER_KGCM2 / 0.0689476,
    }
}

/// 압력을 원하는 단위로 변환한다. 게이지/절대 구분 없이 배율만 적용한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let kg = to_kg_per_cm2(value, from);
    from_kg_per_cm2(kg, to)
}
