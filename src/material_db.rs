//! 용기 동체 재질의 온도별 허용응력 테이블과 선형 보간을 제공한다.
//! 허용응력 단위는 ksi(1000 psi), 온도 기준점은 °F 이다.
//! 값은 참고용이며 설계 시 최신 코드(ASME Sec. II-D)로 검증해야 한다.
use crate::calc::{Calc, Indeterminate};
use crate::units::celsius_to_fahrenheit;

/// 허용응력 테이블의 온도 기준점(°F). 모든 재질이 같은 기준점을 공유한다.
pub const BREAKPOINTS_F: [f64; 14] = [
    -20.0, 300.0, 400.0, 500.0, 600.0, 650.0, 700.0, 750.0, 800.0, 850.0, 900.0, 950.0, 1000.0,
    1050.0,
];

#[derive(Debug)]
pub struct MaterialData {
    pub code: &'static str,
    pub notes: &'static str,
    /// 재질 밀도 [kg/m³]
    pub density_kg_m3: f64,
    /// `BREAKPOINTS_F` 순서와 같은 허용응력 [ksi]
    pub allowable_ksi: [f64; 14],
}

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

pub fn find_material(code: &str) -> Option<&'static MaterialData> {
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code.trim()))
}

/// 재질 밀도를 조회한다.
pub fn material_density(code: &str) -> Calc<f64> {
    find_material(code)
        .map(|m| m.density_kg_m3)
        .ok_or_else(|| Indeterminate::MissingTableEntry(format!("재질 {code}")))
}

/// 설계 온도(°C)에서의 허용응력[ksi]을 구한다.
///
/// 온도를 °F로 바꾼 뒤 앞뒤 기준점 사이를 선형 보간한다. 기준점과 정확히 같으면
/// 테이블 값을 그대로 쓰고, -20 °F ~ 1050 °F 범위를 벗어나면 산출 불가이다.
pub fn allowable_stress(code: &str, design_temp_c: f64) -> Calc<f64> {
    let mat = find_material(code)
        .ok_or_else(|| Indeterminate::MissingTableEntry(format!("재질 {code}")))?;
    let temp_f = celsius_to_fahrenheit(design_temp_c);
    interpolate(&mat.allowable_ksi, temp_f)
}

fn interpolate(values: &[f64; 14], temp_f: f64) -> Calc<f64> {
    // °C↔°F 왕복 시 생기는 반올림 오차로 양 끝 기준점을 놓치지 않도록 한다.
    const EPS: f64 = 1e-9;
    let first = BREAKPOINTS_F[0];
    let last = BREAKPOINTS_F[BREAKPOINTS_F.len() - 1];
    let temp_f = if (temp_f - first).abs() < EPS {
        first
    } else if (temp_f - last).abs() < EPS {
        last
    } else {
        temp_f
    };
    for (i, win) in BREAKPOINTS_F.windows(2).enumerate() {
        let (lo, hi) = (win[0], win[1]);
        if temp_f >= lo && temp_f <= hi {
            let frac = (temp_f - lo) / (hi - lo);
            return Ok(values[i] + frac * (values[i + 1] - values[i]));
        }
    }
    Err(Indeterminate::OutOfRange {
        field: "design_temperature",
        reason: "허용응력 테이블 온도 범위(-20~1050 °F) 밖",
    })
}

const MATERIALS: &[MaterialData] = &[
    MaterialData {
        code: "CS",
        notes: "Carbon steel (SA-516 계열)",
        density_kg_m3: 7840.0,
        allowable_ksi: [
            17.1, 17.1, 17.1, 17.1, 16.4, 15.8, 15.3, 13.0, 10.8, 8.7, 5.9, 4.0, 2.5, 0.1,
        ],
    },
    MaterialData {
        code: "KCS",
        notes: "Killed carbon steel",
        density_kg_m3: 7840.0,
        allowable_ksi: [
            20.0, 20.0, 20.0, 20.0, 19.4, 18.8, 18.1, 14.8, 12.0, 9.3, 6.7, 4.0, 2.5, 0.0,
        ],
    },
    MaterialData {
        code: "0.5Mo",
        notes: "C-0.5Mo",
        density_kg_m3: 7840.0,
        allowable_ksi: [
            21.4, 21.4, 21.4, 21.4, 21.4, 21.4, 21.4, 21.4, 21.4, 20.0, 13.7, 8.2, 4.8, 0.0,
        ],
    },
    MaterialData {
        code: "1.25Cr-0.5Mo",
        notes: "Cr-Mo 고온용",
        density_kg_m3: 7840.0,
        allowable_ksi: [
            21.4, 21.4, 21.4, 21.4, 21.4, 21.4, 21.4, 21.4, 21.4, 20.2, 13.7, 9.3, 6.3, 4.2,
        ],
    },
    MaterialData {
        code: "2.25Cr-1Mo",
        notes: "Cr-Mo 고온용",
        density_kg_m3: 7800.0,
        allowable_ksi: [
            21.4, 20.9, 20.6, 20.5, 20.4, 20.2, 20.0, 19.7, 19.3, 18.7, 15.8, 11.4, 7.8, 5.1,
        ],
    },
    MaterialData {
        code: "5Cr-0.5Mo",
        notes: "Cr-Mo 고온/내식용",
        density_kg_m3: 7750.0,
        allowable_ksi: [
            21.4, 20.8, 20.6, 20.5, 20.2, 19.9, 19.5, 18.9, 18.2, 14.3, 10.9, 8.0, 5.8, 4.2,
        ],
    },
    MaterialData {
        code: "SS316",
        notes: "Austenitic stainless Mo",
        density_kg_m3: 7990.0,
        allowable_ksi: [
            20.0, 15.6, 14.3, 13.3, 12.6, 12.3, 12.1, 11.9, 11.8, 11.6, 11.5, 11.4, 11.3, 11.2,
        ],
    },
    MaterialData {
        code: "SS321",
        notes: "Austenitic stainless Ti 안정화",
        density_kg_m3: 9010.0,
        allowable_ksi: [
            20.0, 16.5, 15.3, 14.3, 13.5, 13.2, 13.0, 12.7, 12.6, 12.4, 12.3, 12.1, 12.0, 9.6,
        ],
    },
    MaterialData {
        code: "SS347",
        notes: "Austenitic stainless Nb 안정화",
        density_kg_m3: 8000.0,
        allowable_ksi: [
            20.0, 17.1, 16.0, 15.0, 14.3, 14.0, 13.8, 13.7, 13.6, 13.5, 13.4, 13.4, 13.4, 12.1,
        ],
    },
];

// NOTE:
// - SS321 밀도 9010 kg/m³는 기존 설계 시트 값을 그대로 유지한 것이다. 일반 문헌값은 약 7900 kg/m³.
