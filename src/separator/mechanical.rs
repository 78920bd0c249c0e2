//! 동체/헤드 두께, 표면적, 중량.
//!
//! 압력 kg/cm²(g), 응력 kg/cm², 직경·길이 m, 두께·부식 여유 mm.

use std::f64::consts::PI;

use crate::calc::{self, Calc};
use crate::input::{HeadType, ResolvedInput};
use crate::material_db;

/// 최소 두께 [mm]
pub const MIN_THICKNESS_MM: f64 = 10.0;
/// 1 kg/cm² = 14.2233 psi
const PSI_PER_KGCM2: f64 = 14.2233;

/// 동체 또는 헤드 한 부분의 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct PartResult {
    /// [mm]
    pub thickness: Calc<f64>,
    /// [m²]
    pub surface_area: Calc<f64>,
    /// [kg]
    pub weight: Calc<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MechanicalResult {
    /// [ksi]
    pub allowable_stress: Calc<f64>,
    /// [kg/cm²]
    pub design_stress: Calc<f64>,
    pub material_density: Calc<f64>,
    pub shell: PartResult,
    /// 헤드 1개 기준
    pub head: PartResult,
    /// 동체 + 헤드 2개 [kg]
    pub total_weight: Calc<f64>,
}

/// ksi → kg/cm²
pub fn design_stress(allowable_ksi: f64) -> f64 {
    allowable_ksi * 1000.0 / PSI_PER_KGCM2
}

fn required_thickness(
    pressure: f64,
    diameter: f64,
    denominator: f64,
    corrosion_mm: f64,
) -> Calc<f64> {
    if denominator <= 0.0 {
        return Err(calc::Indeterminate::Domain("두께 식 분모가 0 이하"));
    }
    let t = pressure * diameter / denominator * 1000.0 + corrosion_mm;
    Ok(t.max(MIN_THICKNESS_MM))
}

/// t = P·D / (2·S·E − 1.2·P) + CA, 최소 10 mm.
pub fn shell_thickness(
    pressure: f64,
    diameter: f64,
    stress: f64,
    joint_efficiency: f64,
    corrosion_mm: f64,
) -> Calc<f64> {
    let den = 2.0 * stress * joint_efficiency - 1.2 * pressure;
    required_thickness(pressure, diameter, den, corrosion_mm)
}

pub fn head_thickness(
    pressure: f64,
    diameter: f64,
    stress: f64,
    joint_efficiency: f64,
    corrosion_mm: f64,
    head: HeadType,
) -> Calc<f64> {
    let den = match head {
        HeadType::Elliptical => 2.0 * stress * joint_efficiency - 0.2 * pressure,
        HeadType::Spherical => 4.0 * stress * joint_efficiency - 0.4 * pressure,
    };
    required_thickness(pressure, diameter, den, corrosion_mm)
}

/// 두께 중심 직경 기준 동체 표면적 [m²].
pub fn shell_surface_area(diameter: f64, thickness_mm: f64, length: f64) -> f64 {
    PI * (diameter + thickness_mm / 2000.0) * length
}

pub fn head_surface_area(diameter: f64, thickness_mm: f64, head: HeadType) -> f64 {
    let d = diameter + thickness_mm / 2000.0;
    let factor = match head {
        HeadType::Elliptical => 1.09,
        HeadType::Spherical => 1.571,
    };
    factor * d * d
}

pub fn weight(thickness_mm: f64, area: f64, density: f64) -> f64 {
    thickness_mm / 1000.0 * area * density
}

pub fn total_weight(shell_weight: f64, head_weight: f64) -> f64 {
    shell_weight + 2.0 * head_weight
}

pub fn compute(input: &ResolvedInput, tangent_to_tangent: &Calc<f64>) -> MechanicalResult {
    let material = input.material.clone();
    let allowable = (|| {
        material_db::allowable_stress(&material.clone()?, input.design_temperature_c.clone()?)
    })();
    let stress = allowable.clone().map(design_stress);
    let density = (|| material_db::material_density(&material.clone()?))();
    let d = input.diameter.clone();

    let shell_t = (|| {
        shell_thickness(
            input.design_pressure.clone()?,
            d.clone()?,
            stress.clone()?,
            input.joint_efficiency.clone()?,
            input.corrosion_allowance_mm.clone()?,
        )
    })();
    let shell_area = (|| -> Calc<f64> {
        Ok(shell_surface_area(
            d.clone()?,
            shell_t.clone()?,
            tangent_to_tangent.clone()?,
        ))
    })();
    let shell_w =
        (|| -> Calc<f64> { Ok(weight(shell_t.clone()?, shell_area.clone()?, density.clone()?)) })();

    let head = input.head.clone();
    let head_t = (|| {
        head_thickness(
            input.design_pressure.clone()?,
            d.clone()?,
            stress.clone()?,
            input.joint_efficiency.clone()?,
            input.corrosion_allowance_mm.clone()?,
            head.clone()?,
        )
    })();
    // 헤드 표면적은 동체 두께 기준, 헤드 중량은 헤드 두께 기준
    let head_area =
        (|| -> Calc<f64> { Ok(head_surface_area(d.clone()?, shell_t.clone()?, head.clone()?)) })();
    let head_w =
        (|| -> Calc<f64> { Ok(weight(head_t.clone()?, head_area.clone()?, density.clone()?)) })();

    let total = (|| -> Calc<f64> { Ok(total_weight(shell_w.clone()?, head_w.clone()?)) })();

    MechanicalResult {
        allowable_stress: allowable,
        design_stress: stress,
        material_density: density,
        shell: PartResult {
            thickness: shell_t,
            surface_area: shell_area,
            weight: shell_w,
        },
        head: PartResult {
            thickness: head_t,
            surface_area: head_area,
            weight: head_w,
        },
        total_weight: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thin_vessel_hits_floor() {
        let t = shell_thickness(3.5, 1.575, 1200.0, 0.85, 3.0).unwrap();
        assert_eq!(t, MIN_THICKNESS_MM);
    }

    #[test]
    fn thick_vessel_above_floor() {
        // 50·2 / (2·1000·1 − 60) ·1000 + 3
        let t = shell_thickness(50.0, 2.0, 1000.0, 1.0, 3.0).unwrap();
        assert!((t - (100.0 / 1940.0 * 1000.0 + 3.0)).abs() < 1e-9);
        let h = head_thickness(50.0, 2.0, 1000.0, 1.0, 3.0, HeadType::Spherical).unwrap();
        assert!((h - (100.0 / 3980.0 * 1000.0 + 3.0)).abs() < 1e-9);
    }

    #[test]
    fn non_positive_denominator_is_indeterminate() {
        assert!(shell_thickness(100.0, 1.0, 10.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn weight_sums_two_heads() {
        assert_eq!(total_weight(1000.0, 150.0), 1300.0);
        assert!((weight(10.0, 2.0, 7840.0) - 156.8).abs() < 1e-9);
    }
}
