//! 계산 결과 표시용 스냅샷.
//!
//! 엔진 결과는 전체 정밀도로 유지되고, 반올림과 표시 단위 환산은 여기서만 한다.
//! 산출 불가 항목은 숫자 대신 사유 문자열로 남는다.

use serde::{Deserialize, Serialize};

use crate::calc::{Calc, Indeterminate};
use crate::input::ProjectInfo;
use crate::separator::{SeparationVerdict, SizingResult};
use crate::units::{
    convert_area, convert_length, convert_volume, AreaUnit, LengthUnit, VolumeUnit,
};

/// 보고서 표시 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportUnits {
    pub length: LengthUnit,
    pub area: AreaUnit,
    pub volume: VolumeUnit,
}

impl Default for ReportUnits {
    fn default() -> Self {
        Self {
            length: LengthUnit::Meter,
            area: AreaUnit::SquareMeter,
            volume: VolumeUnit::CubicMeter,
        }
    }
}

/// 반올림된 값 또는 산출 불가 표시.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportValue {
    Value(f64),
    Marker(String),
}

impl std::fmt::Display for ReportValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportValue::Value(v) => write!(f, "{v}"),
            ReportValue::Marker(m) => write!(f, "{m}"),
        }
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// 산출 불가 사유를 표시 문자열로 만든다.
pub fn marker(reason: &Indeterminate) -> String {
    match reason {
        Indeterminate::NotImplemented(gap) => format!("not implemented: {gap}"),
        other => format!("indeterminate: {other}"),
    }
}

fn value(calc: &Calc<f64>, decimals: i32) -> ReportValue {
    match calc {
        Ok(v) => ReportValue::Value(round_to(*v, decimals)),
        Err(e) => ReportValue::Marker(marker(e)),
    }
}

fn optional(calc: &Calc<Option<f64>>, decimals: i32) -> Option<ReportValue> {
    match calc {
        Ok(None) => None,
        Ok(Some(v)) => Some(ReportValue::Value(round_to(*v, decimals))),
        Err(e) => Some(ReportValue::Marker(marker(e))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitLabels {
    pub length: String,
    pub area: String,
    pub volume: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaporLiquidSection {
    pub k_value: ReportValue,
    pub k_used: ReportValue,
    /// m/s
    pub allowable_gas_velocity: ReportValue,
    /// m³/s
    pub actual_gas_rate: ReportValue,
    pub min_diameter: ReportValue,
    pub demister_area: ReportValue,
    pub demister_diameter: ReportValue,
    pub cross_area: ReportValue,
    /// m/s
    pub actual_gas_velocity: ReportValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSection {
    pub zone: String,
    pub inventory: ReportValue,
    pub computed_height: ReportValue,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub override_height: Option<ReportValue>,
    pub effective_height: ReportValue,
    pub recomputed_inventory: ReportValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidSection {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub liquid2_zones: Option<String>,
    pub bottom_clearance: ReportValue,
    pub bottom_clearance_effective: ReportValue,
    pub bottom_volume: ReportValue,
    pub zones: Vec<ZoneSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSection {
    pub segment: String,
    pub computed: ReportValue,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub override_value: Option<ReportValue>,
    pub effective: ReportValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSection {
    pub head_height: ReportValue,
    pub inlet_to_demister_min: ReportValue,
    pub blank_segments: Vec<String>,
    pub composed_length: ReportValue,
    pub tangent_to_tangent: ReportValue,
    pub segments: Vec<SegmentSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NozzleSection {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nominal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub schedule: Option<String>,
    pub internal_diameter_mm: ReportValue,
    /// m/s
    pub velocity: ReportValue,
    /// kg/(m·s²)
    pub momentum: ReportValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanicalSection {
    pub material: String,
    pub allowable_stress_ksi: ReportValue,
    pub design_stress_kg_cm2: ReportValue,
    pub material_density: ReportValue,
    pub shell_thickness_mm: ReportValue,
    pub shell_surface_area: ReportValue,
    pub shell_weight_kg: ReportValue,
    pub head_thickness_mm: ReportValue,
    pub head_surface_area: ReportValue,
    pub head_weight_kg: ReportValue,
    pub total_weight_kg: ReportValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySection {
    pub diameter: ReportValue,
    pub required_min_diameter: ReportValue,
    pub separation: String,
    pub tangent_to_tangent: ReportValue,
    pub length_to_diameter: ReportValue,
    pub vessel_volume: ReportValue,
    pub total_weight_kg: ReportValue,
}

/// 한 번의 계산 패스를 표시용으로 정리한 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingReport {
    pub warnings: Vec<String>,
    pub project: ProjectInfo,
    pub units: UnitLabels,
    pub summary: SummarySection,
    pub vapor_liquid: VaporLiquidSection,
    pub liquid: LiquidSection,
    pub stack: StackSection,
    pub nozzles: Vec<NozzleSection>,
    pub mechanical: MechanicalSection,
}

impl SizingReport {
    pub fn from_result(result: &SizingResult, project: &ProjectInfo, units: ReportUnits) -> Self {
        let len = |c: &Calc<f64>| {
            value(
                &c.clone().map(|m| convert_length(m, LengthUnit::Meter, units.length)),
                3,
            )
        };
        let len_opt = |c: &Calc<Option<f64>>| {
            optional(
                &c.clone()
                    .map(|o| o.map(|m| convert_length(m, LengthUnit::Meter, units.length))),
                3,
            )
        };
        let area = |c: &Calc<f64>| {
            value(
                &c.clone().map(|a| convert_area(a, AreaUnit::SquareMeter, units.area)),
                3,
            )
        };
        let vol = |c: &Calc<f64>, decimals: i32| {
            value(
                &c.clone().map(|v| convert_volume(v, VolumeUnit::CubicMeter, units.volume)),
                decimals,
            )
        };

        let v = &result.vapor;
        let vapor_liquid = VaporLiquidSection {
            k_value: value(&v.k_value, 3),
            k_used: value(&v.k_used, 3),
            allowable_gas_velocity: value(&v.allowable_gas_velocity, 2),
            actual_gas_rate: value(&v.actual_gas_rate, 3),
            min_diameter: len(&v.min_diameter),
            demister_area: area(&v.demister_area),
            demister_diameter: len(&v.demister_diameter),
            cross_area: area(&v.cross_area),
            actual_gas_velocity: value(&v.actual_gas_velocity, 3),
        };

        let l = &result.liquid;
        let liquid = LiquidSection {
            liquid2_zones: l.liquid2_zones.as_ref().map(marker),
            bottom_clearance: len(&l.bottom_clearance),
            bottom_clearance_effective: len(&l.bottom_clearance_effective),
            bottom_volume: vol(&l.bottom_volume, 3),
            zones: l
                .zones
                .iter()
                .map(|z| ZoneSection {
                    zone: z.zone.key().to_string(),
                    inventory: vol(&z.inventory, 3),
                    computed_height: len(&z.computed),
                    override_height: len_opt(&z.override_height),
                    effective_height: len(&z.effective()),
                    recomputed_inventory: vol(&z.recomputed_inventory, 3),
                })
                .collect(),
        };

        let s = &result.stack;
        let stack = StackSection {
            head_height: len(&s.head_height),
            inlet_to_demister_min: len(&s.inlet_to_demister_min),
            blank_segments: s.blank_segments.iter().map(|b| b.key().to_string()).collect(),
            composed_length: len(&s.composed_length),
            tangent_to_tangent: len(&s.tangent_to_tangent),
            segments: s
                .segments
                .iter()
                .map(|seg| SegmentSection {
                    segment: seg.kind.key().to_string(),
                    computed: len(&seg.computed),
                    override_value: len_opt(&seg.override_value),
                    effective: len(&seg.effective()),
                })
                .collect(),
        };

        let nozzles = result
            .nozzles
            .iter()
            .map(|n| {
                let (nominal, schedule) = match &n.selection {
                    Ok((nom, sch)) => (Some(nom.clone()), Some(sch.clone())),
                    Err(_) => (None, None),
                };
                NozzleSection {
                    role: n.role.key().to_string(),
                    nominal,
                    schedule,
                    internal_diameter_mm: value(
                        &n.internal_diameter.clone().map(|m| m * 1000.0),
                        1,
                    ),
                    velocity: value(&n.velocity, 3),
                    momentum: value(&n.momentum, 1),
                }
            })
            .collect();

        let m = &result.mechanical;
        let mechanical = MechanicalSection {
            material: match &result.input.material {
                Ok(name) => name.clone(),
                Err(e) => marker(e),
            },
            allowable_stress_ksi: value(&m.allowable_stress, 3),
            design_stress_kg_cm2: value(&m.design_stress, 3),
            material_density: value(&m.material_density, 1),
            shell_thickness_mm: value(&m.shell.thickness, 3),
            shell_surface_area: area(&m.shell.surface_area),
            shell_weight_kg: value(&m.shell.weight, 1),
            head_thickness_mm: value(&m.head.thickness, 3),
            head_surface_area: area(&m.head.surface_area),
            head_weight_kg: value(&m.head.weight, 1),
            total_weight_kg: value(&m.total_weight, 1),
        };

        let summary = SummarySection {
            diameter: len(&result.input.diameter),
            required_min_diameter: len(&result.summary.required_min_diameter),
            separation: match &result.summary.separation {
                Ok(SeparationVerdict::Ok) => "OK".to_string(),
                Ok(SeparationVerdict::NotOk) => "NOT OK".to_string(),
                Err(e) => marker(e),
            },
            tangent_to_tangent: len(&s.tangent_to_tangent),
            length_to_diameter: value(&result.summary.length_to_diameter, 1),
            vessel_volume: vol(&result.summary.vessel_volume, 1),
            total_weight_kg: value(&m.total_weight, 1),
        };

        let mut warnings = Vec::new();
        if let Err(e) = &result.layout {
            warnings.push(marker(e));
        }
        for b in &s.blank_segments {
            warnings.push(format!("stack segment left blank: {}", b.key()));
        }

        SizingReport {
            warnings,
            project: project.clone(),
            units: UnitLabels {
                length: units.length.symbol().to_string(),
                area: units.area.symbol().to_string(),
                volume: units.volume.symbol().to_string(),
            },
            summary,
            vapor_liquid,
            liquid,
            stack,
            nozzles,
            mechanical,
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::ConfigGap;

    #[test]
    fn rounding_precision() {
        assert_eq!(round_to(1.63572, 3), 1.636);
        assert_eq!(round_to(12345.66, 1), 12345.7);
    }

    #[test]
    fn markers_distinguish_gap_from_bad_input() {
        let gap = marker(&Indeterminate::NotImplemented(ConfigGap::HorizontalVessel));
        assert!(gap.starts_with("not implemented: "));
        let bad = marker(&Indeterminate::Missing("vapor_density"));
        assert!(bad.starts_with("indeterminate: "));
        assert!(bad.contains("vapor_density"));
    }

    #[test]
    fn absent_override_is_omitted() {
        assert_eq!(optional(&Ok(None), 3), None);
        assert_eq!(optional(&Ok(Some(0.12345)), 3), Some(ReportValue::Value(0.123)));
    }
}
