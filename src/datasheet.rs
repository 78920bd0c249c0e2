//! 공정 데이터시트와 주고받는 필드.
//!
//! 읽기: 시트 순서대로 13개 공정 입력. 쓰기: 용기 데이터시트 항목.

use serde::{Deserialize, Serialize};

use crate::calc::Calc;
use crate::input::{FieldValue, ProcessStream, SizingInput};
use crate::report::{marker, round_to, ReportValue};
use crate::separator::SizingResult;

/// 데이터시트에서 읽는 13개 공정 입력 (시트 순서).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSheetInput {
    pub temperature: Option<FieldValue>,
    pub pressure: Option<FieldValue>,
    pub vapor_mass_flow: Option<FieldValue>,
    pub vapor_density: Option<FieldValue>,
    pub vapor_viscosity: Option<FieldValue>,
    pub vapor_molecular_weight: Option<FieldValue>,
    pub liquid1_mass_flow: Option<FieldValue>,
    pub liquid1_density: Option<FieldValue>,
    pub liquid1_viscosity: Option<FieldValue>,
    pub liquid2_mass_flow: Option<FieldValue>,
    pub liquid2_density: Option<FieldValue>,
    pub liquid2_viscosity: Option<FieldValue>,
    pub surface_tension: Option<FieldValue>,
}

/// 시트 한 행의 필드 수.
pub const SHEET_ROW_LEN: usize = 13;

impl DataSheetInput {
    /// 공정 조건에 덮어쓴다. 시트에 값이 있는 칸만 바뀌고 설계 조건은 그대로 둔다.
    pub fn apply_to(&self, process: &mut ProcessStream) {
        let pairs: [(&Option<FieldValue>, &mut Option<FieldValue>); SHEET_ROW_LEN] = [
            (&self.temperature, &mut process.operating_temperature),
            (&self.pressure, &mut process.operating_pressure),
            (&self.vapor_mass_flow, &mut process.vapor_mass_flow),
            (&self.vapor_density, &mut process.vapor_density),
            (&self.vapor_viscosity, &mut process.vapor_viscosity),
            (&self.vapor_molecular_weight, &mut process.vapor_molecular_weight),
            (&self.liquid1_mass_flow, &mut process.liquid1_mass_flow),
            (&self.liquid1_density, &mut process.liquid1_density),
            (&self.liquid1_viscosity, &mut process.liquid1_viscosity),
            (&self.liquid2_mass_flow, &mut process.liquid2_mass_flow),
            (&self.liquid2_density, &mut process.liquid2_density),
            (&self.liquid2_viscosity, &mut process.liquid2_viscosity),
            (&self.surface_tension, &mut process.surface_tension),
        ];
        for (src, dst) in pairs {
            if src.is_some() {
                dst.clone_from(src);
            }
        }
    }
}

/// 용기 데이터시트로 내보내는 항목.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSheetExport {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub liquid1_mass_flow: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub liquid1_density: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vapor_mass_flow: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vapor_molecular_weight: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vapor_density: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub operating_temperature: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub operating_pressure: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub design_temperature: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub design_pressure: Option<FieldValue>,
    pub shell_id_mm: ReportValue,
    pub tangent_to_tangent_mm: ReportValue,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub corrosion_allowance: Option<FieldValue>,
    /// No / PP / Hot
    pub insulation: String,
    pub shell_material: String,
    /// Yes / No
    pub demister: String,
}

fn millimeters(calc: &Calc<f64>) -> ReportValue {
    match calc {
        Ok(m) => ReportValue::Value(round_to(m * 1000.0, 0)),
        Err(e) => ReportValue::Marker(marker(e)),
    }
}

impl DataSheetExport {
    pub fn new(input: &SizingInput, result: &SizingResult) -> Self {
        let p = &input.process;
        Self {
            liquid1_mass_flow: p.liquid1_mass_flow.clone(),
            liquid1_density: p.liquid1_density.clone(),
            vapor_mass_flow: p.vapor_mass_flow.clone(),
            vapor_molecular_weight: p.vapor_molecular_weight.clone(),
            vapor_density: p.vapor_density.clone(),
            operating_temperature: p.operating_temperature.clone(),
            operating_pressure: p.operating_pressure.clone(),
            design_temperature: p.design_temperature.clone(),
            design_pressure: p.design_pressure.clone(),
            shell_id_mm: millimeters(&result.input.diameter),
            tangent_to_tangent_mm: millimeters(&result.stack.tangent_to_tangent),
            corrosion_allowance: input.material.corrosion_allowance.clone(),
            insulation: input.material.insulation.sheet_code().to_string(),
            shell_material: input.material.material.clone().unwrap_or_default(),
            demister: if result.input.demister { "Yes" } else { "No" }.to_string(),
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_design_conditions_and_blank_cells() {
        let mut process = ProcessStream {
            design_pressure: Some(FieldValue::from(5.0)),
            surface_tension: Some(FieldValue::from(7.67)),
            ..Default::default()
        };
        let sheet = DataSheetInput {
            vapor_density: Some(FieldValue::from("19.7")),
            ..Default::default()
        };
        sheet.apply_to(&mut process);
        assert_eq!(process.vapor_density, Some(FieldValue::from("19.7")));
        assert_eq!(process.surface_tension, Some(FieldValue::from(7.67)));
        assert_eq!(process.design_pressure, Some(FieldValue::from(5.0)));
    }
}
