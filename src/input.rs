//! 계산 엔진에 전달되는 입력 스냅샷.
//!
//! 외부 화면/시트가 채운 값을 그대로 담는다. 숫자 필드는 숫자, 숫자 문자열, 빈 값을
//! 모두 받을 수 있고, 해석은 [`SizingInput::resolve`]에서 필드별로 이루어진다.
//! 해석에 실패한 필드는 해당 필드만 산출 불가가 된다.

use serde::{Deserialize, Serialize};

use crate::calc::{Calc, ConfigGap, Indeterminate};
use crate::quantity::{validate, QuantityKind};
use crate::units::{
    convert_length, convert_pressure, convert_temperature, LengthUnit, PressureUnit,
    TemperatureUnit,
};

/// 숫자 또는 문자열로 들어오는 입력 필드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// 빈 문자열은 `None`, 숫자가 아닌 문자열은 오류.
    pub fn parse(&self, field: &'static str) -> Calc<Option<f64>> {
        match self {
            FieldValue::Number(v) => Ok(Some(*v)),
            FieldValue::Text(s) if s.trim().is_empty() => Ok(None),
            FieldValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| Indeterminate::NotNumeric {
                    field,
                    raw: s.clone(),
                }),
        }
    }

    /// 배관 호칭경처럼 숫자로 적혀도 표기 문자열로 쓰는 값.
    pub fn as_label(&self) -> Option<String> {
        match self {
            FieldValue::Number(v) => Some(format!("{v}")),
            FieldValue::Text(s) if s.trim().is_empty() => None,
            FieldValue::Text(s) => Some(s.trim().to_string()),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// 용기 방향. 수평형은 수식이 구현되어 있지 않다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// 헤드/바닥 형상.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadType {
    Elliptical,
    Spherical,
}

/// 상(phase) 수. 3상은 수식이 구현되어 있지 않다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseCount {
    Two,
    Three,
}

/// 용기 용도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Application {
    /// 저장/서지: 기액 분리 계산을 적용하지 않는다.
    StorageSurge,
    Separation,
}

/// 제2 액상 구획 형식. 2상 용기에서는 의미가 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compartment {
    Weir,
    Boot,
}

/// 보온/보냉 형식. 계산에는 쓰이지 않고 데이터시트에만 기록된다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Insulation {
    #[default]
    None,
    /// 인체 보호용 (personnel protection)
    #[serde(rename = "pp")]
    PersonnelProtection,
    Hot,
}

impl Insulation {
    /// 데이터시트 표기.
    pub fn sheet_code(self) -> &'static str {
        match self {
            Insulation::None => "No",
            Insulation::PersonnelProtection => "PP",
            Insulation::Hot => "Hot",
        }
    }
}

/// 스냅샷의 단위 선언. 생략하면 내부 기준 단위로 본다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputUnits {
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
    /// 용기 직경과 높이 수동값에 적용된다.
    pub length: LengthUnit,
}

impl Default for InputUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            pressure: PressureUnit::KgPerCm2,
            length: LengthUnit::Meter,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub project: String,
    pub client: String,
    pub vessel_name: String,
    pub vessel_tag: String,
}

/// 공정 유체 조건. 유량 kg/h, 밀도 kg/m³, 점도 cP, 표면장력 dyne/cm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessStream {
    pub operating_temperature: Option<FieldValue>,
    pub operating_pressure: Option<FieldValue>,
    pub vapor_mass_flow: Option<FieldValue>,
    pub vapor_density: Option<FieldValue>,
    pub vapor_viscosity: Option<FieldValue>,
    pub vapor_molecular_weight: Option<FieldValue>,
    pub liquid1_mass_flow: Option<FieldValue>,
    pub liquid1_density: Option<FieldValue>,
    pub liquid1_viscosity: Option<FieldValue>,
    pub liquid2_mass_flow: Option<FieldValue>,
    /// 0 또는 빈 값이면 제2 액상이 없는 것으로 본다.
    pub liquid2_density: Option<FieldValue>,
    pub liquid2_viscosity: Option<FieldValue>,
    pub surface_tension: Option<FieldValue>,
    pub design_temperature: Option<FieldValue>,
    pub design_pressure: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselConfiguration {
    pub orientation: Option<Orientation>,
    pub head: Option<HeadType>,
    pub phases: Option<PhaseCount>,
    pub application: Option<Application>,
    pub demister: bool,
    pub compartment: Option<Compartment>,
    /// 설계자가 선택한 용기 내경
    pub diameter: Option<FieldValue>,
}

/// 액위 구간별 체류 시간(분).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidenceTimes {
    pub lsal_to_lal: Option<FieldValue>,
    pub lal_to_lah: Option<FieldValue>,
    pub lah_to_lsah: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyFactors {
    /// carry-over 비율(0~1)
    pub carry_over: Option<FieldValue>,
    pub vapor_liquid: Option<FieldValue>,
    pub liquid1: Option<FieldValue>,
    pub liquid2: Option<FieldValue>,
    pub liquid1_residence: ResidenceTimes,
    pub liquid2_residence: ResidenceTimes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSpec {
    pub material: Option<String>,
    pub joint_efficiency: Option<FieldValue>,
    /// 부식 여유 [mm]
    pub corrosion_allowance: Option<FieldValue>,
    pub insulation: Insulation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NozzleSelection {
    /// 호칭경 [in]
    pub nominal: Option<FieldValue>,
    pub schedule: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NozzleSelections {
    pub inlet: NozzleSelection,
    pub vapor_outlet: NozzleSelection,
    pub liquid1_outlet: NozzleSelection,
    pub liquid2_outlet: NozzleSelection,
}

/// 설계자가 계산값 대신 넣는 수동값. 엔진은 읽기만 한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    pub k_value: Option<FieldValue>,
    pub bottom_to_lsal: Option<FieldValue>,
    pub lsal_to_lal: Option<FieldValue>,
    pub lal_to_lah: Option<FieldValue>,
    pub lah_to_lsah: Option<FieldValue>,
    pub lsah_to_inlet: Option<FieldValue>,
    pub inlet_to_demister: Option<FieldValue>,
    pub demister_height: Option<FieldValue>,
    pub demister_to_tangent: Option<FieldValue>,
    pub tangent_to_tangent: Option<FieldValue>,
}

/// 한 번의 계산 패스에 필요한 전체 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingInput {
    pub units: Option<InputUnits>,
    pub project: ProjectInfo,
    pub process: ProcessStream,
    pub vessel: VesselConfiguration,
    pub safety: SafetyFactors,
    pub material: MaterialSpec,
    pub nozzles: NozzleSelections,
    pub overrides: Overrides,
}

/// 내부 기준 단위로 해석·검증된 입력.
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub orientation: Calc<Orientation>,
    pub head: Calc<HeadType>,
    pub phases: Calc<PhaseCount>,
    pub application: Calc<Application>,
    pub demister: bool,
    pub diameter: Calc<f64>,

    pub vapor_mass_flow: Calc<f64>,
    pub vapor_density: Calc<f64>,
    pub liquid1_mass_flow: Calc<f64>,
    pub liquid1_density: Calc<f64>,
    /// `None`이면 제2 액상 없음
    pub liquid2: Calc<Option<Phase>>,
    pub surface_tension: Calc<f64>,
    pub design_temperature_c: Calc<f64>,
    pub design_pressure: Calc<f64>,

    pub carry_over: Calc<f64>,
    pub vapor_liquid_factor: Calc<f64>,
    pub residence_min: [Calc<f64>; 3],

    pub material: Calc<String>,
    pub joint_efficiency: Calc<f64>,
    pub corrosion_allowance_mm: Calc<f64>,

    pub nozzles: [Calc<(String, String)>; 4],
    pub overrides: ResolvedOverrides,
}

/// 흐르는 상 하나의 질량유량[kg/h]과 밀도[kg/m³].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub mass_flow: f64,
    pub density: f64,
}

/// 수동값. 비어 있으면 `Ok(None)`, 잘못 적혔으면 `Err`.
#[derive(Debug, Clone)]
pub struct ResolvedOverrides {
    pub k_value: Calc<Option<f64>>,
    pub bottom_to_lsal: Calc<Option<f64>>,
    pub zones: [Calc<Option<f64>>; 3],
    pub lsah_to_inlet: Calc<Option<f64>>,
    pub inlet_to_demister: Calc<Option<f64>>,
    pub demister_height: Calc<Option<f64>>,
    pub demister_to_tangent: Calc<Option<f64>>,
    pub tangent_to_tangent: Calc<Option<f64>>,
}

fn optional(
    value: &Option<FieldValue>,
    kind: QuantityKind,
    field: &'static str,
) -> Calc<Option<f64>> {
    match value {
        None => Ok(None),
        Some(v) => match v.parse(field)? {
            None => Ok(None),
            Some(x) => validate(kind, field, x).map(Some),
        },
    }
}

fn required(value: &Option<FieldValue>, kind: QuantityKind, field: &'static str) -> Calc<f64> {
    optional(value, kind, field)?.ok_or(Indeterminate::Missing(field))
}

fn required_enum<T: Copy>(value: Option<T>, field: &'static str) -> Calc<T> {
    value.ok_or(Indeterminate::Missing(field))
}

impl SizingInput {
    /// 단위 환산과 범위 검증을 거쳐 엔진 입력으로 해석한다.
    pub fn resolve(&self) -> ResolvedInput {
        let units = self.units.unwrap_or_default();
        let length = |v: &Option<FieldValue>,
                      kind: QuantityKind,
                      field: &'static str|
         -> Calc<Option<f64>> {
            let raw = match v {
                None => return Ok(None),
                Some(v) => v.parse(field)?,
            };
            match raw {
                None => Ok(None),
                Some(x) => {
                    let m = convert_length(x, units.length, LengthUnit::Meter);
                    validate(kind, field, m).map(Some)
                }
            }
        };
        let temperature = |v: &Option<FieldValue>, field: &'static str| -> Calc<f64> {
            let raw = v
                .as_ref()
                .map(|v| v.parse(field))
                .transpose()?
                .flatten()
                .ok_or(Indeterminate::Missing(field))?;
            let c = convert_temperature(raw, units.temperature, TemperatureUnit::Celsius);
            validate(QuantityKind::Temperature, field, c)
        };
        let pressure = |v: &Option<FieldValue>, field: &'static str| -> Calc<f64> {
            let raw = required(v, QuantityKind::Pressure, field)?;
            Ok(convert_pressure(raw, units.pressure, PressureUnit::KgPerCm2))
        };

        let p = &self.process;
        let s = &self.safety;
        let o = &self.overrides;
        let n = &self.nozzles;

        ResolvedInput {
            orientation: required_enum(self.vessel.orientation, "orientation"),
            head: required_enum(self.vessel.head, "head"),
            phases: required_enum(self.vessel.phases, "phases"),
            application: required_enum(self.vessel.application, "application"),
            // 저장/서지 용기에는 데미스터를 두지 않는다.
            demister: self.vessel.demister
                && self.vessel.application != Some(Application::StorageSurge),
            diameter: length(&self.vessel.diameter, QuantityKind::Length, "diameter")
                .and_then(|d| d.ok_or(Indeterminate::Missing("diameter"))),

            vapor_mass_flow: required(&p.vapor_mass_flow, QuantityKind::MassFlow, "vapor_mass_flow"),
            vapor_density: required(&p.vapor_density, QuantityKind::Density, "vapor_density"),
            liquid1_mass_flow: required(
                &p.liquid1_mass_flow,
                QuantityKind::MassFlow,
                "liquid1_mass_flow",
            ),
            liquid1_density: required(&p.liquid1_density, QuantityKind::Density, "liquid1_density"),
            liquid2: resolve_liquid2(p),
            surface_tension: required(
                &p.surface_tension,
                QuantityKind::SurfaceTension,
                "surface_tension",
            ),
            design_temperature_c: temperature(&p.design_temperature, "design_temperature"),
            design_pressure: pressure(&p.design_pressure, "design_pressure"),

            carry_over: required(&s.carry_over, QuantityKind::Fraction, "carry_over"),
            vapor_liquid_factor: required(&s.vapor_liquid, QuantityKind::Factor, "vapor_liquid"),
            residence_min: [
                required(
                    &s.liquid1_residence.lsal_to_lal,
                    QuantityKind::Time,
                    "residence_lsal_to_lal",
                ),
                required(
                    &s.liquid1_residence.lal_to_lah,
                    QuantityKind::Time,
                    "residence_lal_to_lah",
                ),
                required(
                    &s.liquid1_residence.lah_to_lsah,
                    QuantityKind::Time,
                    "residence_lah_to_lsah",
                ),
            ],

            material: self
                .material
                .material
                .as_ref()
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .ok_or(Indeterminate::Missing("material")),
            joint_efficiency: required(
                &self.material.joint_efficiency,
                QuantityKind::Fraction,
                "joint_efficiency",
            ),
            corrosion_allowance_mm: required(
                &self.material.corrosion_allowance,
                QuantityKind::Length,
                "corrosion_allowance",
            ),

            nozzles: [
                resolve_nozzle(&n.inlet, "inlet_nozzle"),
                resolve_nozzle(&n.vapor_outlet, "vapor_outlet_nozzle"),
                resolve_nozzle(&n.liquid1_outlet, "liquid1_outlet_nozzle"),
                resolve_nozzle(&n.liquid2_outlet, "liquid2_outlet_nozzle"),
            ],
            overrides: ResolvedOverrides {
                k_value: optional(&o.k_value, QuantityKind::Factor, "k_value_override"),
                bottom_to_lsal: length(
                    &o.bottom_to_lsal,
                    QuantityKind::SignedLength,
                    "bottom_to_lsal_override",
                ),
                zones: [
                    length(&o.lsal_to_lal, QuantityKind::Length, "lsal_to_lal_override"),
                    length(&o.lal_to_lah, QuantityKind::Length, "lal_to_lah_override"),
                    length(&o.lah_to_lsah, QuantityKind::Length, "lah_to_lsah_override"),
                ],
                lsah_to_inlet: length(
                    &o.lsah_to_inlet,
                    QuantityKind::Length,
                    "lsah_to_inlet_override",
                ),
                inlet_to_demister: length(
                    &o.inlet_to_demister,
                    QuantityKind::Length,
                    "inlet_to_demister_override",
                ),
                demister_height: length(
                    &o.demister_height,
                    QuantityKind::Length,
                    "demister_height_override",
                ),
                demister_to_tangent: length(
                    &o.demister_to_tangent,
                    QuantityKind::Length,
                    "demister_to_tangent_override",
                ),
                tangent_to_tangent: length(
                    &o.tangent_to_tangent,
                    QuantityKind::Length,
                    "tangent_to_tangent_override",
                ),
            },
        }
    }
}

impl ResolvedInput {
    /// 2상 수직형 외의 구성은 여기서 미구현으로 걸러진다.
    pub fn supported_layout(&self) -> Calc<()> {
        if self.orientation.clone()? == Orientation::Horizontal {
            return Err(Indeterminate::NotImplemented(ConfigGap::HorizontalVessel));
        }
        if self.phases.clone()? == PhaseCount::Three {
            return Err(Indeterminate::NotImplemented(ConfigGap::ThreePhase));
        }
        Ok(())
    }
}

/// 제2 액상 밀도가 0이거나 비어 있으면 제2 액상이 없는 것으로 본다.
fn resolve_liquid2(p: &ProcessStream) -> Calc<Option<Phase>> {
    let density = optional(&p.liquid2_density, QuantityKind::Density, "liquid2_density")?;
    match density {
        None => Ok(None),
        Some(d) if d == 0.0 => Ok(None),
        Some(density) => {
            let mass_flow = optional(
                &p.liquid2_mass_flow,
                QuantityKind::MassFlow,
                "liquid2_mass_flow",
            )?
            .unwrap_or(0.0);
            Ok(Some(Phase { mass_flow, density }))
        }
    }
}

fn resolve_nozzle(sel: &NozzleSelection, field: &'static str) -> Calc<(String, String)> {
    let nominal = sel
        .nominal
        .as_ref()
        .and_then(FieldValue::as_label)
        .ok_or(Indeterminate::Missing(field))?;
    let schedule = sel
        .schedule
        .as_ref()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(Indeterminate::Missing(field))?;
    Ok((nominal, schedule))
}
