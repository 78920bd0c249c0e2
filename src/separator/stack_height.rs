//! 수직형 용기 탄젠트~탄젠트(T-T) 높이 구성.
//!
//! 아래에서 위로: 바닥~LSAL, 액위 3구간, LSAH~입구, 입구~데미스터(h5),
//! 데미스터 두께, 데미스터~상부 탄젠트.

use crate::calc::{Calc, Indeterminate};
use crate::input::{Application, HeadType, Orientation, ResolvedInput};

use super::liquid_inventory::{effective, LiquidInventoryResult};
use super::vapor_liquid::VaporLiquidResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackSegment {
    BottomToLsal,
    LsalToLal,
    LalToLah,
    LahToLsah,
    LsahToInlet,
    InletToDemister,
    DemisterThickness,
    DemisterToTangent,
}

impl StackSegment {
    pub fn key(self) -> &'static str {
        match self {
            StackSegment::BottomToLsal => "bottom_to_lsal",
            StackSegment::LsalToLal => "lsal_to_lal",
            StackSegment::LalToLah => "lal_to_lah",
            StackSegment::LahToLsah => "lah_to_lsah",
            StackSegment::LsahToInlet => "lsah_to_inlet",
            StackSegment::InletToDemister => "inlet_to_demister",
            StackSegment::DemisterThickness => "demister_thickness",
            StackSegment::DemisterToTangent => "demister_to_tangent",
        }
    }
}

/// 높이 구성 요소 하나.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub kind: StackSegment,
    pub computed: Calc<f64>,
    pub override_value: Calc<Option<f64>>,
}

impl Segment {
    pub fn effective(&self) -> Calc<f64> {
        effective(&self.computed, &self.override_value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackResult {
    pub head_height: Calc<f64>,
    /// 입구~데미스터 최소 이격 (참고값)
    pub inlet_to_demister_min: Calc<f64>,
    pub segments: Vec<Segment>,
    /// 값이 비어 0으로 합산된 구간 (경고)
    pub blank_segments: Vec<StackSegment>,
    /// 구간 합계 [m]
    pub composed_length: Calc<f64>,
    /// 수동 T-T 가 있으면 그 값, 없으면 구간 합계
    pub tangent_to_tangent: Calc<f64>,
}

/// 헤드 높이: 타원형 D/4, 반구형 D/2.
pub fn head_height(head: HeadType, diameter: f64) -> f64 {
    match head {
        HeadType::Elliptical => diameter / 4.0,
        HeadType::Spherical => diameter / 2.0,
    }
}

fn vapor_space_clearance(diameter: f64) -> f64 {
    (0.3 * diameter).max(0.3)
}

/// LSAH~입구 노즐 높이 [m].
pub fn lsah_to_inlet(diameter: f64) -> f64 {
    vapor_space_clearance(diameter)
}

/// 입구 노즐~데미스터 최소 이격 [m].
pub fn inlet_to_demister(diameter: f64) -> f64 {
    vapor_space_clearance(diameter)
}

/// 입구 노즐 위 공간 h5 [m].
///
/// 저장/서지 용도에서는 유효 바닥~LSAL 값을 그대로 쓴다.
pub fn inlet_nozzle_clearance(
    application: Application,
    bottom_to_lsal: Calc<f64>,
    has_demister: bool,
    head: HeadType,
    diameter: f64,
) -> Calc<f64> {
    match application {
        Application::StorageSurge => bottom_to_lsal,
        Application::Separation if has_demister => Ok((0.6 * diameter).max(0.6)),
        Application::Separation => {
            let hh = head_height(head, diameter);
            Ok(1.0_f64.max(diameter).max(0.6 + hh) - hh)
        }
    }
}

/// 데미스터 패드 두께 [m].
pub fn demister_height(orientation: Orientation, has_demister: bool) -> f64 {
    match (has_demister, orientation) {
        (false, _) => 0.0,
        (true, Orientation::Vertical) => 0.15,
        (true, Orientation::Horizontal) => 0.1,
    }
}

/// 데미스터~상부 탄젠트 거리 [m].
pub fn demister_to_tangent(
    diameter: f64,
    head: HeadType,
    demister_diameter: f64,
    has_demister: bool,
) -> f64 {
    if !has_demister {
        return 0.0;
    }
    if 0.75 * diameter > demister_diameter {
        (0.4 * diameter - head_height(head, diameter)).max(0.15)
    } else {
        0.15
    }
}

/// 구간 유효값을 합산한다.
///
/// 입력이 비어 산출 불가인 구간은 0으로 더하고 목록에 남긴다. 미구현 구성은
/// 전체를 미구현으로 만든다. 모든 구간이 비어 있으면 첫 사유를 돌려준다.
pub fn compose(segments: &[Segment]) -> (Calc<f64>, Vec<StackSegment>) {
    let mut total = 0.0;
    let mut blank = Vec::new();
    let mut first_reason: Option<Indeterminate> = None;
    for seg in segments {
        match seg.effective() {
            Ok(v) => total += v,
            Err(e) if e.is_not_implemented() => return (Err(e), Vec::new()),
            Err(e) => {
                blank.push(seg.kind);
                first_reason.get_or_insert(e);
            }
        }
    }
    if blank.len() == segments.len() {
        let reason = first_reason.unwrap_or(Indeterminate::Missing("tangent_to_tangent"));
        return (Err(reason), blank);
    }
    (Ok(total), blank)
}

pub fn compute(
    input: &ResolvedInput,
    vapor: &VaporLiquidResult,
    liquid: &LiquidInventoryResult,
) -> StackResult {
    let layout = input.supported_layout();
    let diameter = (|| {
        layout.clone()?;
        input.diameter.clone()
    })();
    let head = input.head.clone();
    let o = &input.overrides;

    let hh = (|| -> Calc<f64> { Ok(head_height(head.clone()?, diameter.clone()?)) })();
    let lsah_inlet = diameter.clone().map(lsah_to_inlet);
    let inlet_min = diameter.clone().map(inlet_to_demister);
    let h5 = (|| {
        inlet_nozzle_clearance(
            input.application.clone()?,
            liquid.bottom_clearance_effective.clone(),
            input.demister,
            head.clone()?,
            diameter.clone()?,
        )
    })();
    let pad = (|| -> Calc<f64> {
        layout.clone()?;
        Ok(demister_height(input.orientation.clone()?, input.demister))
    })();
    let dem_top = (|| -> Calc<f64> {
        if !input.demister {
            return Ok(0.0);
        }
        Ok(demister_to_tangent(
            diameter.clone()?,
            head.clone()?,
            vapor.demister_diameter.clone()?,
            true,
        ))
    })();

    let [z1, z2, z3] = &liquid.zones;
    let segments = vec![
        Segment {
            kind: StackSegment::BottomToLsal,
            computed: liquid.bottom_clearance.clone(),
            override_value: o.bottom_to_lsal.clone(),
        },
        Segment {
            kind: StackSegment::LsalToLal,
            computed: z1.computed.clone(),
            override_value: z1.override_height.clone(),
        },
        Segment {
            kind: StackSegment::LalToLah,
            computed: z2.computed.clone(),
            override_value: z2.override_height.clone(),
        },
        Segment {
            kind: StackSegment::LahToLsah,
            computed: z3.computed.clone(),
            override_value: z3.override_height.clone(),
        },
        Segment {
            kind: StackSegment::LsahToInlet,
            computed: lsah_inlet,
            override_value: o.lsah_to_inlet.clone(),
        },
        Segment {
            kind: StackSegment::InletToDemister,
            computed: h5,
            override_value: o.inlet_to_demister.clone(),
        },
        Segment {
            kind: StackSegment::DemisterThickness,
            computed: pad,
            override_value: o.demister_height.clone(),
        },
        Segment {
            kind: StackSegment::DemisterToTangent,
            computed: dem_top,
            override_value: o.demister_to_tangent.clone(),
        },
    ];

    let (composed, blank_segments) = match &layout {
        Err(e) if e.is_not_implemented() => (Err(e.clone()), Vec::new()),
        _ => compose(&segments),
    };
    let tangent_to_tangent = effective(&composed, &o.tangent_to_tangent);

    StackResult {
        head_height: hh,
        inlet_to_demister_min: inlet_min,
        segments,
        blank_segments,
        composed_length: composed,
        tangent_to_tangent,
    }
}
