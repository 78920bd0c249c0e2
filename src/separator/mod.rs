//! 수직형 기액 분리 용기 사이징 엔진.
//!
//! [`size_vessel`]은 입력 스냅샷을 받아 모든 산출 항목을 한 번에 계산하는 순수 함수다.
//! 계산 순서: 기액 분리 → 액 보유량 → 높이 구성 → 노즐 → 기계 설계 → 요약.

pub mod aggregate;
pub mod liquid_inventory;
pub mod mechanical;
pub mod nozzle;
pub mod stack_height;
pub mod vapor_liquid;

pub use aggregate::{SeparationVerdict, Summary};
pub use liquid_inventory::{LiquidInventoryResult, LiquidZone, ZoneHeight};
pub use mechanical::{MechanicalResult, PartResult};
pub use nozzle::{NozzleResult, NozzleRole};
pub use stack_height::{Segment, StackResult, StackSegment};
pub use vapor_liquid::VaporLiquidResult;

use crate::calc::Calc;
use crate::input::{ResolvedInput, SizingInput};

/// 한 번의 계산 패스 결과.
#[derive(Debug, Clone)]
pub struct SizingResult {
    pub input: ResolvedInput,
    /// 레이아웃 지원 여부 (수평형/3상이면 미구현)
    pub layout: Calc<()>,
    pub vapor: VaporLiquidResult,
    pub liquid: LiquidInventoryResult,
    pub stack: StackResult,
    pub nozzles: [NozzleResult; 4],
    pub mechanical: MechanicalResult,
    pub summary: Summary,
}

pub fn size_vessel(input: &SizingInput) -> SizingResult {
    size_resolved(input.resolve())
}

/// 이미 해석된 입력으로 계산한다.
pub fn size_resolved(input: ResolvedInput) -> SizingResult {
    let layout = input.supported_layout();
    let vapor = vapor_liquid::compute(&input);
    let liquid = liquid_inventory::compute(&input);
    let stack = stack_height::compute(&input, &vapor, &liquid);
    let nozzles = nozzle::compute(&input);
    let mechanical = mechanical::compute(&input, &stack.tangent_to_tangent);
    let summary = aggregate::compute(
        &layout,
        &input.diameter,
        &input.head,
        &stack.tangent_to_tangent,
        &vapor.min_diameter,
    );
    SizingResult {
        input,
        layout,
        vapor,
        liquid,
        stack,
        nozzles,
        mechanical,
        summary,
    }
}
