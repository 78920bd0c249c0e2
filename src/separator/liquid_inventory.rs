//! 액 보유량과 액위 구간 높이.
//!
//! 구간은 아래에서 위로 LSAL→LAL, LAL→LAH, LAH→LSAH 이다. 각 구간은 계산 높이와
//! 수동값을 함께 들고 있고, 하류 계산은 항상 유효값(수동값 우선)을 쓴다.

use std::f64::consts::PI;

use crate::calc::{self, Calc, ConfigGap, Indeterminate};
use crate::input::{HeadType, Orientation, PhaseCount, ResolvedInput};

use super::vapor_liquid::cross_area;

/// 제1 액상 액위 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidZone {
    LsalToLal,
    LalToLah,
    LahToLsah,
}

impl LiquidZone {
    pub const ALL: [LiquidZone; 3] = [
        LiquidZone::LsalToLal,
        LiquidZone::LalToLah,
        LiquidZone::LahToLsah,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LiquidZone::LsalToLal => "lsal_to_lal",
            LiquidZone::LalToLah => "lal_to_lah",
            LiquidZone::LahToLsah => "lah_to_lsah",
        }
    }
}

/// 구간 하나의 높이 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneHeight {
    pub zone: LiquidZone,
    /// 체류 시간 기준 보유량 [m³]
    pub inventory: Calc<f64>,
    /// 보유량으로부터 계산한 높이 [m]
    pub computed: Calc<f64>,
    /// 설계자 수동 높이 [m]
    pub override_height: Calc<Option<f64>>,
    /// 수동 높이 × 단면적 [m³]. 수동값이 없으면 산출 불가.
    pub recomputed_inventory: Calc<f64>,
}

impl ZoneHeight {
    /// 수동값이 있으면 수동값, 없으면 계산값.
    pub fn effective(&self) -> Calc<f64> {
        effective(&self.computed, &self.override_height)
    }
}

/// 계산값과 수동값 중 유효값을 고른다. 잘못 적힌 수동값은 계산값으로 대체하지 않는다.
pub fn effective(computed: &Calc<f64>, override_value: &Calc<Option<f64>>) -> Calc<f64> {
    match override_value {
        Ok(Some(v)) => Ok(*v),
        Ok(None) => computed.clone(),
        Err(e) => Err(e.clone()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiquidInventoryResult {
    /// 계산된 바닥~LSAL 거리 [m]
    pub bottom_clearance: Calc<f64>,
    /// 수동값 반영 바닥~LSAL 거리 [m]
    pub bottom_clearance_effective: Calc<f64>,
    /// 하부 헤드~LSAL 까지의 체적 [m³]
    pub bottom_volume: Calc<f64>,
    pub zones: [ZoneHeight; 3],
    /// 2상이면 `None`, 3상이면 미구현 사유
    pub liquid2_zones: Option<Indeterminate>,
}

/// 하부 탄젠트 라인~LSAL 거리. 구형 헤드는 탄젠트 아래로 내려가므로 음수이다.
pub fn bottom_clearance(orientation: Orientation, head: HeadType, diameter: f64) -> Calc<f64> {
    match orientation {
        Orientation::Horizontal => Err(Indeterminate::NotImplemented(ConfigGap::HorizontalVessel)),
        Orientation::Vertical => Ok(match head {
            HeadType::Elliptical => 0.5,
            HeadType::Spherical => -0.25 * diameter,
        }),
    }
}

/// 하부 헤드를 포함한 LSAL 아래 체적 [m³].
pub fn bottom_volume(head: HeadType, diameter: f64, clearance: f64) -> f64 {
    match head {
        HeadType::Elliptical => (0.0416667 * diameter + 0.25 * clearance) * PI * diameter * diameter,
        HeadType::Spherical => 0.029889 * PI * diameter.powi(3),
    }
}

/// 보유량 [m³] = 질량유량[kg/h] / 밀도 × 체류시간[min] / 60
pub fn liquid_zone_inventory(mass_flow: f64, density: f64, residence_min: f64) -> Calc<f64> {
    Ok(calc::divide(mass_flow, density, "액 밀도가 0")? * residence_min / 60.0)
}

/// 구간 높이 [m]. 구형 헤드 2상 용기의 최하단 구간에는 0.02·D 를 더한다.
pub fn zone_height(
    inventory: f64,
    cross_area: f64,
    diameter: f64,
    zone: LiquidZone,
    head: HeadType,
    phases: PhaseCount,
) -> Calc<f64> {
    let h = calc::divide(inventory, cross_area, "단면적이 0")?;
    let spherical_allowance = head == HeadType::Spherical
        && zone == LiquidZone::LsalToLal
        && phases == PhaseCount::Two;
    Ok(if spherical_allowance {
        h + 0.02 * diameter
    } else {
        h
    })
}

/// 수동 높이를 보유량으로 되돌린다.
pub fn recalculated_inventory(height: f64, cross_area: f64) -> f64 {
    height * cross_area
}

pub fn compute(input: &ResolvedInput) -> LiquidInventoryResult {
    let layout = input.supported_layout();
    let diameter = (|| {
        layout.clone()?;
        input.diameter.clone()
    })();
    let area = diameter.clone().map(cross_area);
    let head = input.head.clone();

    let clearance = (|| {
        layout.clone()?;
        bottom_clearance(input.orientation.clone()?, head.clone()?, input.diameter.clone()?)
    })();
    let clearance_effective = (|| {
        layout.clone()?;
        effective(&clearance, &input.overrides.bottom_to_lsal)
    })();
    let volume = (|| -> Calc<f64> {
        Ok(bottom_volume(
            head.clone()?,
            diameter.clone()?,
            clearance_effective.clone()?,
        ))
    })();

    let zones = LiquidZone::ALL.map(|zone| {
        let idx = zone as usize;
        let inventory = (|| {
            layout.clone()?;
            liquid_zone_inventory(
                input.liquid1_mass_flow.clone()?,
                input.liquid1_density.clone()?,
                input.residence_min[idx].clone()?,
            )
        })();
        let computed = (|| {
            zone_height(
                inventory.clone()?,
                area.clone()?,
                diameter.clone()?,
                zone,
                head.clone()?,
                input.phases.clone()?,
            )
        })();
        let override_height = input.overrides.zones[idx].clone();
        let recomputed_inventory = (|| -> Calc<f64> {
            let h = override_height
                .clone()?
                .ok_or(Indeterminate::Missing(override_field(zone)))?;
            Ok(recalculated_inventory(h, area.clone()?))
        })();
        ZoneHeight {
            zone,
            inventory,
            computed,
            override_height,
            recomputed_inventory,
        }
    });

    let liquid2_zones = match input.phases {
        Ok(PhaseCount::Three) => Some(Indeterminate::NotImplemented(ConfigGap::ThreePhase)),
        _ => None,
    };

    LiquidInventoryResult {
        bottom_clearance: clearance,
        bottom_clearance_effective: clearance_effective,
        bottom_volume: volume,
        zones,
        liquid2_zones,
    }
}

fn override_field(zone: LiquidZone) -> &'static str {
    match zone {
        LiquidZone::LsalToLal => "lsal_to_lal_override",
        LiquidZone::LalToLah => "lal_to_lah_override",
        LiquidZone::LahToLsah => "lah_to_lsah_override",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearance_by_head() {
        assert_eq!(
            bottom_clearance(Orientation::Vertical, HeadType::Elliptical, 1.575),
            Ok(0.5)
        );
        let s = bottom_clearance(Orientation::Vertical, HeadType::Spherical, 1.575).unwrap();
        assert!((s + 0.39375).abs() < 1e-12);
        assert!(bottom_clearance(Orientation::Horizontal, HeadType::Elliptical, 1.0)
            .unwrap_err()
            .is_not_implemented());
    }

    #[test]
    fn spherical_allowance_only_on_lowest_zone() {
        let a = cross_area(2.0);
        let inv = a * 0.5;
        let low = zone_height(inv, a, 2.0, LiquidZone::LsalToLal, HeadType::Spherical, PhaseCount::Two)
            .unwrap();
        let mid = zone_height(inv, a, 2.0, LiquidZone::LalToLah, HeadType::Spherical, PhaseCount::Two)
            .unwrap();
        assert!((low - 0.54).abs() < 1e-12);
        assert!((mid - 0.5).abs() < 1e-12);
    }

    #[test]
    fn override_wins_and_bad_override_is_not_masked() {
        assert_eq!(effective(&Ok(1.0), &Ok(Some(2.0))), Ok(2.0));
        assert_eq!(effective(&Ok(1.0), &Ok(None)), Ok(1.0));
        let bad = Err(Indeterminate::Missing("x"));
        assert!(effective(&Ok(1.0), &bad).is_err());
    }

    #[test]
    fn zero_density_inventory_is_domain_error() {
        assert!(matches!(
            liquid_zone_inventory(1000.0, 0.0, 5.0),
            Err(Indeterminate::Domain(_))
        ));
        assert!((liquid_zone_inventory(6000.0, 600.0, 6.0).unwrap() - 1.0).abs() < 1e-12);
    }
}
