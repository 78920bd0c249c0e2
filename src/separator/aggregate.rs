//! 최종 요약: 용적, L/D, 기액 분리 적합 판정.

use std::f64::consts::PI;

use crate::calc::{self, Calc};
use crate::input::HeadType;

/// 선택 직경이 기액 분리 최소 직경을 만족하는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparationVerdict {
    Ok,
    NotOk,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// 지원 구성에서만 판정에 쓰는 최소 직경
    pub required_min_diameter: Calc<f64>,
    pub vessel_volume: Calc<f64>,
    pub length_to_diameter: Calc<f64>,
    pub separation: Calc<SeparationVerdict>,
}

/// 헤드 2개를 포함한 용적 [m³]. 타원형 k=1/3, 반구형 k=2/3.
pub fn vessel_volume(length: f64, diameter: f64, head: HeadType) -> f64 {
    let k = match head {
        HeadType::Elliptical => 1.0 / 3.0,
        HeadType::Spherical => 2.0 / 3.0,
    };
    (length + k * diameter) * PI * diameter * diameter / 4.0
}

pub fn length_to_diameter(length: f64, diameter: f64) -> Calc<f64> {
    calc::divide(length, diameter, "직경이 0")
}

/// 같으면 적합.
pub fn separation_verdict(diameter: f64, min_diameter: f64) -> SeparationVerdict {
    if diameter >= min_diameter {
        SeparationVerdict::Ok
    } else {
        SeparationVerdict::NotOk
    }
}

/// 수평형/3상 구성은 기액 분리 최소 직경만으로 판정할 수 없으므로 판정도 미구현이다.
pub fn compute(
    layout: &Calc<()>,
    diameter: &Calc<f64>,
    head: &Calc<HeadType>,
    tangent_to_tangent: &Calc<f64>,
    min_diameter: &Calc<f64>,
) -> Summary {
    let vessel_volume = (|| -> Calc<f64> {
        Ok(vessel_volume(
            tangent_to_tangent.clone()?,
            diameter.clone()?,
            head.clone()?,
        ))
    })();
    let length_to_diameter =
        (|| length_to_diameter(tangent_to_tangent.clone()?, diameter.clone()?))();
    let required_min_diameter = (|| -> Calc<f64> {
        layout.clone()?;
        min_diameter.clone()
    })();
    let separation = (|| -> Calc<SeparationVerdict> {
        Ok(separation_verdict(
            diameter.clone()?,
            required_min_diameter.clone()?,
        ))
    })();
    Summary {
        required_min_diameter,
        vessel_volume,
        length_to_diameter,
        separation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_ok() {
        assert_eq!(separation_verdict(1.5, 1.5), SeparationVerdict::Ok);
        assert_eq!(separation_verdict(1.4, 1.5), SeparationVerdict::NotOk);
    }

    #[test]
    fn volume_includes_heads() {
        let v = vessel_volume(3.0, 1.0, HeadType::Spherical);
        assert!((v - (3.0 + 2.0 / 3.0) * PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn unsupported_layout_has_no_verdict() {
        use crate::calc::{ConfigGap, Indeterminate};
        let gap = Err(Indeterminate::NotImplemented(ConfigGap::ThreePhase));
        let s = compute(&gap, &Ok(2.0), &Ok(HeadType::Elliptical), &Ok(5.0), &Ok(1.0));
        assert!(s.separation.unwrap_err().is_not_implemented());
        assert!(s.required_min_diameter.unwrap_err().is_not_implemented());
        let s = compute(&Ok(()), &Ok(2.0), &Ok(HeadType::Elliptical), &Ok(5.0), &Ok(1.0));
        assert_eq!(s.separation, Ok(SeparationVerdict::Ok));
    }

    #[test]
    fn zero_diameter_ratio_is_indeterminate() {
        assert!(length_to_diameter(3.0, 0.0).is_err());
    }
}
