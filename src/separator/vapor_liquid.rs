//! 기액 분리 사이징: Souders-Brown K 값, 허용 가스 유속, 최소 직경, 데미스터 면적.

use std::f64::consts::PI;

use crate::calc::{self, Calc, Indeterminate};
use crate::input::ResolvedInput;

/// 데미스터가 있을 때 K 값의 하한.
pub const DEMISTER_K_FLOOR: f64 = 0.08;

/// 기액 분리 계산 결과.
#[derive(Debug, Clone)]
pub struct VaporLiquidResult {
    /// 계산된 K [m/s]
    pub k_value: Calc<f64>,
    /// 하류 계산에 실제로 쓰인 K (수동값 우선)
    pub k_used: Calc<f64>,
    pub allowable_gas_velocity: Calc<f64>,
    /// 실제 가스 체적유량 [m³/s]
    pub actual_gas_rate: Calc<f64>,
    pub min_diameter: Calc<f64>,
    pub demister_area: Calc<f64>,
    pub demister_diameter: Calc<f64>,
    pub cross_area: Calc<f64>,
    pub actual_gas_velocity: Calc<f64>,
}

fn check_densities(liq1_density: f64, vapor_density: f64) -> Calc<()> {
    if vapor_density == 0.0 {
        return Err(Indeterminate::Domain("증기 밀도가 0"));
    }
    if liq1_density <= vapor_density {
        return Err(Indeterminate::Domain("액 밀도가 증기 밀도 이하"));
    }
    Ok(())
}

/// 데미스터 없는 경우: K = 3.145 · c^(1/3) · (σ/1000 / (ρL − ρV))^0.25
pub fn k_value_without_demister(
    carry_over: f64,
    surface_tension: f64,
    liq1_density: f64,
    vapor_density: f64,
) -> Calc<f64> {
    check_densities(liq1_density, vapor_density)?;
    let ratio = surface_tension / 1000.0 / (liq1_density - vapor_density);
    Ok(3.145 * carry_over.cbrt() * calc::powf(ratio, 0.25, "K 값")?)
}

/// 데미스터 있는 경우: K = max(0.08, 0.15 · (ρL/ρV − 1)^−0.2)
pub fn k_value_with_demister(liq1_density: f64, vapor_density: f64) -> Calc<f64> {
    check_densities(liq1_density, vapor_density)?;
    let k = 0.15 * calc::powf(liq1_density / vapor_density - 1.0, -0.2, "K 값")?;
    Ok(k.max(DEMISTER_K_FLOOR))
}

/// 데미스터 유무에 따라 K 값을 구한다.
pub fn k_value(
    carry_over: f64,
    has_demister: bool,
    surface_tension: f64,
    liq1_density: f64,
    vapor_density: f64,
) -> Calc<f64> {
    if has_demister {
        k_value_with_demister(liq1_density, vapor_density)
    } else {
        k_value_without_demister(carry_over, surface_tension, liq1_density, vapor_density)
    }
}

/// v_allow = K · sqrt(ρL/ρV − 1) · SF
pub fn allowable_gas_velocity(
    k: f64,
    liq1_density: f64,
    vapor_density: f64,
    safety_factor: f64,
) -> Calc<f64> {
    let ratio = calc::divide(liq1_density, vapor_density, "증기 밀도가 0")?;
    let root = calc::sqrt(ratio - 1.0, "액 밀도가 증기 밀도보다 작음")?;
    Ok(k * root * safety_factor)
}

/// 실제 가스 체적유량 [m³/s]. 질량유량은 kg/h 로 받는다.
pub fn actual_gas_rate(vapor_mass_flow: f64, vapor_density: f64) -> Calc<f64> {
    Ok(calc::divide(vapor_mass_flow, vapor_density, "증기 밀도가 0")? / 3600.0)
}

/// 기액 분리만 고려한 최소 직경 [m].
pub fn min_diameter(actual_gas_rate: f64, allowable_gas_velocity: f64) -> Calc<f64> {
    let area = calc::divide(
        4.0 * actual_gas_rate,
        PI * allowable_gas_velocity,
        "허용 가스 유속이 0",
    )?;
    calc::sqrt(area, "최소 직경")
}

pub fn demister_area(
    actual_gas_rate: f64,
    allowable_gas_velocity: f64,
    has_demister: bool,
) -> Calc<f64> {
    if !has_demister {
        return Ok(0.0);
    }
    calc::divide(actual_gas_rate, allowable_gas_velocity, "허용 가스 유속이 0")
}

/// 원형 데미스터 직경 [m].
pub fn demister_diameter(area: f64) -> Calc<f64> {
    calc::sqrt(4.0 * area / PI, "데미스터 면적이 음수")
}

pub fn cross_area(diameter: f64) -> f64 {
    PI / 4.0 * diameter * diameter
}

pub fn actual_gas_velocity(actual_gas_rate: f64, cross_area: f64) -> Calc<f64> {
    calc::divide(actual_gas_rate, cross_area, "단면적이 0")
}

/// 해석된 입력으로부터 기액 분리 항목 전체를 계산한다.
pub fn compute(input: &ResolvedInput) -> VaporLiquidResult {
    let rho_l = input.liquid1_density.clone();
    let rho_v = input.vapor_density.clone();

    let k_value = (|| {
        let (l, v) = (rho_l.clone()?, rho_v.clone()?);
        if input.demister {
            k_value_with_demister(l, v)
        } else {
            k_value_without_demister(
                input.carry_over.clone()?,
                input.surface_tension.clone()?,
                l,
                v,
            )
        }
    })();
    let k_used = match &input.overrides.k_value {
        Ok(Some(k)) => Ok(*k),
        Ok(None) => k_value.clone(),
        Err(e) => Err(e.clone()),
    };
    let allowable = (|| {
        allowable_gas_velocity(
            k_used.clone()?,
            rho_l.clone()?,
            rho_v.clone()?,
            input.vapor_liquid_factor.clone()?,
        )
    })();
    let rate = (|| actual_gas_rate(input.vapor_mass_flow.clone()?, rho_v.clone()?))();
    let min_d = (|| min_diameter(rate.clone()?, allowable.clone()?))();
    let dem_area = if input.demister {
        (|| demister_area(rate.clone()?, allowable.clone()?, true))()
    } else {
        Ok(0.0)
    };
    let dem_d = (|| demister_diameter(dem_area.clone()?))();
    let area = input.diameter.clone().map(cross_area);
    let gas_v = (|| actual_gas_velocity(rate.clone()?, area.clone()?))();

    VaporLiquidResult {
        k_value,
        k_used,
        allowable_gas_velocity: allowable,
        actual_gas_rate: rate,
        min_diameter: min_d,
        demister_area: dem_area,
        demister_diameter: dem_d,
        cross_area: area,
        actual_gas_velocity: gas_v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_without_demister_reference() {
        let k = k_value(0.008, false, 7.67, 594.7, 19.7).unwrap();
        assert!((k - 0.038).abs() < 5e-4, "{k}");
        let k = k_value(0.001, false, 15.0, 645.0, 8.0).unwrap();
        assert!((k - 0.022).abs() < 5e-4, "{k}");
    }

    #[test]
    fn k_with_demister_hits_floor() {
        let k = k_value(0.008, true, 7.67, 594.7, 19.7).unwrap();
        assert_eq!(k, DEMISTER_K_FLOOR);
    }

    #[test]
    fn k_rejects_inverted_densities() {
        assert!(k_value(0.008, false, 7.67, 10.0, 19.7).is_err());
        assert!(k_value(0.008, true, 7.67, 19.7, 19.7).is_err());
        assert!(k_value(0.008, true, 7.67, 594.7, 0.0).is_err());
    }

    #[test]
    fn no_demister_area_is_zero() {
        assert_eq!(demister_area(1.0, 0.0, false), Ok(0.0));
        assert!(demister_area(1.0, 0.0, true).is_err());
    }
}
