//! 노즐 유속과 운동량.

use std::f64::consts::PI;

use crate::calc::{self, Calc, Indeterminate};
use crate::input::{Phase, ResolvedInput};
use crate::pipe_db;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NozzleRole {
    /// 증기 + 제1 액상 (+ 제2 액상)
    Inlet,
    VaporOutlet,
    Liquid1Outlet,
    Liquid2Outlet,
}

impl NozzleRole {
    pub const ALL: [NozzleRole; 4] = [
        NozzleRole::Inlet,
        NozzleRole::VaporOutlet,
        NozzleRole::Liquid1Outlet,
        NozzleRole::Liquid2Outlet,
    ];

    pub fn key(self) -> &'static str {
        match self {
            NozzleRole::Inlet => "inlet",
            NozzleRole::VaporOutlet => "vapor_outlet",
            NozzleRole::Liquid1Outlet => "liquid1_outlet",
            NozzleRole::Liquid2Outlet => "liquid2_outlet",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NozzleResult {
    pub role: NozzleRole,
    /// (호칭경, 스케줄)
    pub selection: Calc<(String, String)>,
    /// 내경 [m]
    pub internal_diameter: Calc<f64>,
    /// 유속 [m/s]
    pub velocity: Calc<f64>,
    /// 운동량 ρv² [kg/(m·s²)]
    pub momentum: Calc<f64>,
}

fn volumetric_flow(phases: &[Phase]) -> Calc<f64> {
    phases.iter().try_fold(0.0, |acc, p| {
        Ok(acc + calc::divide(p.mass_flow, p.density, "노즐 유체 밀도가 0")?)
    })
}

/// v = Σ(m/ρ) / 3600 / (π/4·ID²). 흐르는 상이 없으면 0.
pub fn nozzle_velocity(phases: &[Phase], internal_diameter: f64) -> Calc<f64> {
    if phases.is_empty() {
        return Ok(0.0);
    }
    let q = volumetric_flow(phases)? / 3600.0;
    calc::divide(q, PI / 4.0 * internal_diameter * internal_diameter, "노즐 내경이 0")
}

/// 혼합 밀도 기준 운동량 = v² · Σm / Σ(m/ρ).
pub fn nozzle_momentum(phases: &[Phase], velocity: f64) -> Calc<f64> {
    if phases.is_empty() {
        return Err(Indeterminate::Domain("노즐에 흐르는 상이 없음"));
    }
    let mass: f64 = phases.iter().map(|p| p.mass_flow).sum();
    let mixed_density = calc::divide(mass, volumetric_flow(phases)?, "노즐 체적유량이 0")?;
    Ok(velocity * velocity * mixed_density)
}

/// 역할별로 흐르는 상 목록. 제2 액상이 없으면 제외된다.
fn phases_for(role: NozzleRole, input: &ResolvedInput) -> Calc<Vec<Phase>> {
    let vapor = || -> Calc<Phase> {
        Ok(Phase {
            mass_flow: input.vapor_mass_flow.clone()?,
            density: input.vapor_density.clone()?,
        })
    };
    let liquid1 = || -> Calc<Phase> {
        Ok(Phase {
            mass_flow: input.liquid1_mass_flow.clone()?,
            density: input.liquid1_density.clone()?,
        })
    };
    let liquid2 = input.liquid2.clone();
    Ok(match role {
        NozzleRole::Inlet => {
            let mut v = vec![vapor()?, liquid1()?];
            v.extend(liquid2?);
            v
        }
        NozzleRole::VaporOutlet => vec![vapor()?],
        NozzleRole::Liquid1Outlet => vec![liquid1()?],
        NozzleRole::Liquid2Outlet => liquid2?.into_iter().collect(),
    })
}

pub fn compute(input: &ResolvedInput) -> [NozzleResult; 4] {
    NozzleRole::ALL.map(|role| {
        let selection = input.nozzles[role as usize].clone();
        let internal_diameter = selection
            .clone()
            .and_then(|(nominal, schedule)| pipe_db::internal_diameter(&nominal, &schedule));
        let phases = phases_for(role, input);
        let velocity = (|| nozzle_velocity(&phases.clone()?, internal_diameter.clone()?))();
        let momentum = (|| nozzle_momentum(&phases.clone()?, velocity.clone()?))();
        NozzleResult {
            role,
            selection,
            internal_diameter,
            velocity,
            momentum,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_phase_momentum_is_rho_v_squared() {
        let p = [Phase {
            mass_flow: 3600.0,
            density: 1.0,
        }];
        let id = (4.0 / PI).sqrt();
        let v = nozzle_velocity(&p, id).unwrap();
        assert!((v - 1.0).abs() < 1e-12);
        assert!((nozzle_momentum(&p, v).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn no_flowing_phase() {
        assert_eq!(nozzle_velocity(&[], 0.1), Ok(0.0));
        assert!(nozzle_momentum(&[], 0.0).is_err());
    }

    #[test]
    fn zero_density_is_domain_error() {
        let p = [Phase {
            mass_flow: 10.0,
            density: 0.0,
        }];
        assert!(nozzle_velocity(&p, 0.1).is_err());
    }
}
