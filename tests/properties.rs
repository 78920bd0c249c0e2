//! 사이징 식의 성질 테스트 (proptest).

use proptest::prelude::*;
use vessel_sizing::input::{HeadType, PhaseCount};
use vessel_sizing::separator::aggregate::{separation_verdict, SeparationVerdict};
use vessel_sizing::separator::liquid_inventory::{
    bottom_volume, recalculated_inventory, zone_height, LiquidZone,
};
use vessel_sizing::separator::vapor_liquid::{cross_area, k_value, min_diameter};

proptest! {
    /// 데미스터가 있으면 K 는 하한 0.08 아래로 내려가지 않는다.
    #[test]
    fn demister_k_has_floor(rho_v in 0.5f64..80.0, excess in 1.0f64..900.0) {
        let k = k_value(0.01, true, 10.0, rho_v + excess, rho_v).unwrap();
        prop_assert!(k >= 0.08);
    }

    /// 데미스터가 없으면 닫힌 식 그대로.
    #[test]
    fn plain_k_matches_closed_form(
        c in 0.0005f64..0.05,
        sigma in 1.0f64..60.0,
        rho_v in 0.5f64..80.0,
        excess in 1.0f64..900.0,
    ) {
        let rho_l = rho_v + excess;
        let k = k_value(c, false, sigma, rho_l, rho_v).unwrap();
        let expected = 3.145 * c.cbrt() * (sigma / 1000.0 / (rho_l - rho_v)).powf(0.25);
        prop_assert!((k - expected).abs() <= 1e-12 * expected.max(1.0));
    }

    /// 최소 직경은 유속이 클수록 작고 유량이 클수록 크다.
    #[test]
    fn min_diameter_monotonic(q in 0.01f64..10.0, v in 0.05f64..5.0, bump in 1.01f64..3.0) {
        let d = min_diameter(q, v).unwrap();
        prop_assert!(min_diameter(q, v * bump).unwrap() < d);
        prop_assert!(min_diameter(q * bump, v).unwrap() > d);
    }

    /// 구형 바닥 체적은 바닥 이격과 무관하고, 타원형은 이격에 선형이다.
    #[test]
    fn bottom_volume_dependence(d in 0.3f64..5.0, c1 in -2.0f64..2.0, c2 in -2.0f64..2.0) {
        prop_assert_eq!(
            bottom_volume(HeadType::Spherical, d, c1),
            bottom_volume(HeadType::Spherical, d, c2)
        );
        let slope = 0.25 * std::f64::consts::PI * d * d;
        let delta = bottom_volume(HeadType::Elliptical, d, c2)
            - bottom_volume(HeadType::Elliptical, d, c1);
        prop_assert!((delta - slope * (c2 - c1)).abs() < 1e-9);
    }

    /// 수동 높이 → 보유량 → 높이 → 보유량 이 같은 값을 돌려준다.
    #[test]
    fn override_recompute_idempotent(d in 0.3f64..5.0, h in 0.05f64..5.0) {
        let area = cross_area(d);
        let inv = recalculated_inventory(h, area);
        let h2 = zone_height(inv, area, d, LiquidZone::LahToLsah, HeadType::Elliptical, PhaseCount::Two)
            .unwrap();
        let inv2 = recalculated_inventory(h2, area);
        prop_assert!((inv2 - inv).abs() <= 1e-12 * inv.max(1.0));
    }

    /// D ≥ D_min 이면 적합.
    #[test]
    fn verdict_matches_comparison(d in 0.1f64..5.0, d_min in 0.1f64..5.0) {
        let expected = if d >= d_min { SeparationVerdict::Ok } else { SeparationVerdict::NotOk };
        prop_assert_eq!(separation_verdict(d, d_min), expected);
        prop_assert_eq!(separation_verdict(d, d), SeparationVerdict::Ok);
    }
}
