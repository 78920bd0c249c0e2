//! 설계 시트에서 손으로 검증한 기준값 회귀 테스트.
use vessel_sizing::input::{HeadType, Orientation, Phase, PhaseCount};
use vessel_sizing::material_db;
use vessel_sizing::pipe_db;
use vessel_sizing::separator::liquid_inventory::{
    bottom_clearance, bottom_volume, recalculated_inventory, zone_height, LiquidZone,
};
use vessel_sizing::separator::mechanical::{head_thickness, shell_thickness, MIN_THICKNESS_MM};
use vessel_sizing::separator::nozzle::{nozzle_momentum, nozzle_velocity};
use vessel_sizing::separator::vapor_liquid::{
    actual_gas_rate, allowable_gas_velocity, demister_area, demister_diameter, k_value,
    min_diameter,
};
use vessel_sizing::Indeterminate;

fn assert_close(label: &str, actual: f64, expected: f64, abs_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= abs_tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {abs_tol})"
    );
}

#[test]
fn k_value_reference_points() {
    let k = k_value(0.008, false, 7.67, 594.7, 19.7).expect("k no demister");
    assert_close("K no demister", k, 0.038, 5e-4);
    let k = k_value(0.008, true, 7.67, 594.7, 19.7).expect("k demister");
    assert_close("K demister", k, 0.08, 1e-12);
    let k = k_value(0.001, false, 15.0, 645.0, 8.0).expect("k light load");
    assert_close("K light", k, 0.022, 5e-4);
}

#[test]
fn min_diameter_reference_point() {
    let v = allowable_gas_velocity(0.038, 594.7, 19.7, 1.0).unwrap();
    let q = actual_gas_rate(30596.0, 19.7).unwrap();
    let d = min_diameter(q, v).unwrap();
    assert_close("D_min", d, 1.635, 1e-3);
}

#[test]
fn demister_diameter_reference_point() {
    let v = allowable_gas_velocity(0.12, 691.29, 13.29, 1.0).unwrap();
    let q = actual_gas_rate(52998.0, 13.29).unwrap();
    let a = demister_area(q, v, true).unwrap();
    assert_close("d_demister", demister_diameter(a).unwrap(), 1.283, 1e-3);
}

#[test]
fn bottom_clearance_and_volume_reference_points() {
    let e = bottom_clearance(Orientation::Vertical, HeadType::Elliptical, 1.575).unwrap();
    let s = bottom_clearance(Orientation::Vertical, HeadType::Spherical, 1.575).unwrap();
    assert_close("clearance E", e, 0.5, 1e-12);
    assert_close("clearance S", s, -0.394, 1e-3);
    assert_close("volume E", bottom_volume(HeadType::Elliptical, 1.575, 0.5), 1.485, 1e-3);
    assert_close("volume S", bottom_volume(HeadType::Spherical, 1.575, -0.394), 0.367, 1e-3);
}

#[test]
fn override_recompute_round_trip() {
    let area = std::f64::consts::PI / 4.0 * 1.575 * 1.575;
    let inv = recalculated_inventory(0.9, area);
    let h = zone_height(
        inv,
        area,
        1.575,
        LiquidZone::LalToLah,
        HeadType::Spherical,
        PhaseCount::Two,
    )
    .unwrap();
    assert_close("height", h, 0.9, 1e-12);
}

#[test]
fn allowable_stress_interpolation() {
    // 700 °F ↔ 750 °F 사이 (CS 15.3 → 13.0), 725 °F = 385 °C
    let s = material_db::allowable_stress("CS", 385.0).unwrap();
    assert_close("S(725F)", s, 14.15, 1e-9);
    assert!(matches!(
        material_db::allowable_stress("CS", -40.0),
        Err(Indeterminate::OutOfRange { .. })
    ));
}

#[test]
fn thickness_floor_applies_to_shell_and_head() {
    let t = shell_thickness(1.0, 1.0, 1200.0, 0.85, 1.5).unwrap();
    assert_close("shell floor", t, MIN_THICKNESS_MM, 0.0);
    let t = head_thickness(1.0, 1.0, 1200.0, 0.85, 1.5, HeadType::Elliptical).unwrap();
    assert_close("head floor", t, MIN_THICKNESS_MM, 0.0);
}

#[test]
fn nozzle_drops_absent_second_liquid() {
    let id = pipe_db::internal_diameter("8", "STD").unwrap();
    let phases = [
        Phase {
            mass_flow: 30596.0,
            density: 19.7,
        },
        Phase {
            mass_flow: 20000.0,
            density: 594.7,
        },
    ];
    let v = nozzle_velocity(&phases, id).unwrap();
    assert_close("inlet velocity", v, 13.618, 1e-3);
    assert_close("inlet momentum", nozzle_momentum(&phases, v).unwrap(), 5913.6, 0.1);
}
