//! 전체 계산 패스 테스트: 정상 입력, 부분 실패 격리, 미구현 구성, 수동값.
use approx::assert_relative_eq;
use vessel_sizing::input::{
    Application, FieldValue, HeadType, NozzleSelection, Orientation, PhaseCount, SizingInput,
};
use vessel_sizing::report::{ReportUnits, ReportValue, SizingReport};
use vessel_sizing::separator::{SeparationVerdict, StackSegment};
use vessel_sizing::{size_vessel, Indeterminate};

fn nozzle(nominal: &str, schedule: &str) -> NozzleSelection {
    NozzleSelection {
        nominal: Some(FieldValue::from(nominal)),
        schedule: Some(schedule.to_string()),
    }
}

fn base_input() -> SizingInput {
    let mut i = SizingInput::default();
    i.vessel.orientation = Some(Orientation::Vertical);
    i.vessel.head = Some(HeadType::Elliptical);
    i.vessel.phases = Some(PhaseCount::Two);
    i.vessel.application = Some(Application::Separation);
    i.vessel.demister = true;
    i.vessel.diameter = Some(1.575.into());

    let p = &mut i.process;
    p.vapor_mass_flow = Some(30596.0.into());
    p.vapor_density = Some(19.7.into());
    p.liquid1_mass_flow = Some(20000.0.into());
    p.liquid1_density = Some(594.7.into());
    p.liquid2_density = Some("0".into());
    p.surface_tension = Some(7.67.into());
    p.design_temperature = Some(100.0.into());
    p.design_pressure = Some(10.0.into());

    i.safety.carry_over = Some(0.008.into());
    i.safety.vapor_liquid = Some(1.0.into());
    i.safety.liquid1_residence.lsal_to_lal = Some(5.0.into());
    i.safety.liquid1_residence.lal_to_lah = Some(5.0.into());
    i.safety.liquid1_residence.lah_to_lsah = Some("5".into());

    i.material.material = Some("CS".into());
    i.material.joint_efficiency = Some(0.85.into());
    i.material.corrosion_allowance = Some(3.0.into());

    i.nozzles.inlet = nozzle("8", "STD");
    i.nozzles.vapor_outlet = nozzle("6", "40");
    i.nozzles.liquid1_outlet = nozzle("3", "40");
    i
}

#[test]
fn full_pass_values() {
    let r = size_vessel(&base_input());
    assert_eq!(r.vapor.k_used, Ok(0.08));
    assert_relative_eq!(r.vapor.min_diameter.clone().unwrap(), 1.127347, epsilon = 1e-6);
    assert_relative_eq!(r.liquid.bottom_volume.clone().unwrap(), 1.485563, epsilon = 1e-6);
    for z in &r.liquid.zones {
        assert_relative_eq!(z.effective().unwrap(), 1.438467, epsilon = 1e-6);
    }
    assert!(r.stack.blank_segments.is_empty());
    assert_relative_eq!(r.stack.tangent_to_tangent.clone().unwrap(), 6.619150, epsilon = 1e-6);
    assert_relative_eq!(r.mechanical.shell.thickness.clone().unwrap(), 10.751635, epsilon = 1e-6);
    assert_relative_eq!(r.mechanical.head.thickness.clone().unwrap(), 10.713671, epsilon = 1e-6);
    assert_relative_eq!(r.mechanical.total_weight.clone().unwrap(), 3227.480, epsilon = 1e-3);
    assert_relative_eq!(r.summary.vessel_volume.clone().unwrap(), 13.918793, epsilon = 1e-6);
    assert_relative_eq!(r.summary.length_to_diameter.clone().unwrap(), 4.202635, epsilon = 1e-6);
    assert_eq!(r.summary.separation, Ok(SeparationVerdict::Ok));

    let [inlet, vapor, liquid1, liquid2] = &r.nozzles;
    assert_relative_eq!(inlet.velocity.clone().unwrap(), 13.618137, epsilon = 1e-6);
    assert_relative_eq!(vapor.momentum.clone().unwrap(), 10568.06, epsilon = 1e-2);
    assert_relative_eq!(liquid1.velocity.clone().unwrap(), 1.960039, epsilon = 1e-6);
    assert!(matches!(liquid2.internal_diameter, Err(Indeterminate::Missing(_))));
}

#[test]
fn report_rounds_only_at_output() {
    let r = size_vessel(&base_input());
    let report = SizingReport::from_result(&r, &Default::default(), ReportUnits::default());
    assert_eq!(report.summary.tangent_to_tangent, ReportValue::Value(6.619));
    assert_eq!(report.summary.total_weight_kg, ReportValue::Value(3227.5));
    assert_eq!(report.vapor_liquid.allowable_gas_velocity, ReportValue::Value(0.43));
    assert_eq!(report.summary.separation, "OK");
    let text = report.to_toml().expect("toml");
    assert!(text.contains("tangent_to_tangent"));
}

#[test]
fn missing_vapor_density_is_isolated() {
    let mut input = base_input();
    input.process.vapor_density = Some("".into());
    let r = size_vessel(&input);
    assert_eq!(r.vapor.k_value, Err(Indeterminate::Missing("vapor_density")));
    assert!(r.vapor.min_diameter.is_err());
    assert!(r.summary.separation.is_err());
    // 액 쪽과 기계 설계는 그대로 계산된다
    assert!(r.liquid.bottom_volume.is_ok());
    assert!(r.mechanical.shell.thickness.is_ok());
    assert!(r.nozzles[2].velocity.is_ok());
    // 데미스터~탄젠트 구간은 데미스터 직경이 없으므로 비어 있다
    assert_eq!(r.stack.blank_segments, vec![StackSegment::DemisterToTangent]);
    assert!(r.stack.tangent_to_tangent.is_ok());
}

#[test]
fn horizontal_vessel_is_not_implemented_but_vapor_side_computes() {
    let mut input = base_input();
    input.vessel.orientation = Some(Orientation::Horizontal);
    let r = size_vessel(&input);
    assert!(r.layout.as_ref().unwrap_err().is_not_implemented());
    assert!(r.liquid.bottom_clearance.as_ref().unwrap_err().is_not_implemented());
    assert!(r.stack.tangent_to_tangent.as_ref().unwrap_err().is_not_implemented());
    assert!(r.mechanical.shell.surface_area.as_ref().unwrap_err().is_not_implemented());
    assert!(r.vapor.min_diameter.is_ok());
    assert!(r.summary.separation.as_ref().unwrap_err().is_not_implemented());
    assert!(r.summary.required_min_diameter.as_ref().unwrap_err().is_not_implemented());

    let report = SizingReport::from_result(&r, &Default::default(), ReportUnits::default());
    match &report.summary.tangent_to_tangent {
        ReportValue::Marker(m) => assert!(m.starts_with("not implemented")),
        other => panic!("expected marker, got {other:?}"),
    }
}

#[test]
fn three_phase_marks_second_liquid_zones() {
    let mut input = base_input();
    input.vessel.phases = Some(PhaseCount::Three);
    let r = size_vessel(&input);
    assert!(r.liquid.liquid2_zones.as_ref().unwrap().is_not_implemented());
    assert!(r.liquid.zones[0].computed.as_ref().unwrap_err().is_not_implemented());
    assert!(r.summary.separation.as_ref().unwrap_err().is_not_implemented());

    let report = SizingReport::from_result(&r, &Default::default(), ReportUnits::default());
    assert!(report.summary.separation.starts_with("not implemented"));
    assert!(matches!(report.summary.required_min_diameter, ReportValue::Marker(_)));
}

#[test]
fn head_area_follows_shell_thickness() {
    let r = size_vessel(&base_input());
    let shell_t = r.mechanical.shell.thickness.clone().unwrap();
    let head_t = r.mechanical.head.thickness.clone().unwrap();
    assert!((shell_t - head_t).abs() > 1e-3);
    let d = 1.575 + shell_t / 2000.0;
    let area = r.mechanical.head.surface_area.clone().unwrap();
    assert_relative_eq!(area, 1.09 * d * d, epsilon = 1e-9);
    assert_relative_eq!(area, 2.722371, epsilon = 1e-6);
    assert_relative_eq!(
        r.mechanical.head.weight.clone().unwrap(),
        head_t / 1000.0 * area * 7840.0,
        epsilon = 1e-9
    );
}

#[test]
fn storage_surge_vessel_has_no_demister_pad() {
    let mut input = base_input();
    input.vessel.application = Some(Application::StorageSurge);
    assert!(input.vessel.demister);
    let r = size_vessel(&input);
    assert!(!r.input.demister);
    let pad = r
        .stack
        .segments
        .iter()
        .find(|s| s.kind == StackSegment::DemisterThickness)
        .expect("demister segment");
    assert_eq!(pad.effective(), Ok(0.0));

    let export = vessel_sizing::datasheet::DataSheetExport::new(&input, &r);
    assert_eq!(export.demister, "No");
}

#[test]
fn overrides_replace_computed_values() {
    let mut input = base_input();
    input.overrides.k_value = Some(0.1.into());
    input.overrides.lal_to_lah = Some(2.0.into());
    let r = size_vessel(&input);
    assert_eq!(r.vapor.k_value, Ok(0.08));
    assert_eq!(r.vapor.k_used, Ok(0.1));
    let zone = &r.liquid.zones[1];
    assert_eq!(zone.effective(), Ok(2.0));
    let area = r.vapor.cross_area.clone().unwrap();
    assert_relative_eq!(zone.recomputed_inventory.clone().unwrap(), 2.0 * area);
    assert_relative_eq!(
        r.stack.tangent_to_tangent.clone().unwrap(),
        6.619150 - 1.438467 + 2.0,
        epsilon = 1e-5
    );

    input.overrides.tangent_to_tangent = Some(8.0.into());
    let r = size_vessel(&input);
    assert_eq!(r.stack.tangent_to_tangent, Ok(8.0));
    assert_relative_eq!(r.summary.length_to_diameter.clone().unwrap(), 8.0 / 1.575);
}

#[test]
fn undersized_vessel_fails_separation() {
    let mut input = base_input();
    input.vessel.diameter = Some(1.0.into());
    let r = size_vessel(&input);
    assert_eq!(r.summary.separation, Ok(SeparationVerdict::NotOk));
}

#[test]
fn snapshot_deserialises_from_toml() {
    let input: SizingInput = toml::from_str(
        r#"
        [vessel]
        orientation = "vertical"
        head = "spherical"
        phases = "two"
        application = "storage_surge"
        diameter = "1575"

        [units]
        temperature = "Celsius"
        pressure = "KgPerCm2"
        length = "Millimeter"

        [process]
        vapor_density = 19.7
        liquid1_density = "594.7"
        "#,
    )
    .expect("snapshot");
    let r = size_vessel(&input);
    assert_relative_eq!(r.input.diameter.clone().unwrap(), 1.575, epsilon = 1e-12);
    assert_relative_eq!(r.liquid.bottom_clearance.clone().unwrap(), -0.39375, epsilon = 1e-12);
    assert!(r.vapor.actual_gas_rate.is_err());
}

#[test]
fn demo_snapshot_sizes_cleanly() {
    let input: SizingInput =
        toml::from_str(include_str!("../demos/vertical_two_phase.toml")).expect("demo");
    let r = size_vessel(&input);
    assert_eq!(r.summary.separation, Ok(SeparationVerdict::Ok));
    assert!(r.stack.blank_segments.is_empty());
    assert_relative_eq!(r.nozzles[2].velocity.clone().unwrap(), 1.960039, epsilon = 1e-6);

    let export = vessel_sizing::datasheet::DataSheetExport::new(&input, &r);
    assert_eq!(export.insulation, "PP");
    assert_eq!(export.demister, "Yes");
    assert_eq!(export.shell_id_mm, ReportValue::Value(1575.0));
    assert_eq!(export.tangent_to_tangent_mm, ReportValue::Value(6619.0));
}
