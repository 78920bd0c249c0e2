//! 콘솔 출력. 계산 결과를 번역된 이름과 함께 표 형태로 찍는다.

use crate::i18n::{keys, Translator};
use crate::material_db;
use crate::pipe_db;
use crate::report::{ReportValue, SizingReport};

const LABEL_WIDTH: usize = 30;

fn line(tr: &Translator, name: &str, value: impl std::fmt::Display, unit: &str) {
    let label = tr.field(name);
    let pad = LABEL_WIDTH.saturating_sub(label.chars().count());
    println!("  {label}{} : {value} {unit}", " ".repeat(pad));
}

/// 값이 숫자일 때만 단위를 붙인다.
fn unit_for<'a>(value: &ReportValue, unit: &'a str) -> &'a str {
    match value {
        ReportValue::Value(_) => unit,
        ReportValue::Marker(_) => "",
    }
}

fn row(tr: &Translator, name: &str, value: &ReportValue, unit: &str) {
    line(tr, name, value, unit_for(value, unit));
}

/// 계산 보고서를 출력한다.
pub fn print_report(report: &SizingReport, tr: &Translator) {
    let u = &report.units;
    println!("\n{}", tr.t(keys::TITLE));

    let p = &report.project;
    let info = [
        ("project", &p.project),
        ("client", &p.client),
        ("vessel_name", &p.vessel_name),
        ("vessel_tag", &p.vessel_tag),
    ];
    if info.iter().any(|(_, v)| !v.is_empty()) {
        println!("{}", tr.t(keys::HEADING_PROJECT));
        for (name, v) in info.iter().filter(|(_, v)| !v.is_empty()) {
            line(tr, name, v, "");
        }
    }

    if !report.warnings.is_empty() {
        println!("{}", tr.t(keys::HEADING_WARNINGS));
        for w in &report.warnings {
            println!("  ! {w}");
        }
    }

    let s = &report.summary;
    println!("{}", tr.t(keys::HEADING_SUMMARY));
    row(tr, "diameter", &s.diameter, &u.length);
    row(tr, "required_min_diameter", &s.required_min_diameter, &u.length);
    line(tr, "separation", &s.separation, "");
    row(tr, "tangent_to_tangent", &s.tangent_to_tangent, &u.length);
    row(tr, "length_to_diameter", &s.length_to_diameter, "");
    row(tr, "vessel_volume", &s.vessel_volume, &u.volume);
    row(tr, "total_weight_kg", &s.total_weight_kg, "");

    let v = &report.vapor_liquid;
    println!("{}", tr.t(keys::HEADING_VAPOR_LIQUID));
    row(tr, "k_value", &v.k_value, "m/s");
    row(tr, "k_used", &v.k_used, "m/s");
    row(tr, "allowable_gas_velocity", &v.allowable_gas_velocity, "");
    row(tr, "actual_gas_rate", &v.actual_gas_rate, "");
    row(tr, "min_diameter", &v.min_diameter, &u.length);
    row(tr, "demister_area", &v.demister_area, &u.area);
    row(tr, "demister_diameter", &v.demister_diameter, &u.length);
    row(tr, "cross_area", &v.cross_area, &u.area);
    row(tr, "actual_gas_velocity", &v.actual_gas_velocity, "");

    let l = &report.liquid;
    println!("{}", tr.t(keys::HEADING_LIQUID));
    if let Some(m) = &l.liquid2_zones {
        println!("  ! {m}");
    }
    row(tr, "bottom_clearance", &l.bottom_clearance, &u.length);
    row(tr, "bottom_clearance_effective", &l.bottom_clearance_effective, &u.length);
    row(tr, "bottom_volume", &l.bottom_volume, &u.volume);
    for z in &l.zones {
        println!("  [{}]", z.zone.to_uppercase().replace('_', " "));
        row(tr, "inventory", &z.inventory, &u.volume);
        let mark = if z.override_height.is_some() {
            tr.t(keys::OVERRIDE_MARK)
        } else {
            "".into()
        };
        line(
            tr,
            "effective_height",
            &z.effective_height,
            &format!("{} {mark}", unit_for(&z.effective_height, &u.length)),
        );
        if z.override_height.is_some() {
            row(tr, "recomputed_inventory", &z.recomputed_inventory, &u.volume);
        }
    }

    let st = &report.stack;
    println!("{}", tr.t(keys::HEADING_STACK));
    row(tr, "head_height", &st.head_height, &u.length);
    row(tr, "inlet_to_demister_min", &st.inlet_to_demister_min, &u.length);
    for seg in &st.segments {
        let mark = if seg.override_value.is_some() {
            tr.t(keys::OVERRIDE_MARK)
        } else {
            "".into()
        };
        line(
            tr,
            &seg.segment,
            &seg.effective,
            &format!("{} {mark}", unit_for(&seg.effective, &u.length)),
        );
    }
    row(tr, "composed_length", &st.composed_length, &u.length);
    row(tr, "tangent_to_tangent", &st.tangent_to_tangent, &u.length);

    println!("{}", tr.t(keys::HEADING_NOZZLES));
    for n in &report.nozzles {
        let size = match (&n.nominal, &n.schedule) {
            (Some(nom), Some(sch)) => format!("{nom}\" Sch {sch}"),
            _ => "-".to_string(),
        };
        println!("  [{}] {size}", n.role);
        row(tr, "internal_diameter_mm", &n.internal_diameter_mm, "");
        row(tr, "velocity", &n.velocity, "");
        row(tr, "momentum", &n.momentum, "");
    }

    let m = &report.mechanical;
    println!("{}", tr.t(keys::HEADING_MECHANICAL));
    line(tr, "material", &m.material, "");
    row(tr, "allowable_stress_ksi", &m.allowable_stress_ksi, "");
    row(tr, "design_stress_kg_cm2", &m.design_stress_kg_cm2, "");
    row(tr, "material_density", &m.material_density, "");
    row(tr, "shell_thickness_mm", &m.shell_thickness_mm, "");
    row(tr, "shell_surface_area", &m.shell_surface_area, &u.area);
    row(tr, "shell_weight_kg", &m.shell_weight_kg, "");
    row(tr, "head_thickness_mm", &m.head_thickness_mm, "");
    row(tr, "head_surface_area", &m.head_surface_area, &u.area);
    row(tr, "head_weight_kg", &m.head_weight_kg, "");
    row(tr, "total_weight_kg", &m.total_weight_kg, "");
}

/// 재질 목록과 밀도를 출력한다.
pub fn print_materials(tr: &Translator) {
    println!("{}", tr.t(keys::HEADING_MATERIALS));
    for m in material_db::materials() {
        println!("  {:<14} {:>7.0} kg/m³  {}", m.code, m.density_kg_m3, m.notes);
    }
}

/// 호칭경에 존재하는 스케줄을 출력한다.
pub fn print_schedules(nominal: &str, tr: &Translator) {
    println!("{} {nominal}\"", tr.t(keys::HEADING_SCHEDULES));
    let schedules = pipe_db::schedules_for(nominal);
    if schedules.is_empty() {
        println!("  {}", tr.t(keys::SCHEDULES_NONE));
    } else {
        println!("  {}", schedules.join(", "));
    }
}
