use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const TITLE: &str = "general.title";
    pub const REPORT_WRITTEN: &str = "general.report_written";
    pub const DATASHEET_WRITTEN: &str = "general.datasheet_written";
    pub const NO_INPUT: &str = "general.no_input";

    pub const HEADING_PROJECT: &str = "heading.project";
    pub const HEADING_WARNINGS: &str = "heading.warnings";
    pub const HEADING_SUMMARY: &str = "heading.summary";
    pub const HEADING_VAPOR_LIQUID: &str = "heading.vapor_liquid";
    pub const HEADING_LIQUID: &str = "heading.liquid";
    pub const HEADING_STACK: &str = "heading.stack";
    pub const HEADING_NOZZLES: &str = "heading.nozzles";
    pub const HEADING_MECHANICAL: &str = "heading.mechanical";
    pub const HEADING_MATERIALS: &str = "heading.materials";
    pub const HEADING_SCHEDULES: &str = "heading.schedules";

    pub const SCHEDULES_NONE: &str = "listing.schedules_none";
    pub const OVERRIDE_MARK: &str = "listing.override_mark";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어팩 디렉터리(`<dir>/<code>.toml`)가 있으면 내장 문자열 위에 덮어쓴다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어, 그것도 없으면 키 자체.
    pub fn t<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return Cow::Borrowed(v.as_str());
        }
        let builtin = match self.lang {
            Language::En => en(key).or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        Cow::Borrowed(builtin.unwrap_or(key))
    }

    /// 보고서 항목 이름. 키는 보고서 필드 이름과 같다.
    pub fn field(&self, name: &str) -> String {
        let key = format!("field.{name}");
        match self.t(&key) {
            Cow::Borrowed(s) if s == key => name.to_string(),
            other => other.into_owned(),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    get_locale()
        .and_then(|loc| normalize_locale_string(&loc))
        .or_else(|| {
            ["LANG", "LC_ALL"]
                .iter()
                .filter_map(|var| std::env::var(var).ok())
                .find_map(|v| normalize_locale_string(&v))
        })
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc.split(['.', '_', '-']).next()?.to_lowercase();
    normalize_lang(&lang)
}

/// TOML 언어팩을 로드한다. 중첩 테이블은 점으로 이은 키가 된다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let content = fs::read_to_string(dir.join(format!("{lang}.toml"))).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.clone());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    let value: toml::Value = toml::from_str(src).ok()?;
    let mut map = HashMap::new();
    walk("", &value, &mut map);
    (!map.is_empty()).then_some(map)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        TITLE => "=== 수직형 기액 분리기 사이징 ===",
        REPORT_WRITTEN => "보고서 저장:",
        DATASHEET_WRITTEN => "데이터시트 저장:",
        NO_INPUT => "입력 파일을 지정하세요 (--help 참고).",
        HEADING_PROJECT => "-- 프로젝트 --",
        HEADING_WARNINGS => "-- 경고 --",
        HEADING_SUMMARY => "-- 요약 --",
        HEADING_VAPOR_LIQUID => "-- 기액 분리 --",
        HEADING_LIQUID => "-- 액 보유량 --",
        HEADING_STACK => "-- 높이 구성 --",
        HEADING_NOZZLES => "-- 노즐 --",
        HEADING_MECHANICAL => "-- 기계 설계 --",
        HEADING_MATERIALS => "-- 재질 목록 --",
        HEADING_SCHEDULES => "-- 스케줄 목록 --",
        SCHEDULES_NONE => "해당 호칭경이 없습니다.",
        OVERRIDE_MARK => "(수동)",
        "field.project" => "프로젝트",
        "field.client" => "발주처",
        "field.vessel_name" => "용기명",
        "field.vessel_tag" => "태그",
        "field.diameter" => "내경",
        "field.required_min_diameter" => "최소 요구 직경",
        "field.separation" => "기액 분리 판정",
        "field.tangent_to_tangent" => "T-T 길이",
        "field.length_to_diameter" => "L/D",
        "field.vessel_volume" => "용기 용적",
        "field.total_weight_kg" => "총 중량 [kg]",
        "field.k_value" => "K 값(계산)",
        "field.k_used" => "K 값(적용)",
        "field.allowable_gas_velocity" => "허용 가스 유속 [m/s]",
        "field.actual_gas_rate" => "실제 가스 유량 [m³/s]",
        "field.min_diameter" => "최소 직경",
        "field.demister_area" => "데미스터 면적",
        "field.demister_diameter" => "데미스터 직경",
        "field.cross_area" => "단면적",
        "field.actual_gas_velocity" => "실제 가스 유속 [m/s]",
        "field.bottom_clearance" => "바닥~LSAL(계산)",
        "field.bottom_clearance_effective" => "바닥~LSAL(적용)",
        "field.bottom_volume" => "바닥 체적",
        "field.inventory" => "보유량",
        "field.effective_height" => "높이",
        "field.recomputed_inventory" => "수동 높이 보유량",
        "field.head_height" => "헤드 높이",
        "field.inlet_to_demister_min" => "입구~데미스터 최소 이격",
        "field.composed_length" => "구간 합계",
        "field.internal_diameter_mm" => "내경 [mm]",
        "field.velocity" => "유속 [m/s]",
        "field.momentum" => "운동량 [kg/m·s²]",
        "field.material" => "재질",
        "field.allowable_stress_ksi" => "허용응력 [ksi]",
        "field.design_stress_kg_cm2" => "설계응력 [kg/cm²]",
        "field.material_density" => "재질 밀도 [kg/m³]",
        "field.shell_thickness_mm" => "동체 두께 [mm]",
        "field.shell_surface_area" => "동체 표면적",
        "field.shell_weight_kg" => "동체 중량 [kg]",
        "field.head_thickness_mm" => "헤드 두께 [mm]",
        "field.head_surface_area" => "헤드 표면적(1개)",
        "field.head_weight_kg" => "헤드 중량(1개) [kg]",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        TITLE => "=== Vertical Separator Sizing ===",
        REPORT_WRITTEN => "Report written:",
        DATASHEET_WRITTEN => "Data sheet written:",
        NO_INPUT => "Specify an input file (see --help).",
        HEADING_PROJECT => "-- Project --",
        HEADING_WARNINGS => "-- Warnings --",
        HEADING_SUMMARY => "-- Summary --",
        HEADING_VAPOR_LIQUID => "-- Vapor-liquid separation --",
        HEADING_LIQUID => "-- Liquid inventory --",
        HEADING_STACK => "-- Height stack --",
        HEADING_NOZZLES => "-- Nozzles --",
        HEADING_MECHANICAL => "-- Mechanical design --",
        HEADING_MATERIALS => "-- Materials --",
        HEADING_SCHEDULES => "-- Schedules --",
        SCHEDULES_NONE => "No such nominal size.",
        OVERRIDE_MARK => "(manual)",
        "field.project" => "Project",
        "field.client" => "Client",
        "field.vessel_name" => "Vessel name",
        "field.vessel_tag" => "Tag",
        "field.diameter" => "Inside diameter",
        "field.required_min_diameter" => "Required min. diameter",
        "field.separation" => "Separation check",
        "field.tangent_to_tangent" => "Tangent-to-tangent",
        "field.length_to_diameter" => "L/D",
        "field.vessel_volume" => "Vessel volume",
        "field.total_weight_kg" => "Total weight [kg]",
        "field.k_value" => "K value (calc.)",
        "field.k_used" => "K value (used)",
        "field.allowable_gas_velocity" => "Allowable gas velocity [m/s]",
        "field.actual_gas_rate" => "Actual gas rate [m³/s]",
        "field.min_diameter" => "Min. diameter",
        "field.demister_area" => "Demister area",
        "field.demister_diameter" => "Demister diameter",
        "field.cross_area" => "Cross area",
        "field.actual_gas_velocity" => "Actual gas velocity [m/s]",
        "field.bottom_clearance" => "Bottom to LSAL (calc.)",
        "field.bottom_clearance_effective" => "Bottom to LSAL (used)",
        "field.bottom_volume" => "Bottom volume",
        "field.inventory" => "Inventory",
        "field.effective_height" => "Height",
        "field.recomputed_inventory" => "Inventory at manual height",
        "field.head_height" => "Head height",
        "field.inlet_to_demister_min" => "Min. inlet to demister",
        "field.composed_length" => "Sum of segments",
        "field.internal_diameter_mm" => "ID [mm]",
        "field.velocity" => "Velocity [m/s]",
        "field.momentum" => "Momentum [kg/m·s²]",
        "field.material" => "Material",
        "field.allowable_stress_ksi" => "Allowable stress [ksi]",
        "field.design_stress_kg_cm2" => "Design stress [kg/cm²]",
        "field.material_density" => "Material density [kg/m³]",
        "field.shell_thickness_mm" => "Shell thickness [mm]",
        "field.shell_surface_area" => "Shell surface area",
        "field.shell_weight_kg" => "Shell weight [kg]",
        "field.head_thickness_mm" => "Head thickness [mm]",
        "field.head_surface_area" => "Head surface area (each)",
        "field.head_weight_kg" => "Head weight (each) [kg]",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_falls_back_to_key() {
        let tr = Translator::new("en-US");
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
        assert_eq!(tr.field("project"), "Project");
        assert_eq!(tr.field("length_to_diameter"), "L/D");
        assert_eq!(tr.field("no_such_field"), "no_such_field");
        assert_eq!(Translator::new("ko").field("project"), "프로젝트");
    }

    /// 한국어 표에 있는 항목 이름은 영어 표에도 있어야 한다.
    #[test]
    fn english_covers_every_field_label() {
        let src = include_str!("i18n.rs");
        let names: Vec<&str> = src
            .split("\"field.")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .filter(|name| !name.is_empty() && !name.contains('{'))
            .collect();
        assert!(names.len() > 40);
        for name in names {
            let key = format!("field.{name}");
            assert!(ko(&key).is_some(), "ko missing {key}");
            assert!(en(&key).is_some(), "en missing {key}");
        }
    }

    #[test]
    fn language_resolution_order() {
        assert_eq!(resolve_language(Some("EN"), Some("ko")), "en");
        assert_eq!(resolve_language(Some("auto"), Some("ko-KR")), "ko");
    }

    #[test]
    fn nested_pack_keys_are_dotted() {
        let map = parse_toml_to_map("[general]\ntitle = \"X\"\n").unwrap();
        assert_eq!(map.get("general.title").map(String::as_str), Some("X"));
    }
}
