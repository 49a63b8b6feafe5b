use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const CALC_TABLE_HEADER: &str = "calc.table_header";
    pub const TOTALS_HEADING: &str = "totals.heading";
    pub const TOTAL_AREA: &str = "totals.area";
    pub const TOTAL_VOLUME: &str = "totals.volume";
    pub const TOTAL_CFM: &str = "totals.cfm";
    pub const TOTAL_AC_LOAD: &str = "totals.ac_load";
    pub const TOTAL_CHILLED_WATER: &str = "totals.chilled_water";
    pub const TOTAL_POWER: &str = "totals.power";

    pub const EXPORT_DONE: &str = "export.done";

    pub const AIR_CHANGES_RESULT: &str = "air_changes.result";
    pub const AIR_CHANGES_NOT_FOUND: &str = "air_changes.not_found";

    pub const STATIC_PRESSURE_RESULT: &str = "static_pressure.result";
    pub const FILTRATION_STAGES_RESULT: &str = "static_pressure.filtration_stages";

    pub const CONVERSION_RESULT: &str = "conversion.result";

    pub const PSYCHRO_DRY_BULB: &str = "psychro.dry_bulb";
    pub const PSYCHRO_DEW_POINT: &str = "psychro.dew_point";
    pub const PSYCHRO_GRAINS: &str = "psychro.grains";
    pub const PSYCHRO_DENSITY: &str = "psychro.density";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순으로 찾고, 영어 번역이 없으면 한국어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
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

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 중첩 테이블.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        CALC_HEADING => "\n=== 클린룸 HVAC 부하 계산 ===",
        CALC_TABLE_HEADER => {
            "No  AHU        실 이름              면적[m²]  체적[ft³]  실CFM  외기CFM  AHU CFM  부하[TR]  냉수[GPM]  배관[in]  동력[kW]"
        }
        TOTALS_HEADING => "\n-- 합계 --",
        TOTAL_AREA => "총 면적 [m²]:",
        TOTAL_VOLUME => "총 체적 [ft³]:",
        TOTAL_CFM => "총 AHU 풍량 [CFM]:",
        TOTAL_AC_LOAD => "총 냉방 부하 [TR]:",
        TOTAL_CHILLED_WATER => "총 냉수 유량 [GPM]:",
        TOTAL_POWER => "총 소비 동력 [kW]:",
        EXPORT_DONE => "CSV 파일을 저장했습니다:",
        AIR_CHANGES_RESULT => "권장 환기 횟수 [회/h]:",
        AIR_CHANGES_NOT_FOUND => "N/A",
        STATIC_PRESSURE_RESULT => "정압 합계:",
        FILTRATION_STAGES_RESULT => "여과 단수:",
        CONVERSION_RESULT => "변환 결과:",
        PSYCHRO_DRY_BULB => "건구 온도:",
        PSYCHRO_DEW_POINT => "이슬점 [°C]:",
        PSYCHRO_GRAINS => "수분량 [grain/lb]:",
        PSYCHRO_DENSITY => "공기 밀도 [lb/ft³]:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        CALC_HEADING => "\n=== Cleanroom HVAC Load Calculation ===",
        CALC_TABLE_HEADER => {
            "No  AHU        Room                 Area[m²]  Vol[ft³]   RoomCFM FreshCFM AHU CFM  Load[TR]  ChW[GPM]   Pipe[in]  Power[kW]"
        }
        TOTALS_HEADING => "\n-- Totals --",
        TOTAL_AREA => "Total area [m²]:",
        TOTAL_VOLUME => "Total volume [ft³]:",
        TOTAL_CFM => "Total AHU airflow [CFM]:",
        TOTAL_AC_LOAD => "Total AC load [TR]:",
        TOTAL_CHILLED_WATER => "Total chilled water [GPM]:",
        TOTAL_POWER => "Total power consumption [kW]:",
        EXPORT_DONE => "CSV written to:",
        AIR_CHANGES_RESULT => "Recommended air changes [1/h]:",
        AIR_CHANGES_NOT_FOUND => "N/A",
        STATIC_PRESSURE_RESULT => "Static pressure total:",
        FILTRATION_STAGES_RESULT => "Filtration stages:",
        CONVERSION_RESULT => "Result:",
        PSYCHRO_DRY_BULB => "Dry bulb:",
        PSYCHRO_DEW_POINT => "Dew point [°C]:",
        PSYCHRO_GRAINS => "Moisture [grain/lb]:",
        PSYCHRO_DENSITY => "Air density [lb/ft³]:",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko-KR"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-US")), "en");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[totals]\narea = \"Area\"\n").unwrap();
        assert_eq!(map.get("totals.area").map(String::as_str), Some("Area"));
    }

    #[test]
    fn english_lookup() {
        let tr = Translator::new("en");
        assert_eq!(tr.t(keys::EXPORT_DONE), "CSV written to:");
        assert_eq!(tr.language(), Language::En);
    }
}
