use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::flow::FlowEstimateError;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_FLOW_ESTIMATE: &str = "main_menu.flow_estimate";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const FLOW_HEADING: &str = "flow.heading";
    pub const FLOW_NOTE_BLANK_ELEVATION: &str = "flow.note_blank_elevation";
    pub const PROMPT_PRESSURE: &str = "prompt.pressure";
    pub const PROMPT_FLUID: &str = "prompt.fluid";
    pub const PROMPT_LENGTH: &str = "prompt.length";
    pub const PROMPT_DIAMETER: &str = "prompt.diameter";
    pub const PROMPT_MATERIAL: &str = "prompt.material";
    pub const PROMPT_ELEVATION: &str = "prompt.elevation";
    pub const RESULT_FLOW: &str = "result.flow";
    pub const RESULT_VELOCITY: &str = "result.velocity";
    pub const RESULT_AVAILABLE_PRESSURE: &str = "result.available_pressure";

    pub const ERROR_MISSING_INPUT: &str = "error.missing_input";
    pub const ERROR_INSUFFICIENT_PRESSURE: &str = "error.insufficient_pressure";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const HELP_FLOW_ESTIMATE: &str = "help.flow_estimate";
}

/// 솔버 오류를 표시용 문자열 키로 변환한다.
pub fn error_key(err: FlowEstimateError) -> &'static str {
    match err {
        FlowEstimateError::MissingInput => keys::ERROR_MISSING_INPUT,
        FlowEstimateError::InsufficientPressure => keys::ERROR_INSUFFICIENT_PRESSURE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
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
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
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

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Pipe Flow Estimator ===",
        MAIN_MENU_FLOW_ESTIMATE => "1) 관로 유량 추정",
        MAIN_MENU_SETTINGS => "2) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        FLOW_HEADING => "\n-- 관로 유량 추정 --",
        FLOW_NOTE_BLANK_ELEVATION => "참고: 고도차를 비우면 0으로 처리합니다(+오르막, -내리막).",
        PROMPT_PRESSURE => "공급 압력 [bar]: ",
        PROMPT_FLUID => "유체 (water/oil/glycol): ",
        PROMPT_LENGTH => "배관 길이 [m]: ",
        PROMPT_DIAMETER => "배관 내경 [mm]: ",
        PROMPT_MATERIAL => "재질 (PE/PVC): ",
        PROMPT_ELEVATION => "고도차 [m] (비우면 0): ",
        RESULT_FLOW => "유량:",
        RESULT_VELOCITY => "유속:",
        RESULT_AVAILABLE_PRESSURE => "사용 가능 압력:",
        ERROR_MISSING_INPUT => "필수 입력값을 모두 입력하세요.",
        ERROR_INSUFFICIENT_PRESSURE => "지정한 고도차를 극복하기에 압력이 부족합니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 입력 (auto/ko/en-us, 취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        HELP_FLOW_ESTIMATE => {
            "도움말: 압력[bar]·길이[m]·내경[mm]은 필수, 고도차[m]는 부호 포함 선택 입력입니다."
        }
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Pipe Flow Estimator ===",
        MAIN_MENU_FLOW_ESTIMATE => "1) Pipe flow estimate",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        FLOW_HEADING => "\n-- Pipe Flow Estimate --",
        FLOW_NOTE_BLANK_ELEVATION => "Note: blank elevation is treated as 0 (+uphill, -downhill).",
        PROMPT_PRESSURE => "Supply pressure [bar]: ",
        PROMPT_FLUID => "Fluid (water/oil/glycol): ",
        PROMPT_LENGTH => "Pipe length [m]: ",
        PROMPT_DIAMETER => "Pipe inner diameter [mm]: ",
        PROMPT_MATERIAL => "Material (PE/PVC): ",
        PROMPT_ELEVATION => "Elevation change [m] (blank = 0): ",
        RESULT_FLOW => "Flow:",
        RESULT_VELOCITY => "Velocity:",
        RESULT_AVAILABLE_PRESSURE => "Available pressure:",
        ERROR_MISSING_INPUT => "Please enter all required values.",
        ERROR_INSUFFICIENT_PRESSURE => {
            "Insufficient pressure to overcome the specified elevation."
        }
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en-us, enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        HELP_FLOW_ESTIMATE => {
            "Help: pressure [bar], length [m], diameter [mm] are required; elevation [m] is signed and optional."
        }
        _ => return None,
    })
}
