use pipe_flow_estimator::flow::{estimate_flow, FlowEstimateError, FlowEstimateInput};
use pipe_flow_estimator::fluid_db::{self, FluidKind};
use pipe_flow_estimator::i18n;
use pipe_flow_estimator::material_db::{self, PipeMaterial};

fn form(pressure: &str, length: &str, diameter: &str, elevation: &str) -> FlowEstimateInput {
    FlowEstimateInput {
        pressure_bar: pressure.to_string(),
        fluid: FluidKind::Water,
        length_m: length.to_string(),
        diameter_mm: diameter.to_string(),
        material: PipeMaterial::Pe,
        elevation_m: elevation.to_string(),
    }
}

#[test]
fn blank_required_field_is_missing_input() {
    let err = estimate_flow(&form("", "300", "50", "0")).expect_err("blank pressure");
    assert_eq!(err, FlowEstimateError::MissingInput);
}

#[test]
fn zero_required_field_is_missing_input() {
    // 원본 폼과 동일하게 정확히 0도 미입력으로 취급한다.
    assert_eq!(
        estimate_flow(&form("0", "300", "50", "0")).expect_err("zero pressure"),
        FlowEstimateError::MissingInput
    );
    assert_eq!(
        estimate_flow(&form("3", "300", "0", "0")).expect_err("zero diameter"),
        FlowEstimateError::MissingInput
    );
}

#[test]
fn non_numeric_required_field_is_missing_input() {
    assert_eq!(
        estimate_flow(&form("3", "abc", "50", "0")).expect_err("garbage length"),
        FlowEstimateError::MissingInput
    );
    assert_eq!(
        estimate_flow(&form("3", "300", "nan", "0")).expect_err("nan diameter"),
        FlowEstimateError::MissingInput
    );
}

#[test]
fn surrounding_whitespace_is_accepted() {
    let res = estimate_flow(&form(" 3 ", " 450 ", " 90 ", " 0 ")).expect("trimmed inputs");
    assert!(res.flow_l_per_s > 0.0);
}

#[test]
fn blank_or_garbage_elevation_defaults_to_zero() {
    let explicit = estimate_flow(&form("3", "450", "90", "0")).expect("elev 0");
    let blank = estimate_flow(&form("3", "450", "90", "")).expect("elev blank");
    let garbage = estimate_flow(&form("3", "450", "90", "x")).expect("elev garbage");
    assert_eq!(explicit, blank);
    assert_eq!(explicit, garbage);
}

#[test]
fn fluid_codes_resolve_case_insensitively() {
    assert_eq!(fluid_db::find_fluid("WATER"), Some(FluidKind::Water));
    assert_eq!(fluid_db::find_fluid(" oil "), Some(FluidKind::Oil));
    assert_eq!(fluid_db::find_fluid("glycol"), Some(FluidKind::Glycol));
    assert_eq!(fluid_db::find_fluid("beer"), None);
}

#[test]
fn non_pe_material_codes_fall_back_to_pvc() {
    assert_eq!(material_db::resolve_material("pe"), PipeMaterial::Pe);
    assert_eq!(material_db::resolve_material("PE"), PipeMaterial::Pe);
    assert_eq!(material_db::resolve_material("PVC"), PipeMaterial::Pvc);
    assert_eq!(material_db::resolve_material("steel"), PipeMaterial::Pvc);
}

#[test]
fn solver_errors_have_localized_messages() {
    let tr_en = i18n::Translator::new("en");
    assert_eq!(
        tr_en.t(i18n::error_key(FlowEstimateError::MissingInput)),
        "Please enter all required values."
    );
    assert_eq!(
        tr_en.t(i18n::error_key(FlowEstimateError::InsufficientPressure)),
        "Insufficient pressure to overcome the specified elevation."
    );
    let tr_ko = i18n::Translator::new("ko");
    assert_eq!(
        tr_ko.t(i18n::error_key(FlowEstimateError::MissingInput)),
        "필수 입력값을 모두 입력하세요."
    );
}
