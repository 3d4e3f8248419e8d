use crate::fluid_db::FluidKind;
use crate::material_db::PipeMaterial;

/// 중력 가속도 [m/s²]
const G: f64 = 9.81;
/// 마찰계수 고정점 반복 상한
const MAX_ITERATIONS: usize = 10;
/// 유속 수렴 판정 허용치 [m/s]
const VELOCITY_TOLERANCE: f64 = 0.001;

/// 유량 추정 오류를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEstimateError {
    /// 압력/길이/직경 중 비어 있거나 0 또는 숫자가 아닌 값이 있는 경우
    MissingInput,
    /// 고도 보정 후 사용 가능 압력이 0 이하인 경우
    InsufficientPressure,
}

impl std::fmt::Display for FlowEstimateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowEstimateError::MissingInput => write!(f, "필수 입력값을 모두 입력하세요."),
            FlowEstimateError::InsufficientPressure => {
                write!(f, "지정한 고도차를 극복하기에 압력이 부족합니다.")
            }
        }
    }
}

impl std::error::Error for FlowEstimateError {}

/// 유량 추정 입력. 수치 필드는 폼의 원문 문자열을 그대로 받아
/// 파싱과 검증을 솔버가 담당한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEstimateInput {
    /// 공급 압력 [bar]
    pub pressure_bar: String,
    /// 유체 종류
    pub fluid: FluidKind,
    /// 배관 길이 [m]
    pub length_m: String,
    /// 배관 내경 [mm]
    pub diameter_mm: String,
    /// 배관 재질
    pub material: PipeMaterial,
    /// 고도차 [m] (+오르막, -내리막, 비우면 0)
    pub elevation_m: String,
}

/// 유량 추정 결과. 수렴 성공 시에만 생성된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowEstimateResult {
    /// 체적 유량 [L/s]
    pub flow_l_per_s: f64,
    /// 체적 유량 [m3/h]
    pub flow_m3_per_h: f64,
    /// 유속 [m/s]
    pub velocity_m_per_s: f64,
    /// 고도 보정 후 사용 가능 압력 [bar]
    pub available_pressure_bar: f64,
}

/// 필수 수치 필드를 파싱한다. 비어 있거나 숫자가 아니거나 정확히 0이면 None.
fn parse_required(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() || value == 0.0 {
        return None;
    }
    Some(value)
}

/// 고도차 필드를 파싱한다. 비어 있거나 숫자가 아니면 0으로 간주한다.
fn parse_elevation(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// 공급 압력·배관 제원·고도차로부터 자체 일관된 유속을 수렴시켜
/// 체적 유량을 추정한다.
///
/// 사용 가능 압력(고도 수두 차감)과 Swamee-Jain 난류 마찰계수 상관식을
/// 고정점 반복으로 결합한다. 10회 안에 0.001 m/s 허용치를 만족하지 못하면
/// 마지막 추정값을 그대로 사용한다(수렴 실패 오류 없음).
pub fn estimate_flow(input: &FlowEstimateInput) -> Result<FlowEstimateResult, FlowEstimateError> {
    let pressure_bar =
        parse_required(&input.pressure_bar).ok_or(FlowEstimateError::MissingInput)?;
    let length_m = parse_required(&input.length_m).ok_or(FlowEstimateError::MissingInput)?;
    let diameter_mm = parse_required(&input.diameter_mm).ok_or(FlowEstimateError::MissingInput)?;
    let elevation_m = parse_elevation(&input.elevation_m);

    let diameter_m = diameter_mm / 1000.0;
    let area_m2 = std::f64::consts::PI * (diameter_m / 2.0).powi(2);

    // 고도 상승분을 수주(물 기준)로 환산해 공급 압력에서 차감한다.
    let available_pa = pressure_bar * 100_000.0 - elevation_m * G * 1000.0;
    if available_pa <= 0.0 {
        return Err(FlowEstimateError::InsufficientPressure);
    }
    let delta_h_m = available_pa / (G * 1000.0);

    let viscosity = crate::fluid_db::kinematic_viscosity_m2_per_s(input.fluid);
    let roughness = crate::material_db::absolute_roughness_m(input.material);

    // 무마찰 추정치로 시작해 Re → f → v 를 반복 갱신한다.
    let mut velocity = (2.0 * G * delta_h_m / length_m).sqrt();
    for _ in 0..MAX_ITERATIONS {
        let reynolds = velocity * diameter_m / viscosity;
        let friction = 0.25
            / (roughness / (3.7 * diameter_m) + 5.74 / reynolds.powf(0.9))
                .log10()
                .powi(2);
        let next = (2.0 * G * delta_h_m * diameter_m / (friction * length_m)).sqrt();
        let converged = (velocity - next).abs() < VELOCITY_TOLERANCE;
        velocity = next;
        if converged {
            break;
        }
    }

    let flow_m3_per_s = velocity * area_m2;
    Ok(FlowEstimateResult {
        flow_l_per_s: flow_m3_per_s * 1000.0,
        flow_m3_per_h: flow_m3_per_s * 3600.0,
        velocity_m_per_s: velocity,
        available_pressure_bar: available_pa / 100_000.0,
    })
}
