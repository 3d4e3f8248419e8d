/// 유체별 20°C 동점성계수 테이블을 제공한다.
/// 값은 참고용 대표치이며 온도 의존성은 다루지 않는다.

const WATER_NU_M2_PER_S: f64 = 1.004e-6;
const OIL_NU_M2_PER_S: f64 = 46e-6;
const GLYCOL_NU_M2_PER_S: f64 = 17.2e-6;

/// 다루는 유체 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluidKind {
    Water,
    Oil,
    Glycol,
}

#[derive(Debug)]
pub struct FluidData {
    pub kind: FluidKind,
    pub code: &'static str,
    pub name: &'static str,
    /// 동점성계수 [m²/s] (20°C)
    pub kinematic_viscosity_m2_per_s: f64,
}

const FLUIDS: &[FluidData] = &[
    FluidData {
        kind: FluidKind::Water,
        code: "water",
        name: "물 (Water)",
        kinematic_viscosity_m2_per_s: WATER_NU_M2_PER_S,
    },
    FluidData {
        kind: FluidKind::Oil,
        code: "oil",
        name: "오일 (Oil)",
        kinematic_viscosity_m2_per_s: OIL_NU_M2_PER_S,
    },
    FluidData {
        kind: FluidKind::Glycol,
        code: "glycol",
        name: "글리콜 (Glycol)",
        kinematic_viscosity_m2_per_s: GLYCOL_NU_M2_PER_S,
    },
];

pub fn fluids() -> &'static [FluidData] {
    FLUIDS
}

/// 코드 문자열로 유체를 찾는다. 대소문자를 무시한다.
pub fn find_fluid(code: &str) -> Option<FluidKind> {
    FLUIDS
        .iter()
        .find(|f| f.code.eq_ignore_ascii_case(code.trim()))
        .map(|f| f.kind)
}

/// 유체 종류에 해당하는 동점성계수 [m²/s]를 반환한다.
pub fn kinematic_viscosity_m2_per_s(kind: FluidKind) -> f64 {
    match kind {
        FluidKind::Water => WATER_NU_M2_PER_S,
        FluidKind::Oil => OIL_NU_M2_PER_S,
        FluidKind::Glycol => GLYCOL_NU_M2_PER_S,
    }
}
