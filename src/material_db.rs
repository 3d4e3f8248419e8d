/// 배관 재질별 절대조도 테이블을 제공한다.
/// 값은 신관 기준 참고치이며 노후·스케일 영향은 다루지 않는다.

const PE_ROUGHNESS_M: f64 = 1.5e-6;
const PVC_ROUGHNESS_M: f64 = 1.5e-7;

/// 다루는 배관 재질.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeMaterial {
    Pe,
    Pvc,
}

#[derive(Debug)]
pub struct MaterialData {
    pub material: PipeMaterial,
    pub code: &'static str,
    pub name: &'static str,
    /// 절대조도 ε [m]
    pub roughness_m: f64,
}

const MATERIALS: &[MaterialData] = &[
    MaterialData {
        material: PipeMaterial::Pe,
        code: "PE",
        name: "폴리에틸렌 (PE)",
        roughness_m: PE_ROUGHNESS_M,
    },
    MaterialData {
        material: PipeMaterial::Pvc,
        code: "PVC",
        name: "염화비닐 (PVC)",
        roughness_m: PVC_ROUGHNESS_M,
    },
];

pub fn materials() -> &'static [MaterialData] {
    MATERIALS
}

/// 코드 문자열로 재질을 찾는다. PE가 아닌 코드는 모두 PVC로 취급한다.
pub fn resolve_material(code: &str) -> PipeMaterial {
    if code.trim().eq_ignore_ascii_case("PE") {
        PipeMaterial::Pe
    } else {
        PipeMaterial::Pvc
    }
}

/// 재질에 해당하는 절대조도 [m]를 반환한다.
pub fn absolute_roughness_m(material: PipeMaterial) -> f64 {
    match material {
        PipeMaterial::Pe => PE_ROUGHNESS_M,
        PipeMaterial::Pvc => PVC_ROUGHNESS_M,
    }
}
