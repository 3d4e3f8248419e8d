use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::flow::{estimate_flow, FlowEstimateInput};
use crate::fluid_db::{self, FluidKind};
use crate::i18n::{self, keys, Translator};
use crate::material_db;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FlowEstimate,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_FLOW_ESTIMATE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::FlowEstimate),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 유량 추정 폼을 처리한다. 여섯 입력을 원문 그대로 모아 솔버에 넘기고,
/// 결과 또는 오류 메시지를 출력한다.
pub fn handle_flow_estimate(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FLOW_HEADING));
    println!("{}", tr.t(keys::HELP_FLOW_ESTIMATE));
    println!("{}", tr.t(keys::FLOW_NOTE_BLANK_ELEVATION));

    let pressure_bar = read_line(tr.t(keys::PROMPT_PRESSURE))?.trim().to_string();
    let fluid = read_fluid(tr)?;
    let length_m = read_line(tr.t(keys::PROMPT_LENGTH))?.trim().to_string();
    let diameter_mm = read_line(tr.t(keys::PROMPT_DIAMETER))?.trim().to_string();
    let material_code = read_line(tr.t(keys::PROMPT_MATERIAL))?;
    let elevation_m = read_line(tr.t(keys::PROMPT_ELEVATION))?.trim().to_string();

    let input = FlowEstimateInput {
        pressure_bar,
        fluid,
        length_m,
        diameter_mm,
        material: material_db::resolve_material(&material_code),
        elevation_m,
    };
    match estimate_flow(&input) {
        Ok(r) => {
            println!(
                "{} {:.1} L/s ({:.1} m3/h)",
                tr.t(keys::RESULT_FLOW),
                r.flow_l_per_s,
                r.flow_m3_per_h
            );
            println!("{} {:.2} m/s", tr.t(keys::RESULT_VELOCITY), r.velocity_m_per_s);
            println!(
                "{} {:.2} bar",
                tr.t(keys::RESULT_AVAILABLE_PRESSURE),
                r.available_pressure_bar
            );
        }
        Err(e) => {
            println!("{}: {}", tr.t(keys::ERROR_PREFIX), tr.t(i18n::error_key(e)));
        }
    }
    Ok(())
}

/// 유체 코드를 읽는다. 알 수 없는 코드는 다시 묻는다.
fn read_fluid(tr: &Translator) -> Result<FluidKind, AppError> {
    loop {
        let code = read_line(tr.t(keys::PROMPT_FLUID))?;
        if let Some(kind) = fluid_db::find_fluid(&code) {
            return Ok(kind);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let code = sel.trim();
    if code.is_empty() {
        return Ok(());
    }
    match code.to_lowercase().as_str() {
        "auto" | "ko" | "ko-kr" | "en" | "en-us" => {
            cfg.language = code.to_lowercase();
            println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
        }
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
