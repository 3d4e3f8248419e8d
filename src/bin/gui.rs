#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점. 폼 상태(입력 문자열·마지막 결과)만
//! 여기서 소유하고 계산은 전부 라이브러리 솔버에 위임한다.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use pipe_flow_estimator::{
    config,
    flow::{estimate_flow, FlowEstimateInput},
    fluid_db::{self, FluidKind},
    i18n,
    material_db::{self, PipeMaterial},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([480.0, 540.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Pipe Flow Estimator",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 시스템 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래 사용자 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환하고 egui 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    Err("Korean-capable font not found; falling back to the default font.".into())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

fn legend_toggle(ui: &mut egui::Ui, title: &str, body: &str, state: &mut bool) {
    ui.horizontal(|ui| {
        ui.checkbox(state, title);
    });
    if *state {
        ui.add(egui::Label::new(egui::RichText::new(body).small()).wrap(true));
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_pack_dir_input: String,
    lang_save_status: Option<String>,
    show_legend_flow: bool,
    // 유량 추정 폼 (수치 필드는 원문 문자열 그대로 보관)
    flow_pressure: String,
    flow_fluid: FluidKind,
    flow_length: String,
    flow_diameter: String,
    flow_material: PipeMaterial,
    flow_elevation: String,
    flow_result: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let lang_pack_dir_input = config.language_pack_dir.clone().unwrap_or_default();
        Self {
            config,
            tr,
            lang_input,
            lang_pack_dir_input,
            lang_save_status: None,
            show_legend_flow: false,
            flow_pressure: String::new(),
            flow_fluid: FluidKind::Water,
            flow_length: String::new(),
            flow_diameter: String::new(),
            flow_material: PipeMaterial::Pe,
            flow_elevation: "0".into(),
            flow_result: None,
        }
    }

    fn reload_translator(&mut self) {
        let lang_code = i18n::resolve_language("auto", Some(self.config.language.as_str()));
        self.tr =
            i18n::Translator::new_with_pack(&lang_code, self.config.language_pack_dir.as_deref());
    }

    fn ui_flow_form(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.flow.heading", "Pipe Flow Estimate"),
            &txt(
                "gui.flow.tip",
                "Estimate volumetric flow through a pressurized pipe.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("flow_form_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.flow.pressure", "Supply pressure [bar]"));
                    ui.add(egui::TextEdit::singleline(&mut self.flow_pressure).desired_width(120.0));
                    ui.end_row();
                    ui.label(txt("gui.flow.fluid", "Fluid"));
                    egui::ComboBox::from_id_source("flow_fluid_combo")
                        .selected_text(fluid_code(self.flow_fluid))
                        .show_ui(ui, |ui| {
                            for f in fluid_db::fluids() {
                                ui.selectable_value(&mut self.flow_fluid, f.kind, f.code);
                            }
                        });
                    ui.end_row();
                    ui.label(txt("gui.flow.length", "Pipe length [m]"));
                    ui.add(egui::TextEdit::singleline(&mut self.flow_length).desired_width(120.0));
                    ui.end_row();
                    ui.label(txt("gui.flow.diameter", "Inner diameter [mm]"));
                    ui.add(egui::TextEdit::singleline(&mut self.flow_diameter).desired_width(120.0));
                    ui.end_row();
                    ui.label(txt("gui.flow.material", "Material"));
                    egui::ComboBox::from_id_source("flow_material_combo")
                        .selected_text(material_code(self.flow_material))
                        .show_ui(ui, |ui| {
                            for m in material_db::materials() {
                                ui.selectable_value(&mut self.flow_material, m.material, m.code);
                            }
                        });
                    ui.end_row();
                    label_with_tip(
                        ui,
                        &txt("gui.flow.elevation", "Elevation change [m]"),
                        &txt(
                            "gui.flow.elevation_tip",
                            "Signed: positive = uphill, negative = downhill. Blank = 0.",
                        ),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut self.flow_elevation).desired_width(120.0),
                    );
                    ui.end_row();
                });
            if ui.button(txt("gui.flow.run", "Calculate")).clicked() {
                let input = FlowEstimateInput {
                    pressure_bar: self.flow_pressure.clone(),
                    fluid: self.flow_fluid,
                    length_m: self.flow_length.clone(),
                    diameter_mm: self.flow_diameter.clone(),
                    material: self.flow_material,
                    elevation_m: self.flow_elevation.clone(),
                };
                self.flow_result = Some(match estimate_flow(&input) {
                    Ok(r) => format!(
                        "Q = {:.1} L/s ({:.1} m3/h), v = {:.2} m/s, P_avail = {:.2} bar",
                        r.flow_l_per_s, r.flow_m3_per_h, r.velocity_m_per_s, r.available_pressure_bar
                    ),
                    Err(e) => self.tr.t(i18n::error_key(e)).to_string(),
                });
            }
            if let Some(res) = &self.flow_result {
                ui.separator();
                ui.label(res);
                legend_toggle(
                    ui,
                    &txt("legend.flow.title", "Legend / notes"),
                    &txt(
                        "legend.flow.body",
                        "Q=flow, v=velocity, P_avail=pressure left after elevation head.",
                    ),
                    &mut self.show_legend_flow,
                );
            }
        });
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(txt("gui.settings.heading", "Settings"));
            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.settings.language", "Language (auto/ko/en-us)"));
                    ui.add(egui::TextEdit::singleline(&mut self.lang_input).desired_width(120.0));
                    ui.end_row();
                    ui.label(txt("gui.settings.pack_dir", "Language pack directory"));
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.lang_pack_dir_input)
                                .desired_width(160.0),
                        );
                        if ui.button(txt("gui.settings.browse", "Browse...")).clicked() {
                            if let Some(dir) = FileDialog::new().pick_folder() {
                                self.lang_pack_dir_input = dir.display().to_string();
                            }
                        }
                    });
                    ui.end_row();
                });
            if ui
                .button(txt("gui.settings.apply", "Apply & save"))
                .clicked()
            {
                self.config.language = self.lang_input.trim().to_string();
                let dir = self.lang_pack_dir_input.trim();
                self.config.language_pack_dir = if dir.is_empty() {
                    None
                } else {
                    Some(dir.to_string())
                };
                self.lang_save_status = Some(match self.config.save() {
                    Ok(()) => txt("gui.settings.saved", "Saved."),
                    Err(e) => format!("{e}"),
                });
                self.reload_translator();
            }
            if let Some(status) = &self.lang_save_status {
                ui.label(status);
            }
        });
    }
}

fn fluid_code(kind: FluidKind) -> &'static str {
    match kind {
        FluidKind::Water => "water",
        FluidKind::Oil => "oil",
        FluidKind::Glycol => "glycol",
    }
}

fn material_code(material: PipeMaterial) -> &'static str {
    match material {
        PipeMaterial::Pe => "PE",
        PipeMaterial::Pvc => "PVC",
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.ui_flow_form(ui);
                ui.add_space(12.0);
                self.ui_settings(ui);
            });
        });
    }
}
