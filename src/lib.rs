//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 솔버를 공유한다.

pub mod app;
pub mod config;
pub mod flow;
pub mod fluid_db;
pub mod i18n;
pub mod material_db;
pub mod ui_cli;
