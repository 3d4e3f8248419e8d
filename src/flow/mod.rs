//! 관로 수리 계산 모듈 모음.

pub mod pipe_flow;

pub use pipe_flow::*;
