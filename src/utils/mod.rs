//! 공통 유틸리티 모듈

pub mod display_terminal;
pub mod string_utils;
