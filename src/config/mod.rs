//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 설계 원칙
//!
//! - **환경 분리**: 개발/테스트/스테이징/프로덕션 환경별 설정 (Spring Profile 방식)
//! - **환경 변수 우선**: 모든 설정은 환경 변수로 재정의 가능
//! - **안전한 기본값**: 기본값은 로컬 개발 환경에서만 의미를 가짐

pub mod data_config;

pub use data_config::*;
