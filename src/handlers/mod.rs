//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! Actix-web 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/DTOs - 도메인 모델                   ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 주요 특징
//!
//! - **비동기 처리**: 모든 핸들러가 `async/await` 기반으로 동작합니다
//! - **자동 직렬화**: JSON ↔ Rust 구조체 자동 변환
//! - **통합 에러 처리**: `Result<HttpResponse, AppError>` 반환으로
//!   실패가 자동으로 표준 에러 응답으로 변환됩니다

pub mod users;
