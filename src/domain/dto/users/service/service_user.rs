//! 서비스 계층 사용자 DTO
//!
//! 핸들러(전송 계층)와 도메인 엔티티(영속 계층) 사이에 놓이는
//! 중간 데이터 형태입니다. 전송 계층이 영속 타입에 직접 의존하지
//! 않도록 두 계층의 DTO를 분리해 유지합니다.

use serde::{Deserialize, Serialize};

/// 서비스 계층으로 들어오는 사용자 요청 표현
///
/// `id`는 수정 경로에서만 채워지며, 생성 경로에서는 항상 `None`입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUserRequest {
    pub id: Option<String>,
    pub name: String,
    pub surname: String,
    pub age: String,
    pub cpf: String,
    pub login: String,
    pub password: String,
}

/// 서비스 계층에서 나가는 사용자 응답 표현
///
/// 엔티티에서 자격 증명이 제거된 투영입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUserResponse {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub age: String,
    pub cpf: String,
    pub admin: bool,
}
