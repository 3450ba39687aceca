//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! `users` 컬렉션에 저장되는 평면 도큐먼트 형태를 그대로 표현합니다.

use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 저장소에 영속화되는 레코드와 1:1로 대응합니다.
///
/// ## 식별자 불변식
///
/// - 저장 전 레코드: `id`는 `None`
/// - 영속화된 레코드: `id`는 항상 `Some` (저장소 어댑터가 삽입 시점에 할당)
/// - 할당된 식별자는 이후 변경되지 않습니다
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 할당하는 불투명 식별자
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 이름
    pub name: String,
    /// 성
    pub surname: String,
    /// 나이 (자유 텍스트, 숫자가 아님)
    pub age: String,
    /// 개인 식별 번호 (CPF)
    pub cpf: String,
    /// 로그인 계정명
    pub login: String,
    /// 비밀번호 (불투명 문자열, 응답으로 절대 노출되지 않음)
    pub password: String,
    /// 관리자 여부 (기본값 false, 요청 본문으로 설정 불가)
    #[serde(default)]
    pub admin: bool,
}

impl User {
    /// 영속화된 레코드인지 확인합니다.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
