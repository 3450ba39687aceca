//! 사용자 요청 DTO
//!
//! 사용자 생성/수정을 위한 HTTP 요청 본문의 데이터 구조를 정의합니다.

use serde::{Deserialize, Serialize};

/// 사용자 생성/수정 요청 DTO
///
/// 생성과 수정이 동일한 본문 형태를 공유합니다. 수정 경로의 식별자는
/// 본문이 아니라 `?id=` 쿼리 파라미터로만 전달됩니다.
///
/// 어떤 필드도 필수가 아닙니다. 누락된 필드는 빈 문자열로
/// 역직렬화되며, 별도의 필드 검증은 수행하지 않습니다.
/// `admin` 필드는 본문에서 받지 않으므로 요청으로 관리자 권한을
/// 부여할 수 없습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}
