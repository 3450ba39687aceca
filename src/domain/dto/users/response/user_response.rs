//! 사용자 응답 DTO
//!
//! HTTP 응답 본문으로 나가는 사용자 표현을 정의합니다.

use serde::{Deserialize, Serialize};

/// 사용자 응답 DTO
///
/// 클라이언트에 노출되는 사용자 정보의 전부입니다.
/// `login`과 `password`는 구조체에 존재하지 않으므로
/// 어떤 직렬화 경로로도 응답에 포함될 수 없습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub age: String,
    pub cpf: String,
    pub admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_expected_fields_only() {
        let response = UserResponse {
            id: "1".to_string(),
            name: "Andrews".to_string(),
            surname: "Souza".to_string(),
            age: "20".to_string(),
            cpf: "123".to_string(),
            admin: false,
        };

        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 6);
        assert!(object.get("login").is_none());
        assert!(object.get("password").is_none());
    }
}
