//! # 계층 간 매핑 함수
//!
//! 전송 계층 DTO, 서비스 계층 DTO, 도메인 엔티티 사이의 변환을 담당하는
//! 순수 함수 모듈입니다. 상태를 가지지 않으며 부수 효과가 없습니다.
//!
//! ## 변환 경로
//!
//! ```text
//! UserRequest ──to_service_request──▶ ServiceUserRequest
//!                                          │
//!                        to_user_for_save / to_user_for_update
//!                                          ▼
//!                                        User (엔티티)
//!                                          │
//!                                 to_service_response
//!                                          ▼
//! UserResponse ◀──to_wire_response── ServiceUserResponse
//! ```
//!
//! 모든 변환은 1:1 필드 복사입니다. 유일한 기본값 규칙은
//! "admin은 요청에 존재하지 않으므로 항상 false로 시작한다"입니다.
//! 응답 방향의 변환은 `login`/`password`를 구조적으로 제거합니다.
//! 대상 타입에 해당 필드가 없으므로 자격 증명이 응답 본문에
//! 나타나는 것은 불가능합니다.

use crate::domain::dto::users::request::UserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::dto::users::service::service_user::{ServiceUserRequest, ServiceUserResponse};
use crate::domain::entities::users::user::User;

/// 전송 계층 요청을 서비스 계층 요청으로 변환합니다.
///
/// 식별자는 본문으로 전달되지 않으므로 항상 `None`으로 시작합니다.
pub fn to_service_request(request: UserRequest) -> ServiceUserRequest {
    ServiceUserRequest {
        id: None,
        name: request.name,
        surname: request.surname,
        age: request.age,
        cpf: request.cpf,
        login: request.login,
        password: request.password,
    }
}

/// 서비스 계층 요청을 저장용 엔티티로 변환합니다.
///
/// 식별자가 비어 있는 상태로 생성되며, 삽입 시점에 저장소 어댑터가
/// 식별자를 할당합니다.
pub fn to_user_for_save(request: &ServiceUserRequest) -> User {
    User {
        id: None,
        name: request.name.clone(),
        surname: request.surname.clone(),
        age: request.age.clone(),
        cpf: request.cpf.clone(),
        login: request.login.clone(),
        password: request.password.clone(),
        admin: false,
    }
}

/// 서비스 계층 요청을 수정용 엔티티로 변환합니다.
///
/// 식별자는 호출자가 전달한 값으로 강제됩니다. 본문에 실려 온
/// 값은 신뢰하지 않습니다.
///
/// # 인자
/// * `id` - 수정 대상 레코드의 식별자 (경로/쿼리에서 추출된 값)
/// * `request` - 덮어쓸 필드들을 담은 서비스 계층 요청
pub fn to_user_for_update(id: &str, request: &ServiceUserRequest) -> User {
    User {
        id: Some(id.to_string()),
        name: request.name.clone(),
        surname: request.surname.clone(),
        age: request.age.clone(),
        cpf: request.cpf.clone(),
        login: request.login.clone(),
        password: request.password.clone(),
        admin: false,
    }
}

/// 엔티티를 서비스 계층 응답으로 투영합니다.
///
/// `login`과 `password`는 이 지점에서 제거되며 이후 어떤 계층에도
/// 다시 나타나지 않습니다.
pub fn to_service_response(user: User) -> ServiceUserResponse {
    ServiceUserResponse {
        id: user.id.unwrap_or_default(),
        name: user.name,
        surname: user.surname,
        age: user.age,
        cpf: user.cpf,
        admin: user.admin,
    }
}

/// 서비스 계층 응답을 전송 계층 응답으로 변환합니다.
pub fn to_wire_response(response: ServiceUserResponse) -> UserResponse {
    UserResponse {
        id: response.id,
        name: response.name,
        surname: response.surname,
        age: response.age,
        cpf: response.cpf,
        admin: response.admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ServiceUserRequest {
        ServiceUserRequest {
            id: None,
            name: "Andrews".to_string(),
            surname: "Souza".to_string(),
            age: "20".to_string(),
            cpf: "123".to_string(),
            login: "andrews".to_string(),
            password: "123".to_string(),
        }
    }

    fn sample_user() -> User {
        User {
            id: Some("1".to_string()),
            name: "Andrews".to_string(),
            surname: "Souza".to_string(),
            age: "20".to_string(),
            cpf: "123".to_string(),
            login: "andrews".to_string(),
            password: "123".to_string(),
            admin: false,
        }
    }

    #[test]
    fn test_to_service_request_copies_every_field() {
        let wire = UserRequest {
            name: "Andrews".to_string(),
            surname: "Souza".to_string(),
            age: "20".to_string(),
            cpf: "123".to_string(),
            login: "andrews".to_string(),
            password: "123".to_string(),
        };

        let request = to_service_request(wire);

        assert_eq!(request, sample_request());
    }

    #[test]
    fn test_to_user_for_save_leaves_id_unset() {
        let user = to_user_for_save(&sample_request());

        assert_eq!(user.id, None);
        assert_eq!(user.name, "Andrews");
        assert_eq!(user.login, "andrews");
        assert!(!user.admin);
    }

    #[test]
    fn test_to_user_for_update_forces_caller_id() {
        let mut request = sample_request();
        // 본문에 실려 온 식별자는 무시된다
        request.id = Some("forged".to_string());

        let user = to_user_for_update("1", &request);

        assert_eq!(user.id, Some("1".to_string()));
        assert!(!user.admin);
    }

    #[test]
    fn test_to_service_response_projects_out_credentials() {
        let response = to_service_response(sample_user());

        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();

        assert!(object.get("login").is_none());
        assert!(object.get("password").is_none());
        assert_eq!(object["id"], "1");
        assert_eq!(object["name"], "Andrews");
    }

    #[test]
    fn test_wire_response_never_contains_credentials() {
        let wire = to_wire_response(to_service_response(sample_user()));

        let json = serde_json::to_value(&wire).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 6);
        assert!(object.get("login").is_none());
        assert!(object.get("password").is_none());
    }

    #[test]
    fn test_full_pipeline_matches_expected_wire_shape() {
        let wire = to_wire_response(to_service_response(sample_user()));

        let expected = serde_json::json!({
            "id": "1",
            "name": "Andrews",
            "surname": "Souza",
            "age": "20",
            "cpf": "123",
            "admin": false
        });

        assert_eq!(serde_json::to_value(&wire).unwrap(), expected);
    }
}
