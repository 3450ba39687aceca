//! # User Resource HTTP Handlers
//!
//! 사용자 리소스의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! Spring Framework의 `@RestController`에 해당하는 계층으로,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 전체 사용자 목록 | 200 OK |
//! | `GET` | `/users/{name}` | 이름으로 검색 | 200 OK |
//! | `POST` | `/users` | 새 사용자 저장 | 201 Created |
//! | `PUT` | `/users?id={id}` | 사용자 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 No Content |
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 실패는
//! `AppError`의 `ResponseError` 구현을 통해 자동으로 표준 에러 본문과
//! 상태 코드로 변환됩니다. 핸들러 자신은 상태 코드를 결정하지 않습니다.
//!
//! ## 본문 파싱
//!
//! 쓰기 엔드포인트의 본문은 `Option<web::Json<_>>`으로 추출합니다.
//! 본문이 없거나 역직렬화에 실패하면 `None`이 되고, 핸들러가 이를
//! 연산별 고정 메시지의 `BadRequest`로 변환합니다. 이렇게 하면
//! 파싱 실패도 다른 모든 실패와 동일한 에러 본문 형태로 응답됩니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::UserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::mapper;
use crate::services::users::UserService;

/// 수정 경로의 쿼리 파라미터
///
/// 수정 대상 식별자는 본문이 아니라 `?id=`로만 전달됩니다.
#[derive(Debug, Deserialize)]
pub struct UpdateUserQuery {
    pub id: String,
}

/// 전체 사용자 목록 조회
///
/// # Returns
///
/// * `200 OK` - 사용자 응답 DTO 배열
/// * `204 No Content` - 저장소가 비어 있는 경우 (표준 에러 본문 포함)
#[get("")]
pub async fn list_all_users() -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let response = service.find_all().await?;

    let body: Vec<UserResponse> = response
        .into_iter()
        .map(mapper::to_wire_response)
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// 이름으로 사용자 검색
///
/// 이름에 경로 조각을 포함하는 사용자를 대소문자 구분 없이 찾습니다.
///
/// # Returns
///
/// * `200 OK` - 일치한 사용자 응답 DTO 배열
/// * `404 Not Found` - 일치한 사용자가 없는 경우
#[get("/{name}")]
pub async fn find_users_by_name(name: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let response = service.find_by_name(&name).await?;

    let body: Vec<UserResponse> = response
        .into_iter()
        .map(mapper::to_wire_response)
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// 새 사용자 저장
///
/// # Returns
///
/// * `201 Created` - 할당된 식별자를 포함한 저장 결과
/// * `400 Bad Request` - 본문이 없거나 파싱할 수 없는 경우
/// * `503 Service Unavailable` - 저장소가 레코드를 돌려주지 않은 경우
#[post("")]
pub async fn save_user(payload: Option<web::Json<UserRequest>>) -> Result<HttpResponse, AppError> {
    let payload = payload
        .ok_or_else(|| AppError::BadRequest("you must supply a resource to save!".to_string()))?;

    let service = UserService::instance();
    let response = service
        .save(mapper::to_service_request(payload.into_inner()))
        .await?;

    Ok(HttpResponse::Created().json(mapper::to_wire_response(response)))
}

/// 기존 사용자 수정
///
/// 대상 식별자는 `?id=` 쿼리 파라미터로 전달되며, 해당 레코드의
/// 모든 가변 필드가 본문 내용으로 교체됩니다.
///
/// # Returns
///
/// * `200 OK` - 교체된 레코드
/// * `400 Bad Request` - 본문 또는 `id` 파라미터가 없는 경우
/// * `404 Not Found` - 해당 식별자의 레코드가 없는 경우
/// * `503 Service Unavailable` - 저장소가 레코드를 돌려주지 않은 경우
#[put("")]
pub async fn update_user(
    query: Option<web::Query<UpdateUserQuery>>,
    payload: Option<web::Json<UserRequest>>,
) -> Result<HttpResponse, AppError> {
    let query = query.ok_or_else(|| AppError::BadRequest("Invalid Data".to_string()))?;
    let payload = payload
        .ok_or_else(|| AppError::BadRequest("you must supply a resource to update!".to_string()))?;

    let service = UserService::instance();
    let response = service
        .update(&query.id, mapper::to_service_request(payload.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(mapper::to_wire_response(response)))
}

/// 사용자 삭제
///
/// # Returns
///
/// * `204 No Content` - 삭제 완료 (본문 없음)
/// * `404 Not Found` - 해당 식별자의 레코드가 없는 경우
#[delete("/{id}")]
pub async fn delete_user(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    service.delete_by_id(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
