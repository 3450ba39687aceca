//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 결합하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 설계 철학
//!
//! ### 1. 의미론적 에러 분류
//! - 서비스 계층은 위반된 불변식에 따라 명시적인 에러 변형을 발생시킵니다
//! - 각 변형은 HTTP 상태 코드와 1:1로 매핑됩니다
//! - 상태 코드 변환은 이 모듈에서만 수행됩니다 (다른 계층은 상태 코드를 알지 못함)
//!
//! ### 2. 표준화된 에러 응답
//! 모든 에러는 동일한 JSON 형태로 클라이언트에 전달됩니다:
//!
//! ```json
//! {
//!   "timestamp": "07/08/2026 14:02:33",
//!   "status": 404,
//!   "message": "User not found!"
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `EmptyResult` | 204 No Content | 조회 결과가 비어 있음 |
//! | `NotFound` | 404 Not Found | 변경 전 존재 확인 실패 |
//! | `BadRequest` | 400 Bad Request | 요청 본문/파라미터 파싱 실패 |
//! | `Unavailable` | 503 Service Unavailable | 저장소가 쓰기 결과를 돌려주지 않음 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 연산 오류 |
//! | `InternalError` | 500 Internal Server Error | 시스템 레벨 오류 |
//! | `Unexpected` | 500 Internal Server Error | 분류되지 않은 런타임 오류 |

use actix_web::http::StatusCode;
use chrono::Local;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스 계층이 발생시키는 모든 실패 종류를 포괄하는 열거형입니다.
/// `actix_web::ResponseError` 구현을 통해 자동으로 HTTP 응답으로 변환됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // 존재하지 않는 리소스
/// if !exists {
///     return Err(AppError::NotFound("Id not found".to_string()));
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 조회 결과 없음 (204 No Content)
    ///
    /// 전체 목록 조회가 빈 시퀀스를 돌려준 경우입니다.
    /// 클라이언트 오류가 아니므로 2xx 계열로 응답하되,
    /// 표준 에러 본문에 사유 메시지를 담아 전달합니다.
    #[error("{0}")]
    EmptyResult(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// 이름 검색이 비어 있거나, 수정/삭제 전 존재 확인이 실패한 경우입니다.
    #[error("{0}")]
    NotFound(String),

    /// 요청 파싱 에러 (400 Bad Request)
    ///
    /// 요청 본문을 역직렬화할 수 없거나 필수 파라미터가 누락된 경우입니다.
    #[error("{0}")]
    BadRequest(String),

    /// 저장소 쓰기 결과 없음 에러 (503 Service Unavailable)
    ///
    /// 저장소가 쓰기를 받아들였지만 사용할 수 있는 레코드를
    /// 돌려주지 않은 경우입니다.
    #[error("{0}")]
    Unavailable(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// MongoDB 연산 중 발생하는 오류입니다. 드라이버의 메시지를 그대로 전달합니다.
    #[error("{0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("{0}")]
    InternalError(String),

    /// 분류되지 않은 런타임 에러 (500 Internal Server Error)
    ///
    /// 내부 정보 노출을 피하기 위해 고정 메시지로 응답합니다.
    #[error("An unexpected error ocurred")]
    Unexpected,
}

impl AppError {
    /// 에러 변형에 해당하는 HTTP 상태 코드를 반환합니다.
    ///
    /// 상태 코드 매핑의 유일한 기준점입니다. 구체적인 변형이 먼저
    /// 매칭되고, 나머지는 모두 500으로 수렴합니다.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyResult(_) => StatusCode::NO_CONTENT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러를 `StandardError` 본문으로 직렬화합니다.
    /// 클라이언트는 실패 종류와 무관하게 항상 동일한 형태의
    /// JSON 본문을 받으며, 스택 트레이스는 절대 노출되지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();
        actix_web::HttpResponse::build(status)
            .json(StandardError::new(status.as_u16(), self.to_string()))
    }
}

/// 표준 에러 응답 본문
///
/// 실패 종류와 무관하게 모든 에러 응답이 따르는 형태입니다.
/// 타임스탬프는 생성 시점의 로컬 시간을 `dd/MM/yyyy HH:mm:ss` 형식으로 기록합니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandardError {
    pub timestamp: String,
    pub status: u16,
    pub message: String,
}

impl StandardError {
    /// 현재 시각의 타임스탬프와 함께 새 에러 본문을 생성합니다.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format("%d/%m/%Y %H:%M:%S").to_string(),
            status,
            message: message.into(),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_empty_result_error_response() {
        let error = AppError::EmptyResult("Sorry the database is empty!".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found!".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_error_response() {
        let error = AppError::BadRequest("you must supply a resource to save!".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unavailable_error_response() {
        let error = AppError::Unavailable("Unreachable server!".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unexpected_error_has_fixed_message() {
        let error = AppError::Unexpected;

        assert_eq!(error.to_string(), "An unexpected error ocurred");
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message_passes_through_unchanged() {
        let error = AppError::DatabaseError("index build failed".to_string());

        assert_eq!(error.to_string(), "index build failed");
    }

    #[test]
    fn test_standard_error_body_shape() {
        let body = StandardError::new(404, "Id not found");
        let json = serde_json::to_value(&body).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert!(object.contains_key("timestamp"));
        assert_eq!(object["status"], 404);
        assert_eq!(object["message"], "Id not found");
    }

    #[test]
    fn test_standard_error_timestamp_format() {
        let body = StandardError::new(204, "Sorry the database is empty!");

        // dd/MM/yyyy HH:mm:ss
        assert_eq!(body.timestamp.len(), 19);
        assert_eq!(&body.timestamp[2..3], "/");
        assert_eq!(&body.timestamp[5..6], "/");
        assert_eq!(&body.timestamp[10..11], " ");
    }
}
