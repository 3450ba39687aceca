//! 데이터 전송 객체 (DTO) 모듈

pub mod users;
