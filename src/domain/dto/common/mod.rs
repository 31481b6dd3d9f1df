//! 공통 응답 DTO 모듈
//!
//! 모든 엔드포인트가 공유하는 `{ "message": ..., "data": ... }` 응답 봉투를 정의합니다.

pub mod api_response;

pub use api_response::{ApiResponse, EmptyData};
