//! # Domain Models
//!
//! 엔티티도 DTO도 아닌, 계층 사이를 오가는 값 객체들입니다.
//!
//! - [`auth`] - 토큰 검증을 통과한 요청 주체 (`AuthenticatedUser`)
//! - [`query`] - 연락처 조회 조건 (`ContactQuery`)과 페이지 결과 (`Page<T>`)

pub mod auth;
pub mod query;

pub use auth::*;
pub use query::*;
