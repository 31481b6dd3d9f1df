//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 저장되는 엔티티와 API 계약(DTO),
//! 그리고 계층 간에 전달되는 값 객체(모델)를 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - User, Contact (MongoDB 문서)
//! ├── DTOs      - 요청/응답 데이터 구조
//! └── Models    - 인증 주체, 연락처 조회 조건, 페이지 결과
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! 도메인 계층은 actix-web 핸들러나 MongoDB 컬렉션에 직접 의존하지 않습니다.
//! 단, 식별자와 시간 타입은 `bson`의 `ObjectId`, `DateTime`을 그대로 사용합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{Contact, User};
pub use models::{AuthenticatedUser, ContactQuery, Page};
