//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리 trait 객체를 생성자로 주입받으며,
//! `AppState`를 통해 핸들러에 공유됩니다.
//!
//! # Features
//!
//! - 회원가입/로그인/현재 사용자 조회
//! - 상태 없는 JWT 액세스 토큰
//! - 소유자 범위의 연락처 생성과 필터/정렬/페이지 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthService, contacts::ContactService};
//!
//! let contact_service = ContactService::new(Arc::new(MongoContactRepository::new(&database)));
//! let listed = contact_service.list(owner_id, &params).await?;
//! ```

pub mod auth;
pub mod contacts;
