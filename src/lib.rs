//! 연락처 관리 백엔드
//!
//! 사용자 가입/인증과 사용자별 연락처 관리를 제공하는 actix-web 기반 서비스입니다.
//!
//! # Features
//!
//! - **사용자 인증**: 이메일/비밀번호 가입과 로그인, bcrypt 해싱
//! - **토큰 인증**: 상태 없는 JWT Bearer 토큰 (HS256)
//! - **연락처 관리**: 소유자 범위의 생성과 목록 조회
//! - **목록 조회**: 대소문자 무시 부분 일치 필터, 네 가지 정렬, 페이지네이션
//!
//! # Architecture
//!
//! ```text
//! routes → middlewares → handlers → services → repositories → MongoDB
//!                                       ↑
//!                               core::AppState (Arc 주입)
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use contact_book_backend::core::AppState;
//! use contact_book_backend::repositories::{InMemoryContactRepository, InMemoryUserRepository};
//! use contact_book_backend::routes::configure_all_routes;
//! use contact_book_backend::services::auth::{PasswordHasher, TokenService};
//!
//! let state = web::Data::new(AppState::from_repositories(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(InMemoryContactRepository::new()),
//!     Arc::new(TokenService::from_config()),
//!     PasswordHasher::from_config(),
//! ));
//!
//! let app = App::new().app_data(state).configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
