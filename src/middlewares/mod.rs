//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 사용자 ID를 request extension에 저장
//! - 보호된 리소스에만 적용
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! cfg.service(
//!     web::resource("/user")
//!         .route(web::get().to(get_current_user))
//!         .wrap(AuthMiddleware::required()),
//! );
//! ```

pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
