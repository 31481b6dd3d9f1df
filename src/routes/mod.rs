//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트를 메서드 + 경로 → 핸들러의 명시적인 표로 등록합니다.
//!
//! | Method | Path | Handler | 인증 |
//! |--------|------|---------|------|
//! | GET | `/health` | `health_check` | - |
//! | POST | `/user/signup` | `users::signup` | - |
//! | POST | `/user/login` | `users::login` | - |
//! | GET | `/user` | `users::get_current_user` | Bearer |
//! | POST | `/contact` | `contacts::create_contact` | Bearer |
//! | GET | `/contact` | `contacts::list_contacts` | Bearer |
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().app_data(state).configure(configure_all_routes);
//! ```

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::errors::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query parameters";

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    // Health check endpoint
    cfg.service(web::resource("/health").route(web::get().to(health_check)));

    configure_user_routes(cfg);
    configure_contact_routes(cfg);
}

/// 사용자 인증 라우트
///
/// - Public: `POST /user/signup`, `POST /user/login`
/// - Protected: `GET /user`
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/user/signup").route(web::post().to(handlers::users::signup)))
        .service(web::resource("/user/login").route(web::post().to(handlers::users::login)))
        .service(
            web::resource("/user")
                .route(web::get().to(handlers::users::get_current_user))
                .wrap(AuthMiddleware::required()),
        );
}

/// 연락처 라우트 (모두 인증 필요)
fn configure_contact_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact")
            .route(web::post().to(handlers::contacts::create_contact))
            .route(web::get().to(handlers::contacts::list_contacts))
            .wrap(AuthMiddleware::required()),
    );
}

/// 잘못된 JSON 본문을 표준 에러 봉투로 변환
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, req: &HttpRequest| {
        log::debug!("JSON 본문 파싱 실패 {}: {}", req.path(), err);
        AppError::ValidationError(INVALID_BODY_MESSAGE.to_string()).into()
    })
}

/// 잘못된 쿼리 문자열을 표준 에러 봉투로 변환
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, req: &HttpRequest| {
        log::debug!("쿼리 파싱 실패 {}: {}", req.path(), err);
        AppError::ValidationError(INVALID_QUERY_MESSAGE.to_string()).into()
    })
}

/// 헬스체크 엔드포인트
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "contact_book_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
