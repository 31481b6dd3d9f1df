//! 사용자 인증 HTTP 핸들러
//!
//! | Method | Path | 인증 | 성공 메시지 |
//! |--------|------|------|-------------|
//! | POST | `/user/signup` | - | `User signup complete` |
//! | POST | `/user/login` | - | `Login successful` |
//! | GET | `/user` | Bearer | `User detail` |
//!
//! ```bash
//! curl -X POST http://localhost:8080/user/signup \
//!   -H "Content-Type: application/json" \
//!   -d '{"name":"Ann","email":"ann@x.com","password":"Abcdef1@"}'
//! ```

use actix_web::{web, HttpResponse};

use crate::core::state::AppState;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::users::request::{LoginRequest, SignupRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

/// 회원가입 핸들러
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "message": "User signup complete",
///   "data": {
///     "access_token": "eyJ0eXAiOiJKV1Qi...",
///     "user": { "id": "665f1f77bcf86cd799439011", "name": "Ann", "email": "ann@x.com" }
///   }
/// }
/// ```
///
/// ## 실패 (400 Bad Request)
/// ```json
/// { "message": "Email already registered", "data": {} }
/// ```
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_service.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new("User signup complete", response)))
}

/// 로그인 핸들러
///
/// 가입되지 않은 이메일은 404가 아닌 400으로 응답합니다.
/// 비밀번호 불일치는 401입니다.
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .auth_service
        .login(payload.into_inner())
        .await
        .map_err(|e| match e {
            AppError::NotFound(msg) => AppError::ValidationError(msg),
            other => other,
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::new("Login successful", response)))
}

/// 현재 사용자 조회 핸들러
pub async fn get_current_user(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_service.current_user(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new("User detail", response)))
}
