//! 연락처 HTTP 핸들러
//!
//! 두 엔드포인트 모두 `AuthMiddleware`로 보호되며, 요청 주체의 연락처만 다룹니다.
//!
//! ```bash
//! curl "http://localhost:8080/contact?page=2&limit=10&sort_by=alphabetically_a_to_z&name=bo" \
//!   -H "Authorization: Bearer eyJ0eXAiOiJKV1Qi..."
//! ```

use actix_web::{web, HttpResponse};

use crate::core::state::AppState;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::contacts::request::{CreateContactRequest, ListContactsQuery};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

/// 연락처 생성 핸들러 (`POST /contact`)
pub async fn create_contact(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<CreateContactRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .contact_service
        .create(user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new("Contact added", response)))
}

/// 연락처 목록 핸들러 (`GET /contact`)
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "message": "Contact list",
///   "data": {
///     "list": [ { "id": "...", "name": "Bob", "email": null, "phone": "123", "address": null, "country": null } ],
///     "has_next": false, "has_prev": true,
///     "page": 2, "pages": 2, "per_page": 10, "total": 15
///   }
/// }
/// ```
pub async fn list_contacts(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    query: web::Query<ListContactsQuery>,
) -> Result<HttpResponse, AppError> {
    let response = state.contact_service.list(user.user_id, &query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new("Contact list", response)))
}
