use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;

use crate::errors::errors::AppError;
use crate::services::auth::token_service::INVALID_TOKEN_MESSAGE;

/// 토큰 검증을 통과한 요청 주체
///
/// `AuthMiddleware`가 request extensions에 저장하며, 핸들러에서는
/// 추출자로 바로 받을 수 있습니다.
///
/// ```rust,ignore
/// pub async fn get_current_user(user: AuthenticatedUser, ...) -> Result<HttpResponse, AppError>
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: ObjectId,
}

impl AuthenticatedUser {
    pub fn new(user_id: ObjectId) -> Self {
        Self { user_id }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(*user)),
            None => ready(Err(AppError::AuthenticationError(
                INVALID_TOKEN_MESSAGE.to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let user_id = ObjectId::new();
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedUser::new(user_id));

        let extracted = AuthenticatedUser::extract(&req).await.unwrap();

        assert_eq!(extracted.user_id, user_id);
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        let result = AuthenticatedUser::extract(&req).await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}
