//! # 인증 서비스
//!
//! 회원가입, 로그인, 현재 사용자 조회를 담당합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! signup: 입력 검증 → 이메일 정규화 → 중복 확인 → 해싱 → 저장 → 토큰 발급
//! login:  입력 검증 → 이메일 조회 → 비밀번호 검증 → 토큰 발급
//! me:     토큰의 사용자 ID로 조회
//! ```
//!
//! 비밀번호와 토큰은 로그에 기록하지 않습니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::users::request::{LoginRequest, SignupRequest};
use crate::domain::dto::users::response::{AuthResponse, UserResponse};
use crate::domain::entities::users::user::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::{UserRepository, EMAIL_ALREADY_REGISTERED};
use crate::services::auth::password_hasher::PasswordHasher;
use crate::services::auth::token_service::TokenService;
use crate::utils::string_utils::normalize_email;
use crate::utils::validation::OrderedValidate;

pub const EMAIL_NOT_REGISTERED: &str = "Email not registered";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const USER_NOT_FOUND: &str = "User not found";

fn missing_after_validation(field: &str) -> AppError {
    AppError::InternalError(format!("검증을 통과한 요청에 {} 값이 없습니다", field))
}

/// 인증 서비스
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            user_repo,
            token_service,
            password_hasher,
        }
    }

    /// 회원가입
    ///
    /// # 에러
    ///
    /// * `ValidationError` - 이름/이메일/비밀번호 규칙 위반 (첫 번째 위반만)
    /// * `ConflictError` - 이미 가입된 이메일 (동시 가입은 유니크 인덱스가 막음)
    pub async fn signup(&self, request: SignupRequest) -> AppResult<AuthResponse> {
        let start_time = std::time::Instant::now();
        request.validate_in_order()?;

        let SignupRequest { name, email, password } = request;
        let name = name.ok_or_else(|| missing_after_validation("name"))?;
        let email = normalize_email(&email.ok_or_else(|| missing_after_validation("email"))?);
        let password = password.ok_or_else(|| missing_after_validation("password"))?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            log::info!("중복 이메일로 가입 시도: {}", email);
            return Err(AppError::ConflictError(EMAIL_ALREADY_REGISTERED.to_string()));
        }

        let password_hash = self.password_hasher.hash(&password)?;
        let user = self.user_repo.create(User::new(name, email, password_hash)).await?;

        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;
        let access_token = self.token_service.issue(&user_id)?;

        log::info!("✅ 회원가입 완료 - 사용자: {}, ID: {}", user.email, user_id);
        log::debug!("Total signup took: {:?}", start_time.elapsed());

        Ok(AuthResponse {
            access_token,
            user: UserResponse::from(user),
        })
    }

    /// 로그인
    ///
    /// 비밀번호 정책은 다시 검사하지 않고 비어있는지만 확인합니다.
    ///
    /// # 에러
    ///
    /// * `ValidationError` - 이메일 형식 또는 빈 비밀번호
    /// * `NotFound` - 가입되지 않은 이메일
    /// * `AuthenticationError` - 비밀번호 불일치
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        request.validate_in_order()?;

        let LoginRequest { email, password } = request;
        let email = normalize_email(&email.ok_or_else(|| missing_after_validation("email"))?);
        let password = password.ok_or_else(|| missing_after_validation("password"))?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                log::warn!("⚠️ 가입되지 않은 이메일로 로그인 시도: {}", email);
                AppError::NotFound(EMAIL_NOT_REGISTERED.to_string())
            })?;

        if !self.password_hasher.verify(&password, &user.password_hash)? {
            log::warn!("⚠️ 비밀번호 불일치 - 사용자: {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;
        let access_token = self.token_service.issue(&user_id)?;

        log::info!("🔑 로그인 성공 - 사용자: {}, ID: {}", user.email, user_id);

        Ok(AuthResponse {
            access_token,
            user: UserResponse::from(user),
        })
    }

    /// 토큰의 사용자 ID로 현재 사용자 조회
    pub async fn current_user(&self, user_id: &ObjectId) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                log::warn!("⚠️ 토큰은 유효하지만 사용자가 존재하지 않음: {}", user_id);
                AppError::NotFound(USER_NOT_FOUND.to_string())
            })?;

        Ok(UserResponse::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryUserRepository;
    use crate::utils::validation::PASSWORD_POLICY_MESSAGE;

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(TokenService::new("test-secret", 1)),
            PasswordHasher::new(4),
        )
    }

    fn signup_request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[actix_web::test]
    async fn test_signup_then_login() {
        let service = service();

        let signed_up = service.signup(signup_request("Ann", "ann@x.com", "Abcdef1@")).await.unwrap();
        assert_eq!(signed_up.user.name, "Ann");
        assert_eq!(signed_up.user.email, "ann@x.com");
        assert!(!signed_up.access_token.is_empty());

        let logged_in = service.login(login_request("ann@x.com", "Abcdef1@")).await.unwrap();
        assert_eq!(logged_in.user.id, signed_up.user.id);
    }

    #[actix_web::test]
    async fn test_issued_token_resolves_to_user() {
        let token_service = Arc::new(TokenService::new("test-secret", 1));
        let service = AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            token_service.clone(),
            PasswordHasher::new(4),
        );

        let signed_up = service.signup(signup_request("Ann", "ann@x.com", "Abcdef1@")).await.unwrap();
        let user_id = token_service.verify(&signed_up.access_token).unwrap();
        let me = service.current_user(&user_id).await.unwrap();

        assert_eq!(me.id, signed_up.user.id);
        assert_eq!(me.email, "ann@x.com");
    }

    #[actix_web::test]
    async fn test_duplicate_signup_is_conflict() {
        let service = service();
        service.signup(signup_request("Ann", "ann@x.com", "Abcdef1@")).await.unwrap();

        let result = service.signup(signup_request("Other Ann", "ann@x.com", "Zyxwvu9!")).await;

        match result {
            Err(AppError::ConflictError(msg)) => assert_eq!(msg, EMAIL_ALREADY_REGISTERED),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn test_signup_rejects_weak_password() {
        let result = service().signup(signup_request("Ann", "ann@x.com", "abcdefgh")).await;

        match result {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, PASSWORD_POLICY_MESSAGE),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn test_login_unknown_email_is_not_found() {
        let result = service().login(login_request("nobody@x.com", "Abcdef1@")).await;

        match result {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, EMAIL_NOT_REGISTERED),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let service = service();
        service.signup(signup_request("Ann", "ann@x.com", "Abcdef1@")).await.unwrap();

        let result = service.login(login_request("ann@x.com", "Wrong123!")).await;

        match result {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, INVALID_CREDENTIALS),
            other => panic!("expected unauthorized, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn test_current_user_missing() {
        let result = service().current_user(&ObjectId::new()).await;

        match result {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, USER_NOT_FOUND),
            other => panic!("expected not found, got {other:?}"),
        }
    }
}
