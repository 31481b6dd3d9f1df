//! # 애플리케이션 상태
//!
//! 요청 핸들러와 미들웨어가 공유하는 서비스 묶음입니다.
//! `main`(또는 테스트)에서 리포지토리 구현체를 골라 조립한 뒤
//! `web::Data<AppState>`로 등록합니다.
//!
//! ```rust,ignore
//! let state = web::Data::new(AppState::from_repositories(
//!     Arc::new(MongoUserRepository::new(&database)),
//!     Arc::new(MongoContactRepository::new(&database)),
//!     Arc::new(TokenService::from_config()),
//!     PasswordHasher::from_config(),
//! ));
//!
//! App::new().app_data(state.clone()).configure(configure_all_routes)
//! ```

use std::sync::Arc;

use crate::repositories::contacts::ContactRepository;
use crate::repositories::users::UserRepository;
use crate::services::auth::{AuthService, PasswordHasher, TokenService};
use crate::services::contacts::ContactService;

/// 공유 서비스 컨테이너
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub contact_service: Arc<ContactService>,
    pub token_service: Arc<TokenService>,
}

impl AppState {
    pub fn from_repositories(
        user_repo: Arc<dyn UserRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                user_repo,
                token_service.clone(),
                password_hasher,
            )),
            contact_service: Arc::new(ContactService::new(contact_repo)),
            token_service,
        }
    }
}
