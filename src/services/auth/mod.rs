//! 인증 관련 서비스
//!
//! - [`AuthService`](auth_service::AuthService) - 회원가입/로그인/현재 사용자
//! - [`TokenService`](token_service::TokenService) - 액세스 토큰 발급/검증
//! - [`PasswordHasher`](password_hasher::PasswordHasher) - bcrypt 해싱

pub mod auth_service;
pub mod token_service;
pub mod password_hasher;

pub use auth_service::AuthService;
pub use token_service::TokenService;
pub use password_hasher::PasswordHasher;
