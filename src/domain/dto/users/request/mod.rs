//! 사용자 인증 요청 DTO

pub mod signup_request;
pub mod login_request;

pub use signup_request::SignupRequest;
pub use login_request::LoginRequest;
