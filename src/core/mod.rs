//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 상태를 정의합니다.
//!
//! 서비스는 전역 레지스트리 없이 생성자 주입으로 조립되며,
//! 조립된 결과는 [`AppState`](state::AppState) 하나로 핸들러에 전달됩니다.
//!
//! | 계층 | 주입받는 것 |
//! |------|-------------|
//! | `AuthService` | `Arc<dyn UserRepository>`, `Arc<TokenService>`, `PasswordHasher` |
//! | `ContactService` | `Arc<dyn ContactRepository>` |
//! | `AuthMiddleware` | `AppState::token_service` |

pub mod state;

pub use state::AppState;
