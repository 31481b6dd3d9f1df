//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 엔티티와 DTO를 분리하여 비밀번호 해시나 소유자 ID 같은 내부 필드가
//! 응답으로 노출되지 않도록 합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common/             # 공통 응답 봉투 ({ message, data })
//! ├── users/
//! │   ├── request/        # SignupRequest, LoginRequest
//! │   └── response/       # UserResponse, AuthResponse
//! └── contacts/
//!     ├── request/        # CreateContactRequest, ListContactsQuery
//!     └── response/       # ContactResponse, ContactListResponse
//! ```
//!
//! ## 입력값 검증
//!
//! 요청 DTO는 `validator` derive 규칙을 선언하고 [`OrderedValidate`]를 구현합니다.
//! 핸들러는 `validate_in_order()`를 호출하여 필드 순서상 첫 번째 위반만 받습니다.
//!
//! [`OrderedValidate`]: crate::utils::validation::OrderedValidate

pub mod common;
pub mod users;
pub mod contacts;

pub use common::{ApiResponse, EmptyData};
pub use users::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use contacts::{ContactListResponse, ContactResponse, CreateContactRequest, ListContactsQuery};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_types_reexported_by_name() {
        let signup = SignupRequest::default();
        let contact = CreateContactRequest::default();
        let query = ListContactsQuery::default();

        assert!(signup.email.is_none());
        assert!(contact.phone.is_none());
        assert!(query.limit.is_none());
        assert_eq!(ApiResponse::empty("ok").message, "ok");
    }
}
