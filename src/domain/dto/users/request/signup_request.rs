//! # 회원가입 요청 DTO
//!
//! ## 검증 규칙 (순서대로, 첫 번째 실패만 보고)
//!
//! 1. `name` - 누락 또는 공백 → `"Name cannot be left blank"`
//! 2. `email` - 누락 또는 형식 불일치 → `"Email is not valid"`
//! 3. `password` - 누락 또는 정책 불일치 → 비밀번호 정책 메시지
//!
//! 비밀번호가 빈 문자열인 경우에도 정책 메시지가 반환됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;
use crate::utils::validation::{validate_email_shape, validate_password_policy, OrderedValidate};

/// 회원가입 요청
///
/// ```json
/// { "name": "Ann", "email": "ann@x.com", "password": "Abcdef1@" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "Name cannot be left blank"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(required(message = "Email is not valid"))]
    #[validate(custom(function = "validate_email_shape"))]
    pub email: Option<String>,

    /// 평문 비밀번호 (공백 포함 원본 그대로 검증)
    #[serde(default)]
    #[validate(required(
        message = "Password must be at least 8 characters long, include at least one uppercase letter, and one special character"
    ))]
    #[validate(custom(function = "validate_password_policy"))]
    pub password: Option<String>,
}

impl OrderedValidate for SignupRequest {
    const FIELD_ORDER: &'static [&'static str] = &["name", "email", "password"];
}
