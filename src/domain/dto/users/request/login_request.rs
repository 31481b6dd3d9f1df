//! # 로그인 요청 DTO
//!
//! 로그인 시에는 비밀번호 정책을 다시 검사하지 않고 비어있는지만 확인합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{validate_email_shape, OrderedValidate};

/// 로그인 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(required(message = "Email is not valid"))]
    #[validate(custom(function = "validate_email_shape"))]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(required(message = "Password cannot be left blank"))]
    #[validate(length(min = 1, message = "Password cannot be left blank"))]
    pub password: Option<String>,
}

impl OrderedValidate for LoginRequest {
    const FIELD_ORDER: &'static [&'static str] = &["email", "password"];
}
