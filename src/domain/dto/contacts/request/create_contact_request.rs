//! # 연락처 생성 요청 DTO
//!
//! ## 검증 규칙 (순서대로)
//!
//! 1. `name` 필수 → `"Name is required"`
//! 2. `phone` 필수 → `"Phone is required"`
//! 3. `email`이 비어있지 않으면 이메일 형식 → `"Email is not valid"`
//!
//! 모든 문자열 필드는 앞뒤 공백이 제거되며, 빈 문자열은 누락으로 처리됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;
use crate::utils::validation::{validate_email_shape, OrderedValidate};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "Name is required"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "Phone is required"))]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_email_shape"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub country: Option<String>,
}

impl OrderedValidate for CreateContactRequest {
    const FIELD_ORDER: &'static [&'static str] = &["name", "phone", "email"];
}
