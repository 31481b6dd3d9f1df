//! # 입력값 검증 유틸리티
//!
//! 요청 DTO의 `validator` 규칙에서 사용하는 커스텀 검증 함수와,
//! 필드 순서대로 첫 번째 위반만 보고하는 검증 헬퍼를 제공합니다.
//!
//! ## 규칙 적용 순서
//!
//! `validator`는 모든 필드의 에러를 한 번에 수집하지만, 클라이언트에게는
//! 미리 정해진 필드 순서에서 가장 먼저 실패한 필드의 메시지 하나만 전달됩니다.
//!
//! ```rust,ignore
//! impl OrderedValidate for SignupRequest {
//!     const FIELD_ORDER: &'static [&'static str] = &["name", "email", "password"];
//! }
//!
//! payload.validate_in_order()?; // Err(ValidationError("Email is not valid"))
//! ```

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::errors::{AppError, AppResult};

pub const EMAIL_INVALID_MESSAGE: &str = "Email is not valid";
pub const PASSWORD_POLICY_MESSAGE: &str = "Password must be at least 8 characters long, include at least one uppercase letter, and one special character";

/// 허용되는 비밀번호 특수문자
pub const PASSWORD_SPECIAL_CHARS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// 이메일 형식: 로컬 파트는 소문자/숫자이며 중간에 `.` 또는 `_` 하나까지 허용
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+[._]?[a-z0-9]+@\w+\.\w+$").expect("Invalid email regex pattern")
});

/// 비밀번호 허용 문자 집합과 최소 길이
static PASSWORD_CHARSET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,}$").expect("Invalid password regex pattern")
});

/// 이메일 형식 검사
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// 비밀번호 정책 검사
///
/// - 8자 이상, `[A-Za-z0-9@$!%*?&]` 문자만 허용
/// - 대문자 최소 1개
/// - 특수문자(`@$!%*?&`) 최소 1개
pub fn meets_password_policy(password: &str) -> bool {
    PASSWORD_CHARSET_REGEX.is_match(password)
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(&c))
}

/// `validator` 커스텀 규칙: 이메일 형식
pub fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::new("email_shape")
            .with_message(Cow::Borrowed(EMAIL_INVALID_MESSAGE)));
    }
    Ok(())
}

/// `validator` 커스텀 규칙: 비밀번호 정책
pub fn validate_password_policy(password: &str) -> Result<(), ValidationError> {
    if !meets_password_policy(password) {
        return Err(ValidationError::new("password_policy")
            .with_message(Cow::Borrowed(PASSWORD_POLICY_MESSAGE)));
    }
    Ok(())
}

/// 필드 순서상 첫 번째 위반을 `AppError::ValidationError`로 변환
///
/// `order`에 없는 필드의 에러만 남은 경우 첫 번째로 발견된 에러 메시지를 사용합니다.
pub fn first_violation(errors: &ValidationErrors, order: &[&str]) -> AppError {
    let field_errors = errors.field_errors();

    let message = order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .chain(field_errors.values())
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request".to_string());

    AppError::ValidationError(message)
}

/// 고정된 필드 순서로 검증 결과를 보고하는 trait
pub trait OrderedValidate: Validate {
    /// 에러 보고 우선순위
    const FIELD_ORDER: &'static [&'static str];

    fn validate_in_order(&self) -> AppResult<()> {
        self.validate()
            .map_err(|errors| first_violation(&errors, Self::FIELD_ORDER))
    }
}
