//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 입력 문자열 정리와 이메일 정규화
//! - [`validation`] - 이메일/비밀번호 규칙과 순서 있는 DTO 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::validation::{is_valid_email, OrderedValidate};
//!
//! assert!(is_valid_email("ann@x.com"));
//! request.validate_in_order()?;
//! ```

pub mod string_utils;
pub mod validation;
