//! API 응답 봉투
//!
//! 성공/실패 여부와 무관하게 모든 응답은 동일한 구조를 따릅니다.
//!
//! ```json
//! { "message": "Contact added", "data": { "id": "...", "name": "Bob" } }
//! { "message": "Phone is required", "data": {} }
//! ```

use serde::{Deserialize, Serialize};

/// 표준 응답 봉투
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 사람이 읽을 수 있는 결과 메시지
    pub message: String,
    /// 응답 데이터 (에러의 경우 빈 객체)
    pub data: T,
}

/// 에러 응답의 빈 `data` 객체
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmptyData {}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

impl ApiResponse<EmptyData> {
    /// 데이터 없이 메시지만 담은 응답 생성
    pub fn empty(message: impl Into<String>) -> Self {
        Self::new(message, EmptyData::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_serializes_empty_object() {
        let json = serde_json::to_value(ApiResponse::empty("User not found")).unwrap();

        assert_eq!(json, serde_json::json!({ "message": "User not found", "data": {} }));
    }
}
