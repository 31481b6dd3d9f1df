//! 인증 설정 관리 모듈
//!
//! 액세스 토큰 서명과 만료에 관련된 설정을 관리합니다.
//!
//! ```bash
//! # 안전한 서명 키 생성
//! openssl rand -base64 32
//!
//! export JWT_SECRET="your-super-secret-256-bit-key-generated-securely"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;

const DEV_JWT_SECRET: &str = "contact-book-dev-secret";

/// JWT 설정
///
/// 토큰은 HS256으로 서명되며 서버 측 세션 저장소 없이 검증됩니다.
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본 키를 사용하며 경고 로그가 출력됩니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            DEV_JWT_SECRET.to_string()
        })
    }

    /// 액세스 토큰의 만료 시간 (시간 단위). 기본값: 24
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|hours| hours.parse::<i64>().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or(24)
    }
}
