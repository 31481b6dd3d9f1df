//! JWT 토큰 관리 서비스 구현
//!
//! 사용자 ID에 바인딩된 상태 없는(stateless) 액세스 토큰을 발급하고 검증합니다.
//! 서버 측 세션 저장소는 사용하지 않습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::errors::errors::AppError;

/// 토큰 누락/검증 실패 시 클라이언트에 전달되는 메시지
pub const INVALID_TOKEN_MESSAGE: &str = "Missing or invalid authorization token";

/// 액세스 토큰 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID (ObjectId 16진수 문자열)
    pub sub: String,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 토큰을 생성하고 검증합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
        }
    }

    /// `JwtConfig`의 비밀키와 만료 시간으로 생성
    pub fn from_config() -> Self {
        Self::new(&JwtConfig::secret(), JwtConfig::expiration_hours())
    }

    /// 사용자를 위한 액세스 토큰 생성
    ///
    /// ```rust,ignore
    /// let access_token = token_service.issue(&user_id)?;
    /// ```
    pub fn issue(&self, user_id: &ObjectId) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.expiration_hours);

        let claims = TokenClaims {
            sub: user_id.to_hex(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 토큰 검증 후 사용자 ID 반환
    ///
    /// 만료, 서명 불일치, 형식 오류 모두 `AuthenticationError`로 처리됩니다.
    pub fn verify(&self, token: &str) -> Result<ObjectId, AppError> {
        let validation = Validation::new(Algorithm::HS256);

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        log::debug!("만료된 토큰");
                    }
                    _ => log::debug!("토큰 검증 실패: {}", e),
                }
                AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string())
            })?;

        ObjectId::parse_str(&claims.sub).map_err(|_| {
            log::debug!("토큰의 sub가 ObjectId 형식이 아닙니다");
            AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string())
        })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// `Authorization: Bearer {token}` 형식에서 토큰 부분만을 추출합니다.
    pub fn extract_bearer_token(auth_header: &str) -> Result<&str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string()))
    }
}
