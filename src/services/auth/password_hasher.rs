//! bcrypt 기반 비밀번호 해싱

use crate::config::PasswordConfig;
use crate::errors::errors::{AppError, ErrorContext};

/// 비밀번호 해시 생성/검증기
///
/// cost는 환경별로 다르며 (`PasswordConfig::bcrypt_cost`), 해시 문자열에
/// cost와 솔트가 함께 저장되므로 검증 시에는 cost가 필요하지 않습니다.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn hash(&self, plain: &str) -> Result<String, AppError> {
        let hash_start = std::time::Instant::now();
        let digest = bcrypt::hash(plain, self.cost).context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(digest)
    }

    pub fn verify(&self, plain: &str, digest: &str) -> Result<bool, AppError> {
        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(plain, digest).context("비밀번호 검증 실패")?;

        log::debug!("Password verification took: {:?}", verify_start.elapsed());
        Ok(is_valid)
    }
}
