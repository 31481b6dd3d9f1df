//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: `email_unique` 인덱스로 동시 가입 시에도 이메일 중복 방지
//! - **중복 키 매핑**: MongoDB 11000 에러를 `ConflictError`로 변환
//! - **생성 전용**: 사용자는 가입 이후 수정/삭제되지 않음

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;
use crate::repositories::is_duplicate_key_error;

pub const USERS_COLLECTION: &str = "users";
pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";

/// 사용자 저장소 추상화
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 이메일 주소로 사용자 조회 (이메일은 이미 소문자로 정규화된 값)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    /// 새 사용자 저장
    ///
    /// 이메일이 이미 존재하면 `ConflictError("Email already registered")`를 반환합니다.
    async fn create(&self, user: User) -> Result<User, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// - **컬렉션명**: `users`
/// - **인덱스**: `email` (unique, `email_unique`)
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(USERS_COLLECTION),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    /// 이미 중복 이메일이 저장되어 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("📇 users 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                AppError::ConflictError(EMAIL_ALREADY_REGISTERED.to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 사용자 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }
}
