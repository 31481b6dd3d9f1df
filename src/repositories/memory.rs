//! # 메모리 기반 리포지토리
//!
//! 데이터베이스 없이 서비스와 HTTP 흐름을 검증하기 위한 구현체입니다.
//! MongoDB 구현과 같은 규칙을 따릅니다.
//!
//! - 이메일 유니크 제약 (`ConflictError("Email already registered")`)
//! - 소유자 조건 + 대소문자 무시 부분 일치 필터
//! - id 순서는 삽입 순서와 같으며, 정렬이 없으면 삽입 순서를 유지

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::contacts::contact::Contact;
use crate::domain::entities::users::user::User;
use crate::domain::models::query::{ContactField, ContactQuery, ContactSortOrder, Page};
use crate::errors::errors::AppError;
use crate::repositories::contacts::ContactRepository;
use crate::repositories::users::user_repo::{UserRepository, EMAIL_ALREADY_REGISTERED};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, AppError> {
    mutex
        .lock()
        .map_err(|e| AppError::InternalError(format!("저장소 잠금 실패: {}", e)))
}

/// 메모리 기반 사용자 리포지토리
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = lock(&self.users)?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        let users = lock(&self.users)?;
        Ok(users.iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = lock(&self.users)?;

        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError(EMAIL_ALREADY_REGISTERED.to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }
}

/// 메모리 기반 연락처 리포지토리
#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: Mutex<Vec<Contact>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn field_value(contact: &Contact, field: ContactField) -> Option<&str> {
    match field {
        ContactField::Name => Some(contact.name.as_str()),
        ContactField::Email => contact.email.as_deref(),
        ContactField::Phone => Some(contact.phone.as_str()),
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, mut contact: Contact) -> Result<Contact, AppError> {
        let mut contacts = lock(&self.contacts)?;

        contact.id = Some(ObjectId::new());
        contacts.push(contact.clone());

        Ok(contact)
    }

    async fn find_page(&self, query: &ContactQuery) -> Result<Page<Contact>, AppError> {
        let contacts = lock(&self.contacts)?;

        // (삽입 순서, 연락처) - 삽입 순서가 곧 id 순서
        let mut matched: Vec<(usize, &Contact)> = contacts
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_owned_by(&query.owner_id))
            .filter(|(_, c)| {
                query
                    .filters
                    .iter()
                    .all(|f| f.matches(field_value(c, f.field)))
            })
            .collect();

        match query.sort {
            Some(ContactSortOrder::Latest) => matched.sort_by(|a, b| b.0.cmp(&a.0)),
            Some(ContactSortOrder::Oldest) => matched.sort_by(|a, b| a.0.cmp(&b.0)),
            Some(ContactSortOrder::AlphabeticalAsc) => {
                matched.sort_by(|a, b| a.1.name.cmp(&b.1.name).then(a.0.cmp(&b.0)))
            }
            Some(ContactSortOrder::AlphabeticalDesc) => {
                matched.sort_by(|a, b| b.1.name.cmp(&a.1.name).then(b.0.cmp(&a.0)))
            }
            None => {}
        }

        let total = matched.len() as u64;
        let skip = query
            .window
            .skip()
            .and_then(|skip| usize::try_from(skip).ok())
            .unwrap_or(usize::MAX);
        let take = usize::try_from(query.window.per_page).unwrap_or(usize::MAX);

        let items = matched
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|(_, c)| c.clone())
            .collect();

        Ok(Page {
            items,
            page: query.window.page,
            per_page: query.window.per_page,
            total,
        })
    }
}
