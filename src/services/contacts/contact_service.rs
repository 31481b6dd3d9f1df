//! # 연락처 서비스
//!
//! 인증된 사용자의 연락처 생성과 목록 조회를 담당합니다.
//! 모든 연산은 요청 주체의 ID로 범위가 제한됩니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::contacts::request::{CreateContactRequest, ListContactsQuery};
use crate::domain::dto::contacts::response::{ContactListResponse, ContactResponse};
use crate::domain::entities::contacts::contact::Contact;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::contacts::ContactRepository;
use crate::services::contacts::contact_query_builder::ContactQueryBuilder;
use crate::utils::validation::OrderedValidate;

pub struct ContactService {
    contact_repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }

    /// 연락처 생성
    ///
    /// 검증 순서: 이름 → 전화번호 → (있으면) 이메일 형식
    pub async fn create(
        &self,
        owner_id: ObjectId,
        request: CreateContactRequest,
    ) -> AppResult<ContactResponse> {
        request.validate_in_order()?;

        let CreateContactRequest {
            name,
            phone,
            email,
            address,
            country,
        } = request;

        let (Some(name), Some(phone)) = (name, phone) else {
            return Err(AppError::InternalError(
                "검증을 통과한 연락처 요청에 필수 값이 없습니다".to_string(),
            ));
        };

        let contact = self
            .contact_repo
            .create(Contact::new(owner_id, name, phone, email, address, country))
            .await?;

        log::info!(
            "📇 연락처 생성 - 소유자: {}, 연락처 ID: {}",
            owner_id,
            contact.id_string().unwrap_or_default()
        );

        Ok(ContactResponse::from(contact))
    }

    /// 연락처 목록 조회 (필터, 정렬, 페이지네이션)
    pub async fn list(
        &self,
        owner_id: ObjectId,
        params: &ListContactsQuery,
    ) -> AppResult<ContactListResponse> {
        let query = ContactQueryBuilder::build(owner_id, params)?;
        let page = self.contact_repo.find_page(&query).await?;

        log::debug!(
            "연락처 목록 - 소유자: {}, page: {}/{}, total: {}",
            owner_id,
            page.page,
            page.pages(),
            page.total
        );

        Ok(ContactListResponse::from(page))
    }
}
