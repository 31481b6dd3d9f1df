//! # 연락처 리포지토리 구현
//!
//! `ContactQuery`를 MongoDB 필터/정렬 문서로 변환하여 페이지 단위로 조회합니다.
//!
//! ## 조회 문서 예시
//!
//! ```text
//! filter: { user_id: ObjectId(..), name: { $regex: "bo", $options: "i" } }
//! sort:   { _id: -1 }                       // latest
//! skip:   (page - 1) * per_page
//! limit:  per_page
//! ```

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::contacts::contact::Contact;
use crate::domain::models::query::{ContactQuery, ContactSortOrder, Page, PageWindow};
use crate::errors::errors::AppError;

pub const CONTACTS_COLLECTION: &str = "contacts";

/// 연락처 저장소 추상화
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// 새 연락처 저장
    async fn create(&self, contact: Contact) -> Result<Contact, AppError>;

    /// 조건에 맞는 연락처 한 페이지와 전체 개수 조회
    async fn find_page(&self, query: &ContactQuery) -> Result<Page<Contact>, AppError>;
}

/// 조회 조건을 MongoDB 필터 문서로 변환
///
/// 소유자 조건은 항상 포함되며, 필터 값은 정규식 메타문자를 이스케이프하여
/// 대소문자 무시 부분 일치로 사용합니다.
pub fn filter_document(query: &ContactQuery) -> Document {
    let mut filter = doc! { "user_id": query.owner_id };

    for contains in &query.filters {
        filter.insert(
            contains.field.as_str(),
            doc! {
                "$regex": regex::escape(&contains.needle),
                "$options": "i",
            },
        );
    }

    filter
}

/// 정렬 순서를 MongoDB 정렬 문서로 변환 (`None`이면 자연 순서)
///
/// 이름 정렬은 동명이인 사이의 순서를 고정하기 위해 `_id`를 보조 키로 사용합니다.
pub fn sort_document(sort: Option<ContactSortOrder>) -> Option<Document> {
    sort.map(|order| match order {
        ContactSortOrder::Latest => doc! { "_id": -1 },
        ContactSortOrder::Oldest => doc! { "_id": 1 },
        ContactSortOrder::AlphabeticalAsc => doc! { "name": 1, "_id": 1 },
        ContactSortOrder::AlphabeticalDesc => doc! { "name": -1, "_id": -1 },
    })
}

/// 페이지 범위를 MongoDB `skip`/`limit` 값으로 변환
///
/// 드라이버는 두 값을 i64로 전송합니다. offset이 그 범위를 넘으면 `None`(빈 페이지)이고,
/// i64 범위를 넘는 limit은 "전부"와 같으므로 `i64::MAX`로 보냅니다.
pub fn page_bounds(window: &PageWindow) -> Option<(u64, i64)> {
    let skip = window.skip()?;
    let limit = i64::try_from(window.per_page).unwrap_or(i64::MAX);
    Some((skip, limit))
}

/// MongoDB 기반 연락처 리포지토리
///
/// - **컬렉션명**: `contacts`
/// - **인덱스**: `{ user_id: 1, _id: -1 }` (`user_id_1__id_-1`)
#[derive(Clone)]
pub struct MongoContactRepository {
    collection: Collection<Contact>,
}

impl MongoContactRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<Contact>(CONTACTS_COLLECTION),
        }
    }

    /// 소유자별 조회를 위한 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "_id": -1 })
            .options(
                IndexOptions::builder()
                    .name("user_id_1__id_-1".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(owner_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("📇 contacts 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    async fn create(&self, mut contact: Contact) -> Result<Contact, AppError> {
        let result = self
            .collection
            .insert_one(&contact)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 연락처 ID가 ObjectId가 아닙니다".to_string())
        })?;
        contact.id = Some(id);

        Ok(contact)
    }

    async fn find_page(&self, query: &ContactQuery) -> Result<Page<Contact>, AppError> {
        let filter = filter_document(query);
        let window = query.window;

        log::debug!(
            "연락처 조회 - filter: {}, sort: {:?}, skip: {:?}, limit: {}",
            filter,
            query.sort.map(|s| s.as_str()),
            window.skip(),
            window.per_page
        );

        let total = self
            .collection
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let Some((skip, limit)) = page_bounds(&window) else {
            log::debug!("요청한 페이지가 저장소 offset 범위를 넘어 빈 페이지를 반환합니다");
            return Ok(Page {
                items: Vec::new(),
                page: window.page,
                per_page: window.per_page,
                total,
            });
        };

        let mut find = self.collection.find(filter).skip(skip).limit(limit);

        if let Some(sort) = sort_document(query.sort) {
            find = find.sort(sort);
        }

        let items: Vec<Contact> = find
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(Page {
            items,
            page: window.page,
            per_page: window.per_page,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::query::{ContactField, ContainsFilter};
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_filter_always_scoped_to_owner() {
        let owner = ObjectId::new();
        let filter = filter_document(&ContactQuery::for_owner(owner));

        assert_eq!(filter, doc! { "user_id": owner });
    }

    #[test]
    fn test_filter_escapes_regex_metacharacters() {
        let owner = ObjectId::new();
        let mut query = ContactQuery::for_owner(owner);
        query.filters = vec![
            ContainsFilter::new(ContactField::Name, "bo"),
            ContainsFilter::new(ContactField::Phone, "+1.5"),
        ];

        let filter = filter_document(&query);

        assert_eq!(filter.get_object_id("user_id").unwrap(), owner);
        assert_eq!(
            filter.get_document("name").unwrap(),
            &doc! { "$regex": "bo", "$options": "i" }
        );
        assert_eq!(
            filter.get_document("phone").unwrap(),
            &doc! { "$regex": r"\+1\.5", "$options": "i" }
        );
        assert!(!filter.contains_key("email"));
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(&PageWindow::new(2, 10)), Some((10, 10)));
        assert_eq!(page_bounds(&PageWindow::new(1, 200)), Some((0, 200)));
        assert_eq!(page_bounds(&PageWindow::new(1, u64::MAX)), Some((0, i64::MAX)));
    }

    #[test]
    fn test_page_bounds_out_of_offset_range() {
        assert_eq!(page_bounds(&PageWindow::new(u64::MAX, 10)), None);
        assert_eq!(page_bounds(&PageWindow::new(u64::MAX, 1)), None);
    }

    #[test]
    fn test_sort_documents() {
        assert_eq!(sort_document(Some(ContactSortOrder::Latest)), Some(doc! { "_id": -1 }));
        assert_eq!(sort_document(Some(ContactSortOrder::Oldest)), Some(doc! { "_id": 1 }));
        assert_eq!(
            sort_document(Some(ContactSortOrder::AlphabeticalAsc)),
            Some(doc! { "name": 1, "_id": 1 })
        );
        assert_eq!(
            sort_document(Some(ContactSortOrder::AlphabeticalDesc)),
            Some(doc! { "name": -1, "_id": -1 })
        );
        assert_eq!(sort_document(None), None);
    }
}
