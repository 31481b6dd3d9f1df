use serde::{Deserialize, Serialize};

use crate::domain::entities::contacts::contact::Contact;
use crate::domain::models::query::Page;

/// 연락처 응답 DTO
///
/// 선택 필드는 값이 없으면 `null`로 직렬화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: Option<String>,
    pub country: Option<String>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        let Contact {
            id,
            name,
            phone,
            email,
            address,
            country,
            ..
        } = contact;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            phone,
            address,
            country,
        }
    }
}

/// 연락처 목록 응답 DTO (페이지네이션 메타데이터 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactListResponse {
    pub list: Vec<ContactResponse>,
    pub has_next: bool,
    pub has_prev: bool,
    pub page: u64,
    pub pages: u64,
    pub per_page: u64,
    pub total: u64,
}

impl From<Page<Contact>> for ContactListResponse {
    fn from(page: Page<Contact>) -> Self {
        Self {
            has_next: page.has_next(),
            has_prev: page.has_prev(),
            page: page.page,
            pages: page.pages(),
            per_page: page.per_page,
            total: page.total,
            list: page.items.into_iter().map(ContactResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_list_response_metadata() {
        let owner = ObjectId::new();
        let items = (0..5)
            .map(|i| Contact::new(owner, format!("C{i}"), "123".into(), None, None, None))
            .collect();
        let page = Page { items, page: 2, per_page: 10, total: 15 };

        let response = ContactListResponse::from(page);

        assert_eq!(response.list.len(), 5);
        assert_eq!(response.pages, 2);
        assert!(!response.has_next);
        assert!(response.has_prev);
        assert_eq!(response.total, 15);
    }

    #[test]
    fn test_missing_optional_fields_serialize_as_null() {
        let contact = Contact::new(ObjectId::new(), "Bob".into(), "123".into(), None, None, None);
        let json = serde_json::to_value(ContactResponse::from(contact)).unwrap();

        assert!(json["email"].is_null());
        assert!(json["country"].is_null());
        assert_eq!(json["phone"], "123");
    }
}
