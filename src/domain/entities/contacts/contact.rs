//! Contact Entity Implementation
//!
//! 사용자 한 명이 소유하는 연락처 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 연락처 엔티티
///
/// `contacts` 컬렉션에 저장되며, 항상 정확히 한 명의 소유자(`user_id`)를 가집니다.
/// 소유자 외의 사용자에게는 조회되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// 소유자 ID
    pub user_id: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
}

impl Contact {
    pub fn new(
        user_id: ObjectId,
        name: String,
        phone: String,
        email: Option<String>,
        address: Option<String>,
        country: Option<String>,
    ) -> Self {
        Self {
            id: None,
            name,
            phone,
            email,
            address,
            country,
            user_id,
            created_at: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 주어진 사용자가 이 연락처의 소유자인지 확인
    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_optional_fields_are_omitted_from_document() {
        let contact = Contact::new(ObjectId::new(), "Bob".into(), "123".into(), None, None, None);
        let document = bson::to_document(&contact).unwrap();

        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("email"));
        assert!(document.contains_key("user_id"));
    }

    #[test]
    fn test_is_owned_by() {
        let owner = ObjectId::new();
        let contact = Contact::new(owner, "Bob".into(), "123".into(), None, None, None);

        assert!(contact.is_owned_by(&owner));
        assert!(!contact.is_owned_by(&ObjectId::new()));
    }
}
