//! # 연락처 조회 조건 빌더
//!
//! 목록 조회 쿼리 파라미터(원본 문자열)를 검증하여 [`ContactQuery`]를 만듭니다.
//!
//! | 파라미터 | 기본값 | 규칙 |
//! |----------|--------|------|
//! | `page` | 1 | 양의 정수 |
//! | `limit` | 10 | 양의 정수 |
//! | `sort_by` | `latest` | 알 수 없는 값이면 정렬 없음 |
//! | `name`, `email`, `phone` | - | 공백 제거 후 비어있으면 무시 |
//!
//! 빈 문자열 파라미터(`?page=`)는 생략된 것으로 처리합니다.

use mongodb::bson::oid::ObjectId;

use crate::domain::dto::contacts::request::ListContactsQuery;
use crate::domain::models::query::{
    ContactField, ContactQuery, ContactSortOrder, ContainsFilter, PageWindow,
};
use crate::errors::errors::{AppError, AppResult};
use crate::utils::string_utils::clean_optional_string;

pub const INVALID_PAGE_MESSAGE: &str = "Page must be a positive integer";
pub const INVALID_LIMIT_MESSAGE: &str = "Limit must be a positive integer";

/// 목록 조회 조건 빌더
pub struct ContactQueryBuilder;

impl ContactQueryBuilder {
    /// 쿼리 파라미터로부터 조회 조건 생성
    ///
    /// 소유자 조건은 항상 포함됩니다.
    pub fn build(owner_id: ObjectId, params: &ListContactsQuery) -> AppResult<ContactQuery> {
        let page = Self::parse_page(params.page.as_deref())?;
        let per_page = Self::parse_limit(params.limit.as_deref())?;
        let sort = Self::parse_sort(params.sort_by.as_deref());

        let filters = [
            (ContactField::Name, &params.name),
            (ContactField::Email, &params.email),
            (ContactField::Phone, &params.phone),
        ]
        .into_iter()
        .filter_map(|(field, raw)| {
            clean_optional_string(raw.clone()).map(|needle| ContainsFilter::new(field, needle))
        })
        .collect();

        Ok(ContactQuery {
            owner_id,
            filters,
            sort,
            window: PageWindow::new(page, per_page),
        })
    }

    /// `page` 파싱 (기본값 1)
    pub fn parse_page(raw: Option<&str>) -> AppResult<u64> {
        parse_positive(raw, PageWindow::DEFAULT_PAGE, INVALID_PAGE_MESSAGE)
    }

    /// `limit` 파싱 (기본값 10)
    pub fn parse_limit(raw: Option<&str>) -> AppResult<u64> {
        parse_positive(raw, PageWindow::DEFAULT_PER_PAGE, INVALID_LIMIT_MESSAGE)
    }

    /// `sort_by` 파싱 (기본값 `latest`)
    ///
    /// 알 수 없는 값은 에러 없이 `None`(정렬 없음)이 됩니다.
    pub fn parse_sort(raw: Option<&str>) -> Option<ContactSortOrder> {
        let key = raw
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(ContactSortOrder::DEFAULT_KEY);

        let sort = ContactSortOrder::parse(key);
        if sort.is_none() {
            log::debug!("알 수 없는 sort_by 값 '{}', 정렬 없이 조회합니다", key);
        }
        sort
    }
}

fn parse_positive(raw: Option<&str>, default: u64, message: &str) -> AppResult<u64> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .parse::<u64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| AppError::ValidationError(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListContactsQuery {
        let mut query = ListContactsQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "page" => query.page = value,
                "limit" => query.limit = value,
                "sort_by" => query.sort_by = value,
                "name" => query.name = value,
                "email" => query.email = value,
                "phone" => query.phone = value,
                other => panic!("unknown key {other}"),
            }
        }
        query
    }

    fn validation_message(result: AppResult<ContactQuery>) -> String {
        match result {
            Err(AppError::ValidationError(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let owner = ObjectId::new();
        let query = ContactQueryBuilder::build(owner, &ListContactsQuery::default()).unwrap();

        assert_eq!(query, ContactQuery::for_owner(owner));
    }

    #[test]
    fn test_explicit_window_and_sort() {
        let query = ContactQueryBuilder::build(
            ObjectId::new(),
            &params(&[("page", "2"), ("limit", "10"), ("sort_by", "alphabetically_z_to_a")]),
        )
        .unwrap();

        assert_eq!(query.window, PageWindow::new(2, 10));
        assert_eq!(query.sort, Some(ContactSortOrder::AlphabeticalDesc));
    }

    #[test]
    fn test_unknown_sort_means_no_ordering() {
        let query =
            ContactQueryBuilder::build(ObjectId::new(), &params(&[("sort_by", "random")])).unwrap();

        assert_eq!(query.sort, None);
    }

    #[test]
    fn test_filters_trimmed_and_blank_ignored() {
        let query = ContactQueryBuilder::build(
            ObjectId::new(),
            &params(&[("name", "  bo "), ("email", "   "), ("phone", "555")]),
        )
        .unwrap();

        assert_eq!(
            query.filters,
            vec![
                ContainsFilter::new(ContactField::Name, "bo"),
                ContainsFilter::new(ContactField::Phone, "555"),
            ]
        );
    }

    #[test]
    fn test_invalid_page() {
        for raw in ["0", "-1", "abc", "1.5"] {
            let result = ContactQueryBuilder::build(ObjectId::new(), &params(&[("page", raw)]));
            assert_eq!(validation_message(result), INVALID_PAGE_MESSAGE, "page={raw}");
        }
    }

    #[test]
    fn test_invalid_limit() {
        for raw in ["0", "ten"] {
            let result = ContactQueryBuilder::build(ObjectId::new(), &params(&[("limit", raw)]));
            assert_eq!(validation_message(result), INVALID_LIMIT_MESSAGE, "limit={raw}");
        }

    }

    #[test]
    fn test_large_limit_is_accepted() {
        let query =
            ContactQueryBuilder::build(ObjectId::new(), &params(&[("limit", "200")])).unwrap();

        assert_eq!(query.window, PageWindow::new(1, 200));
    }

    #[test]
    fn test_huge_page_is_accepted() {
        let query = ContactQueryBuilder::build(
            ObjectId::new(),
            &params(&[("page", "18446744073709551615")]),
        )
        .unwrap();

        assert_eq!(query.window.page, u64::MAX);
        assert_eq!(query.window.skip(), None);
    }

    #[test]
    fn test_empty_page_uses_default() {
        assert_eq!(ContactQueryBuilder::parse_page(Some("")).unwrap(), 1);
        assert_eq!(ContactQueryBuilder::parse_limit(Some(" ")).unwrap(), 10);
    }
}
