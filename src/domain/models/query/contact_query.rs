//! # 연락처 조회 조건
//!
//! 검증을 마친 목록 조회 조건을 저장소 독립적인 값으로 표현합니다.
//! MongoDB 저장소와 메모리 저장소가 같은 조건을 각자의 방식으로 해석합니다.
//!
//! - 소유자 조건(`owner_id`)은 항상 포함되며 생략할 수 없습니다.
//! - 필터는 모두 AND로 결합되는 대소문자 무시 "포함" 조건입니다.
//! - `sort`가 `None`이면 명시적 정렬 없이 저장소의 자연 순서를 따릅니다.

use mongodb::bson::oid::ObjectId;

/// 목록 정렬 순서
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSortOrder {
    /// 최신순 (id 내림차순)
    Latest,
    /// 오래된순 (id 오름차순)
    Oldest,
    /// 이름 오름차순
    AlphabeticalAsc,
    /// 이름 내림차순
    AlphabeticalDesc,
}

impl ContactSortOrder {
    pub const DEFAULT_KEY: &'static str = "latest";

    /// `sort_by` 파라미터 값을 정렬 순서로 변환
    ///
    /// 알 수 없는 값이면 `None`을 반환합니다.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "latest" => Some(Self::Latest),
            "oldest" => Some(Self::Oldest),
            "alphabetically_a_to_z" => Some(Self::AlphabeticalAsc),
            "alphabetically_z_to_a" => Some(Self::AlphabeticalDesc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::AlphabeticalAsc => "alphabetically_a_to_z",
            Self::AlphabeticalDesc => "alphabetically_z_to_a",
        }
    }
}

/// 필터 가능한 연락처 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

impl ContactField {
    /// 저장소 문서의 필드 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// 대소문자를 무시하는 부분 문자열 조건
///
/// `needle`은 사용자 입력 원문이며 정규식으로 해석되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsFilter {
    pub field: ContactField,
    pub needle: String,
}

impl ContainsFilter {
    pub fn new(field: ContactField, needle: impl Into<String>) -> Self {
        Self {
            field,
            needle: needle.into(),
        }
    }

    /// 값이 조건을 만족하는지 확인 (값이 없으면 불일치)
    pub fn matches(&self, value: Option<&str>) -> bool {
        value
            .map(|v| v.to_lowercase().contains(&self.needle.to_lowercase()))
            .unwrap_or(false)
    }
}

/// 페이지 범위 (1부터 시작)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub per_page: u64,
}

impl PageWindow {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_PER_PAGE: u64 = 10;

    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// 저장소가 표현할 수 있는 가장 큰 offset (MongoDB는 skip을 i64로 전송)
    pub const MAX_SKIP: u64 = i64::MAX as u64;

    /// 건너뛸 항목 수: `(page - 1) * per_page`
    ///
    /// 곱이 넘치거나 [`Self::MAX_SKIP`]보다 크면 `None`입니다.
    /// 그 페이지는 어떤 저장소에서도 항상 비어 있습니다.
    pub fn skip(&self) -> Option<u64> {
        self.page
            .saturating_sub(1)
            .checked_mul(self.per_page)
            .filter(|skip| *skip <= Self::MAX_SKIP)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_PER_PAGE)
    }
}

/// 연락처 목록 조회 조건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQuery {
    /// 소유자 ID (필수)
    pub owner_id: ObjectId,
    pub filters: Vec<ContainsFilter>,
    pub sort: Option<ContactSortOrder>,
    pub window: PageWindow,
}

impl ContactQuery {
    /// 필터 없이 최신순 첫 페이지를 조회하는 기본 조건
    pub fn for_owner(owner_id: ObjectId) -> Self {
        Self {
            owner_id,
            filters: Vec::new(),
            sort: Some(ContactSortOrder::Latest),
            window: PageWindow::default(),
        }
    }
}
