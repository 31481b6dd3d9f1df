use serde::{Deserialize, Serialize};

/// 연락처 목록 조회 쿼리 파라미터
///
/// `GET /contact?page=2&limit=10&sort_by=latest&name=bo`
///
/// 모든 값은 원본 문자열로 받고, 숫자 변환과 검증은
/// `ContactQueryBuilder`에서 수행합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListContactsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
