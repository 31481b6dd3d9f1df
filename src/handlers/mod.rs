//! HTTP 요청 핸들러 모듈
//!
//! 핸들러는 요청을 추출하고 서비스를 호출한 뒤, 결과를
//! `{ "message": ..., "data": ... }` 봉투로 감싸는 일만 합니다.
//! 에러는 `AppError`의 `ResponseError` 구현이 같은 봉투로 변환합니다.
//!
//! - [`users`] - 회원가입, 로그인, 현재 사용자
//! - [`contacts`] - 연락처 생성과 목록

pub mod users;
pub mod contacts;
