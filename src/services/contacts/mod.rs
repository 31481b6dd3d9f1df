//! 연락처 관련 서비스

pub mod contact_service;
pub mod contact_query_builder;

pub use contact_service::ContactService;
pub use contact_query_builder::ContactQueryBuilder;
