//! 연락처 데이터 액세스 계층

pub mod contact_repo;

pub use contact_repo::{ContactRepository, MongoContactRepository};
