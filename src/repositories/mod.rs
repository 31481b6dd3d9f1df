//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 trait로 정의되며, 서비스는 `Arc<dyn ...>`로 주입받습니다.
//! 운영 환경에서는 MongoDB 구현체를, 테스트에서는 메모리 구현체를 사용합니다.
//!
//! ```rust,ignore
//! let database = Database::new().await?;
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//!
//! let user = user_repo.find_by_email("ann@x.com").await?;
//! ```

pub mod users;
pub mod contacts;
pub mod memory;

pub use users::{MongoUserRepository, UserRepository};
pub use contacts::{ContactRepository, MongoContactRepository};
pub use memory::{InMemoryContactRepository, InMemoryUserRepository};

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};

/// MongoDB 중복 키 에러 코드
pub(crate) const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반 여부 확인
pub(crate) fn is_duplicate_key_error(error: &MongoError) -> bool {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}
