pub mod contact_query;
pub mod page;

pub use contact_query::{ContactField, ContactQuery, ContactSortOrder, ContainsFilter, PageWindow};
pub use page::Page;
