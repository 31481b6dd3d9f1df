pub mod contact_response;

pub use contact_response::{ContactListResponse, ContactResponse};
