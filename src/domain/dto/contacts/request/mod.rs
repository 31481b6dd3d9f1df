pub mod create_contact_request;
pub mod list_contacts_query;

pub use create_contact_request::CreateContactRequest;
pub use list_contacts_query::ListContactsQuery;
