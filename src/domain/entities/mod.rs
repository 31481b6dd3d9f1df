pub mod users;
pub mod contacts;

pub use users::User;
pub use contacts::Contact;
