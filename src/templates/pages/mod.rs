pub mod form;
pub mod property;

pub use form::form_page;
pub use property::property_page;
