pub mod errors;
pub mod html;
pub mod json;

pub use errors::html_error_response;
pub use html::{html_response, html_response_with_status, text_response};
pub use json::json_response;
