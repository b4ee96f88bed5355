pub mod errors;
pub mod html;
pub mod json;

pub use errors::{json_error_response, ResultResp};

pub use html::{css_response, html_response};
pub use json::json_response;
