pub mod download;
pub mod errors;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;
pub use errors::html_error_response;

pub use download::{csv_response, xlsx_response};
pub use html::{html_response, text_response};
pub use json::json_response;
