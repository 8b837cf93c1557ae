//! Custom extractors mapping axum rejections onto the error envelope.

mod json;
mod path_id;
mod query;

pub use json::AppJson;
pub use path_id::parse_id;
pub use query::AppQuery;
