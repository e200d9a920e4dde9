pub mod client;
pub mod headers;
pub mod query;

pub use client::{build_client, get_with_query, post_form, post_json, post_with_header_payload};
pub use headers::{config_headers, parse_header_arg, payload_headers};
pub use query::build_query_url;
