use crate::error::{FormPostError, Result};
use reqwest::Url;

/// Append payload pairs to the endpoint's query string.
///
/// The endpoint must parse as an absolute URL. Query parameters already
/// present on it survive; an empty payload leaves the URL untouched.
pub fn build_query_url(endpoint: &str, pairs: &[(String, String)]) -> Result<Url> {
    if pairs.is_empty() {
        return Url::parse(endpoint)
            .map_err(|e| FormPostError::InvalidUrl(format!("{}: {}", endpoint, e)));
    }

    Url::parse_with_params(endpoint, pairs)
        .map_err(|e| FormPostError::InvalidUrl(format!("{}: {}", endpoint, e)))
}
