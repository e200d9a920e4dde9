use crate::error::{FormPostError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// Convert payload pairs into request headers. Duplicate keys become
/// repeated headers.
pub fn payload_headers(pairs: &[(String, String)]) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    for (key, value) in pairs {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            FormPostError::InvalidHeader(format!("invalid header name '{}': {}", key, e))
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            FormPostError::InvalidHeader(format!("invalid value for header '{}': {}", key, e))
        })?;
        headers.append(name, value);
    }

    Ok(headers)
}

/// Parse a `-H 'Name: value'` argument, split on the first ':'.
pub fn parse_header_arg(raw: &str) -> Result<(HeaderName, HeaderValue)> {
    let (name, value) = raw.split_once(':').ok_or_else(|| {
        FormPostError::InvalidHeader(format!("missing ':' in header argument '{}'", raw))
    })?;

    let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|e| {
        FormPostError::InvalidHeader(format!("invalid header name '{}': {}", name.trim(), e))
    })?;
    let value = HeaderValue::from_str(value.trim()).map_err(|e| {
        FormPostError::InvalidHeader(format!("invalid value in header argument '{}': {}", raw, e))
    })?;

    Ok((name, value))
}

/// Build the default header map from configured name/value strings.
pub fn config_headers(configured: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    for (name, value) in configured {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            FormPostError::InvalidHeader(format!("invalid configured header '{}': {}", name, e))
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            FormPostError::InvalidHeader(format!("invalid value for configured header: {}", e))
        })?;
        headers.insert(name, value);
    }

    Ok(headers)
}
