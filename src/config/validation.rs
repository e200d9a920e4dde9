use std::collections::HashMap;
use std::env;

/// Expand ${VAR_NAME} references in a config value. Unset variables are left
/// as written so the failure is visible in the outgoing request.
pub fn expand_value(raw: &str) -> String {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();
    re.replace_all(raw, |caps: &regex::Captures| {
        env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    })
    .into_owned()
}

/// Expand environment references in every configured header value.
pub fn expand_header_values(headers: &HashMap<String, String>) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| (name.clone(), expand_value(value)))
        .collect()
}
