use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default)]
    pub timeout: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Headers sent with every request. Values may reference environment
    /// variables with ${VAR} syntax.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}
