use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbose: Option<bool>,
    #[serde(default)]
    pub pretty: Option<bool>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: None,
            pretty: None,
        }
    }
}
