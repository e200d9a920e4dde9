use std::fmt;

#[derive(Debug)]
pub enum FormPostError {
    Payload(String),
    InvalidHeader(String),
    InvalidUrl(String),
    #[allow(dead_code)]
    ConfigError(String),
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl fmt::Display for FormPostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormPostError::Payload(msg) => write!(f, "Payload error: {}", msg),
            FormPostError::InvalidHeader(msg) => write!(f, "Invalid header: {}", msg),
            FormPostError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            FormPostError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            FormPostError::NetworkError(e) => write!(f, "Network error: {}", e),
            FormPostError::IoError(e) => write!(f, "IO error: {}", e),
            FormPostError::JsonError(e) => write!(f, "JSON error: {}", e),
            FormPostError::YamlError(e) => write!(f, "YAML error: {}", e),
            FormPostError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FormPostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormPostError::NetworkError(e) => Some(e),
            FormPostError::IoError(e) => Some(e),
            FormPostError::JsonError(e) => Some(e),
            FormPostError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FormPostError {
    fn from(err: reqwest::Error) -> Self {
        FormPostError::NetworkError(err)
    }
}

impl From<std::io::Error> for FormPostError {
    fn from(err: std::io::Error) -> Self {
        FormPostError::IoError(err)
    }
}

impl From<serde_json::Error> for FormPostError {
    fn from(err: serde_json::Error) -> Self {
        FormPostError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for FormPostError {
    fn from(err: serde_yaml::Error) -> Self {
        FormPostError::YamlError(err)
    }
}

impl From<anyhow::Error> for FormPostError {
    fn from(err: anyhow::Error) -> Self {
        FormPostError::Other(err.to_string())
    }
}

impl From<String> for FormPostError {
    fn from(msg: String) -> Self {
        FormPostError::Other(msg)
    }
}

impl From<&str> for FormPostError {
    fn from(msg: &str) -> Self {
        FormPostError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FormPostError>;
