mod defaults;
mod http;
mod output;
mod validation;

use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

pub use defaults::{default_timeout, default_user_agent};
pub use http::HttpConfig;
pub use output::OutputConfig;
pub use validation::{expand_header_values, expand_value};

/// Resolved settings for one invocation.
#[derive(Debug)]
pub struct Config {
    pub timeout: u64,
    pub user_agent: String,
    pub verbose: bool,
    pub pretty: bool,
    /// Headers from the config file, env-expanded, sent with every request.
    pub default_headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self, String> {
        let file_config = FileConfig::load().unwrap_or_default();

        // Timeout: CLI args > env var > file config > default
        let timeout = args
            .timeout
            .or_else(|| {
                env::var("FPOST_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
            })
            .or(file_config.http.timeout)
            .unwrap_or_else(default_timeout);

        if timeout == 0 {
            return Err("timeout must be at least 1 second".to_string());
        }

        // User agent: CLI args > env var > file config > default
        let user_agent = args
            .user_agent
            .clone()
            .or_else(|| env::var("FPOST_USER_AGENT").ok())
            .or(file_config.http.user_agent.clone())
            .unwrap_or_else(default_user_agent);

        // Verbose: CLI flag > env var > file config > default
        let verbose = args.verbose
            || env::var("FPOST_VERBOSE")
                .ok()
                .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
                .or(file_config.output.verbose)
                .unwrap_or(false);

        // Pretty: CLI flag > env var > file config > default
        let pretty = args.pretty
            || env::var("FPOST_PRETTY")
                .ok()
                .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
                .or(file_config.output.pretty)
                .unwrap_or(false);

        let default_headers = expand_header_values(&file_config.http.headers);

        Ok(Config {
            timeout,
            user_agent,
            verbose,
            pretty,
            default_headers,
        })
    }
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists() {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

                let config: FileConfig = if matches!(
                    path.extension().and_then(|s| s.to_str()),
                    Some("yaml") | Some("yml")
                ) {
                    serde_yaml::from_str(&contents).with_context(|| {
                        format!("Failed to parse YAML config file: {}", path.display())
                    })?
                } else {
                    serde_json::from_str(&contents).with_context(|| {
                        format!("Failed to parse JSON config file: {}", path.display())
                    })?
                };

                return Ok(config);
            }
        }

        Ok(FileConfig::default())
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory (highest priority - local override)
        paths.push(PathBuf::from(".fpost.yaml"));
        paths.push(PathBuf::from(".fpost.yml"));
        paths.push(PathBuf::from(".fpost.json"));

        // 2. User's config directory (global config)
        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("fpost");
            paths.push(config_dir.join("fpost.yaml"));
            paths.push(config_dir.join("fpost.yml"));
            paths.push(config_dir.join("fpost.json"));
        }

        paths
    }

    /// Write a commented example config to ./.fpost.yaml, refusing to
    /// overwrite an existing file.
    pub fn write_example() -> Result<PathBuf> {
        let path = PathBuf::from(".fpost.yaml");
        if path.exists() {
            anyhow::bail!("config file already exists: {}", path.display());
        }

        let example = "\
# fpost configuration
http:
  timeout: 30
  # user_agent: my-tool/1.0
  # Sent with every request; values may reference env vars with ${VAR}.
  headers: {}
  #   Authorization: Bearer ${API_TOKEN}
output:
  verbose: false
  pretty: false
";
        fs::write(&path, example)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }
}
