use clap::Parser;
use formpost::cli::Args;
use formpost::config::{expand_value, Config, FileConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_parse_endpoint_and_data() {
    let args = Args::try_parse_from([
        "fpost",
        "--via",
        "query",
        "-H",
        "X-One: 1",
        "-H",
        "X-Two: 2",
        "https://example.com/login",
        "username=john",
        "password=doe",
    ])
    .unwrap();

    assert_eq!(args.endpoint.as_deref(), Some("https://example.com/login"));
    assert_eq!(args.data, vec!["username=john", "password=doe"]);
    assert_eq!(args.via.as_deref(), Some("query"));
    assert_eq!(args.headers, vec!["X-One: 1", "X-Two: 2"]);
    assert!(!args.json);
}

#[test]
fn test_file_config_yaml_parsing() {
    let yaml = "
http:
  timeout: 5
  user_agent: probe/2.0
  headers:
    X-Token: abc
output:
  pretty: true
";
    let config: FileConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.http.timeout, Some(5));
    assert_eq!(config.http.user_agent.as_deref(), Some("probe/2.0"));
    assert_eq!(config.http.headers.get("X-Token").unwrap(), "abc");
    assert_eq!(config.output.pretty, Some(true));
    assert_eq!(config.output.verbose, None);
}

#[test]
fn test_file_config_json_parsing() {
    let json = r#"{"http": {"timeout": 8}, "output": {"verbose": true}}"#;
    let config: FileConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.http.timeout, Some(8));
    assert_eq!(config.output.verbose, Some(true));
}

#[test]
fn test_file_config_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fpost.yaml");
    fs::write(&path, "http:\n  timeout: 12\n").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let config: FileConfig = serde_yaml::from_str(&contents).unwrap();
    assert_eq!(config.http.timeout, Some(12));
}

#[test]
fn test_expand_value() {
    std::env::set_var("FPOST_TEST_TOKEN", "xyz");
    assert_eq!(expand_value("Bearer ${FPOST_TEST_TOKEN}"), "Bearer xyz");
    std::env::remove_var("FPOST_TEST_TOKEN");

    // Unset variables stay as written
    assert_eq!(
        expand_value("Bearer ${FPOST_TEST_UNSET_TOKEN}"),
        "Bearer ${FPOST_TEST_UNSET_TOKEN}"
    );
    assert_eq!(expand_value("no refs here"), "no refs here");
}

#[test]
fn test_timeout_layering() {
    // Default first, while FPOST_TIMEOUT is unset
    let args = Args::try_parse_from(["fpost", "https://example.com"]).unwrap();
    let config = Config::from_env_and_args(&args).unwrap();
    assert_eq!(config.timeout, 30);

    // Env var beats the default
    std::env::set_var("FPOST_TIMEOUT", "7");
    let config = Config::from_env_and_args(&args).unwrap();
    assert_eq!(config.timeout, 7);

    // CLI arg beats the env var
    let args =
        Args::try_parse_from(["fpost", "--timeout", "9", "https://example.com"]).unwrap();
    let config = Config::from_env_and_args(&args).unwrap();
    assert_eq!(config.timeout, 9);
    std::env::remove_var("FPOST_TIMEOUT");
}

#[test]
fn test_timeout_zero_rejected() {
    let args = Args::try_parse_from(["fpost", "--timeout", "0", "https://example.com"]).unwrap();
    let err = Config::from_env_and_args(&args).unwrap_err();
    assert!(err.contains("timeout"));
}

#[test]
fn test_output_flags_from_env() {
    std::env::set_var("FPOST_VERBOSE", "yes");
    std::env::set_var("FPOST_PRETTY", "1");

    let args = Args::try_parse_from(["fpost", "https://example.com"]).unwrap();
    let config = Config::from_env_and_args(&args).unwrap();
    assert!(config.verbose);
    assert!(config.pretty);

    std::env::remove_var("FPOST_VERBOSE");
    std::env::remove_var("FPOST_PRETTY");
}

#[test]
fn test_user_agent_default() {
    let args = Args::try_parse_from(["fpost", "https://example.com"]).unwrap();
    let config = Config::from_env_and_args(&args).unwrap();
    assert!(config.user_agent.starts_with("fpost/"));
}

#[test]
fn test_config_paths_check_local_dotfiles_first() {
    let paths = FileConfig::get_config_paths();

    assert_eq!(paths[0].to_str(), Some(".fpost.yaml"));
    assert_eq!(paths[1].to_str(), Some(".fpost.yml"));
    assert_eq!(paths[2].to_str(), Some(".fpost.json"));
}
