//! Integration tests for configuration file loading.

use std::io::Write;

use anyhow::Result;
use blocrank_infra::config::{load_from_file, ConfigError};
use tempfile::NamedTempFile;

fn temp_config(extension: &str, contents: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(extension).tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn loads_json_config_from_disk() -> Result<()> {
    let file = temp_config(
        ".json",
        r#"{"base_url": "https://api.blocrank.example/", "timeout_secs": 10}"#,
    )?;

    let config = load_from_file(Some(file.path().to_path_buf()))?;

    assert_eq!(config.base_url, "https://api.blocrank.example");
    assert_eq!(config.timeout_secs, 10);
    Ok(())
}

#[test]
fn loads_toml_config_from_disk() -> Result<()> {
    let file = temp_config(
        ".toml",
        "base_url = \"http://localhost:8000\"\nsession_path = \"/tmp/s.json\"\n",
    )?;

    let config = load_from_file(Some(file.path().to_path_buf()))?;

    assert_eq!(config.base_url, "http://localhost:8000");
    assert_eq!(config.session_path, std::path::PathBuf::from("/tmp/s.json"));
    Ok(())
}

#[test]
fn missing_explicit_path_is_not_found() {
    let result = load_from_file(Some("/nonexistent/blocrank.json".into()));
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
fn invalid_base_url_in_file_is_rejected() -> Result<()> {
    let file = temp_config(".json", r#"{"base_url": "not a url"}"#)?;

    let result = load_from_file(Some(file.path().to_path_buf()));

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
    Ok(())
}
