use std::time::Duration;

use anyhow::Result;

use super::parse_timeout;
use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let doc = res.parse::<toml_edit::Document>().unwrap();

    assert_eq!(doc["model"].as_str(), Some("gpt-3.5-turbo"));
    assert_eq!(doc["openai-url"].as_str(), Some("https://api.openai.com"));
    assert_eq!(doc["temperature"].as_integer(), Some(0));
    assert_eq!(doc["timeout"].as_integer(), Some(60000));
    assert!(doc.get("openai-token").is_none());
    assert!(doc.get("config-file").is_none());
    assert!(res.contains("# openai-token = \"\""));
}

#[test]
fn it_names_keys_in_kebab_case() {
    assert_eq!(ConfigKey::ConfigFile.to_string(), "config-file");
    assert_eq!(ConfigKey::OpenAiToken.to_string(), "openai-token");
    assert_eq!(ConfigKey::OpenAiURL.to_string(), "openai-url");
    assert_eq!(ConfigKey::Timeout.to_string(), "timeout");
}

#[test]
fn it_has_defaults() {
    assert_eq!(Config::default(ConfigKey::Model), "gpt-3.5-turbo");
    assert_eq!(Config::default(ConfigKey::Temperature), "0");
    assert_eq!(Config::default(ConfigKey::OpenAiToken), "");
    assert!(Config::default(ConfigKey::ConfigFile).ends_with("config.toml"));
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "interview-buddy",
        "-c",
        "./config.example.toml",
    ])?;
    Config::load(vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_prefers_flags_over_config_file_over_defaults() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "interview-buddy",
        "-c",
        "./test/override-config.toml",
        "interview",
        "--model",
        "flag-model",
    ])?;
    let (_, subcmd_matches) = matches.subcommand().unwrap();
    let values = Config::resolve(&[&matches, subcmd_matches]).await?;

    assert_eq!(values[&ConfigKey::Model], "flag-model");
    assert_eq!(values[&ConfigKey::Temperature], "1.5");
    assert_eq!(values[&ConfigKey::Username], "Ann");
    assert_eq!(values[&ConfigKey::Timeout], "60000");
    assert_eq!(values[&ConfigKey::OpenAiURL], "https://api.openai.com");

    return Ok(());
}

#[tokio::test]
async fn it_uses_config_file_without_flags() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "interview-buddy",
        "-c",
        "./test/override-config.toml",
    ])?;
    let values = Config::resolve(&[&matches]).await?;

    assert_eq!(values[&ConfigKey::Model], "file-model");
    assert_eq!(values[&ConfigKey::Username], "Ann");

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "interview-buddy",
        "-c",
        "./test/bad-config.toml",
    ])?;
    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}

#[tokio::test]
async fn it_fails_on_invalid_flag_values() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec![
        "interview-buddy",
        "-c",
        "./does-not-exist.toml",
        "--timeout",
        "soon",
    ])?;
    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}

#[test]
fn it_parses_timeout() {
    assert_eq!(parse_timeout("1500"), Some(Duration::from_millis(1500)));
    assert_eq!(parse_timeout("0"), None);
    assert_eq!(parse_timeout(""), None);
}
