use anyhow::Result;

use super::build;
use crate::configuration::ConfigKey;

#[test]
fn it_builds_a_valid_command() {
    build().debug_assert();
}

#[test]
fn it_parses_interview_flags() -> Result<()> {
    let matches = build().try_get_matches_from(vec![
        "interview-buddy",
        "interview",
        "--model",
        "gpt-4",
        "--timeout",
        "2500",
        "--openai-token",
        "sk-test",
    ])?;

    let (name, subcmd_matches) = matches.subcommand().unwrap();
    assert_eq!(name, "interview");
    assert_eq!(
        subcmd_matches.get_one::<String>(&ConfigKey::Model.to_string()),
        Some(&"gpt-4".to_string())
    );
    assert_eq!(
        subcmd_matches.get_one::<String>(&ConfigKey::Timeout.to_string()),
        Some(&"2500".to_string())
    );
    assert_eq!(
        subcmd_matches.get_one::<String>(&ConfigKey::OpenAiToken.to_string()),
        Some(&"sk-test".to_string())
    );

    return Ok(());
}

#[test]
fn it_requires_a_shell_for_completions() {
    let res = build().try_get_matches_from(vec!["interview-buddy", "completions"]);
    assert!(res.is_err());
}
