//! Tests for config functionality.

use super::resolver::{validate_kiro_dir, validate_relative_path};
use crate::config::{
    AgentId, CliOptions, Lang, OsType, OverwritePolicy, RuntimeFacts, StoredConfig, resolve,
};
use crate::error::ScaffoldError;
use chrono::{TimeZone, Utc};
use tempfile::TempDir;

fn facts(platform: &str) -> RuntimeFacts {
    RuntimeFacts {
        platform: platform.to_string(),
        now: Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap(),
    }
}

fn resolve_cli(cli: CliOptions) -> crate::error::Result<crate::config::ResolvedConfig> {
    resolve(&cli, &StoredConfig::default(), &facts("linux"))
}

#[test]
fn test_defaults() {
    let config = resolve_cli(CliOptions::default()).unwrap();

    assert_eq!(config.agent, AgentId::ClaudeCode);
    assert_eq!(config.lang, Lang::En);
    assert_eq!(config.os, OsType::Auto);
    assert_eq!(config.resolved_os, OsType::Linux);
    assert_eq!(config.kiro_dir, ".kiro");
    assert_eq!(config.overwrite, OverwritePolicy::Prompt);
    assert_eq!(config.effective_overwrite, OverwritePolicy::Prompt);
    assert!(!config.backup_enabled);
    assert_eq!(config.backup_dir, "");
    assert!(!config.dry_run);
    assert_eq!(config.layout.agent_dir, ".claude");
    assert_eq!(config.layout.doc_file, "CLAUDE.md");
    assert_eq!(config.layout.commands_dir, ".claude/commands/kiro");
}

#[test]
fn test_cli_beats_stored_beats_default() {
    let stored = StoredConfig::from_json(r#"{"lang": "ja", "kiroDir": "docs/kiro"}"#).unwrap();
    let cli = CliOptions {
        lang: Some("zh-TW".to_string()),
        ..Default::default()
    };

    let config = resolve(&cli, &stored, &facts("linux")).unwrap();
    assert_eq!(config.lang, Lang::ZhTw);
    assert_eq!(config.kiro_dir, "docs/kiro");
    assert_eq!(config.agent, AgentId::ClaudeCode);
}

#[test]
fn test_effective_overwrite_truth_table() {
    for policy in OverwritePolicy::ALL {
        for yes in [false, true] {
            let config = resolve_cli(CliOptions {
                overwrite: Some(policy.as_str().to_string()),
                yes,
                ..Default::default()
            })
            .unwrap();

            let expected = if policy == OverwritePolicy::Prompt && yes {
                OverwritePolicy::Force
            } else {
                policy
            };
            assert_eq!(config.overwrite, policy);
            assert_eq!(config.effective_overwrite, expected, "{} yes={}", policy, yes);
        }
    }
}

#[test]
fn test_resolved_os_mapping() {
    let cases = [
        ("macos", OsType::Mac),
        ("darwin", OsType::Mac),
        ("windows", OsType::Windows),
        ("linux", OsType::Linux),
        ("freebsd", OsType::Linux),
        ("linux-container", OsType::Linux),
    ];

    for (platform, expected) in cases {
        let config = resolve(&CliOptions::default(), &StoredConfig::default(), &facts(platform))
            .unwrap();
        assert_eq!(config.resolved_os, expected, "platform {}", platform);
    }
}

#[test]
fn test_explicit_os_is_not_expanded() {
    let config = resolve(
        &CliOptions {
            os: Some("windows".to_string()),
            ..Default::default()
        },
        &StoredConfig::default(),
        &facts("macos"),
    )
    .unwrap();
    assert_eq!(config.os, OsType::Windows);
    assert_eq!(config.resolved_os, OsType::Windows);
}

#[test]
fn test_invalid_enum_values_are_configuration_errors() {
    let cases = [
        CliOptions {
            agent: Some("cursor".to_string()),
            ..Default::default()
        },
        CliOptions {
            lang: Some("fr".to_string()),
            ..Default::default()
        },
        CliOptions {
            os: Some("solaris".to_string()),
            ..Default::default()
        },
        CliOptions {
            overwrite: Some("merge".to_string()),
            ..Default::default()
        },
    ];

    for cli in cases {
        let err = resolve_cli(cli).unwrap_err();
        assert!(matches!(err, ScaffoldError::Configuration(_)), "{}", err);
        assert!(err.to_string().contains("expected one of"));
    }
}

#[test]
fn test_invalid_stored_value_is_reported() {
    let stored = StoredConfig::from_json(r#"{"overwrite": "always"}"#).unwrap();
    let err = resolve(&CliOptions::default(), &stored, &facts("linux")).unwrap_err();
    assert!(err.to_string().contains("invalid overwrite 'always'"));
}

#[test]
fn test_kiro_dir_validation() {
    let err = resolve_cli(CliOptions {
        kiro_dir: Some("../up".to_string()),
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, ScaffoldError::Configuration(_)));

    let config = resolve_cli(CliOptions {
        kiro_dir: Some("docs/kiro".to_string()),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(config.kiro_dir, "docs/kiro");
}

#[test]
fn test_validate_kiro_dir_rules() {
    assert!(validate_kiro_dir(".kiro").is_ok());
    assert!(validate_kiro_dir("docs/kiro-specs_v2").is_ok());
    assert!(validate_kiro_dir("./kiro").is_ok());

    assert!(validate_kiro_dir("").is_err());
    assert!(validate_kiro_dir("/abs/kiro").is_err());
    assert!(validate_kiro_dir("docs/../kiro").is_err());
    assert!(validate_kiro_dir("..").is_err());
    assert!(validate_kiro_dir("docs\\kiro").is_err());
    assert!(validate_kiro_dir("my kiro").is_err());
    assert!(validate_kiro_dir("kiro$").is_err());
}

#[test]
fn test_dots_inside_segment_are_not_traversal() {
    assert!(validate_kiro_dir("docs/..kiro").is_ok());
    assert!(validate_kiro_dir("kiro..").is_ok());
}

#[test]
fn test_agent_alias_flag() {
    let config = resolve_cli(CliOptions {
        agent_flags: vec![AgentId::QwenCode],
        ..Default::default()
    })
    .unwrap();
    assert_eq!(config.agent, AgentId::QwenCode);
    assert_eq!(config.layout.doc_file, "QWEN.md");
}

#[test]
fn test_agent_alias_agreeing_with_explicit_flag() {
    let config = resolve_cli(CliOptions {
        agent: Some("gemini-cli".to_string()),
        agent_flags: vec![AgentId::GeminiCli],
        ..Default::default()
    })
    .unwrap();
    assert_eq!(config.agent, AgentId::GeminiCli);
}

#[test]
fn test_conflicting_agent_selection() {
    let err = resolve_cli(CliOptions {
        agent: Some("claude-code".to_string()),
        agent_flags: vec![AgentId::GeminiCli],
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, ScaffoldError::Configuration(_)));
    assert!(err.to_string().contains("--gemini-cli"));

    let err = resolve_cli(CliOptions {
        agent_flags: vec![AgentId::ClaudeCode, AgentId::QwenCode],
        ..Default::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("conflicting agent flags"));
}

#[test]
fn test_cli_alias_overrides_stored_agent() {
    let stored = StoredConfig::from_json(r#"{"agent": "qwen-code"}"#).unwrap();
    let cli = CliOptions {
        agent_flags: vec![AgentId::GeminiCli],
        ..Default::default()
    };
    let config = resolve(&cli, &stored, &facts("linux")).unwrap();
    assert_eq!(config.agent, AgentId::GeminiCli);
}

#[test]
fn test_backup_defaults() {
    let config = resolve_cli(CliOptions {
        backup: Some(None),
        ..Default::default()
    })
    .unwrap();
    assert!(config.backup_enabled);
    assert_eq!(config.backup_dir, ".sdd-scaffold.backup/20260304T050607Z");

    let config = resolve_cli(CliOptions {
        backup: Some(Some(".bk".to_string())),
        ..Default::default()
    })
    .unwrap();
    assert!(config.backup_enabled);
    assert_eq!(config.backup_dir, ".bk");
}

#[test]
fn test_backup_dir_from_stored_config() {
    let stored = StoredConfig::from_json(r#"{"backupDir": ".saved"}"#).unwrap();

    let bare = CliOptions {
        backup: Some(None),
        ..Default::default()
    };
    let config = resolve(&bare, &stored, &facts("linux")).unwrap();
    assert_eq!(config.backup_dir, ".saved");

    let explicit = CliOptions {
        backup: Some(Some("cli-bk".to_string())),
        ..Default::default()
    };
    let config = resolve(&explicit, &stored, &facts("linux")).unwrap();
    assert_eq!(config.backup_dir, "cli-bk");

    let config = resolve(&CliOptions::default(), &stored, &facts("linux")).unwrap();
    assert!(!config.backup_enabled);
}

#[test]
fn test_partial_layout_override() {
    let stored = StoredConfig::from_json(
        r#"{
            "agentLayouts": {
                "claude-code": { "commandsDir": ".claude/commands/sdd" },
                "gemini-cli": { "docFile": "AGENTS.md" }
            }
        }"#,
    )
    .unwrap();

    let config = resolve(&CliOptions::default(), &stored, &facts("linux")).unwrap();
    assert_eq!(config.layout.commands_dir, ".claude/commands/sdd");
    assert_eq!(config.layout.agent_dir, ".claude");
    assert_eq!(config.layout.doc_file, "CLAUDE.md");
}

#[test]
fn test_layout_override_paths_are_validated() {
    for (layout, field) in [
        (r#"{"docFile": "../CLAUDE.md"}"#, "agentLayouts.claude-code.docFile"),
        (r#"{"agentDir": "/etc"}"#, "agentLayouts.claude-code.agentDir"),
        (r#"{"commandsDir": ""}"#, "agentLayouts.claude-code.commandsDir"),
    ] {
        let stored = StoredConfig::from_json(&format!(
            r#"{{"agentLayouts": {{"claude-code": {}}}}}"#,
            layout
        ))
        .unwrap();
        let err = resolve(&CliOptions::default(), &stored, &facts("linux")).unwrap_err();
        assert!(matches!(err, ScaffoldError::Configuration(_)));
        assert!(err.to_string().contains(field), "{}", err);
    }
}

#[test]
fn test_unselected_agent_layout_is_not_validated() {
    let stored = StoredConfig::from_json(
        r#"{"agentLayouts": {"gemini-cli": {"docFile": "../GEMINI.md"}}}"#,
    )
    .unwrap();
    assert!(resolve(&CliOptions::default(), &stored, &facts("linux")).is_ok());
}

#[test]
fn test_backup_dir_is_validated() {
    let stored = StoredConfig::from_json(r#"{"backupDir": "../outside"}"#).unwrap();
    let err = resolve(&CliOptions::default(), &stored, &facts("linux")).unwrap_err();
    assert!(err.to_string().contains("invalid backupDir '../outside'"), "{}", err);

    let err = resolve_cli(CliOptions {
        backup: Some(Some("/tmp/bk".to_string())),
        ..Default::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("must be a relative path"), "{}", err);
}

#[test]
fn test_validate_relative_path_rules() {
    assert!(validate_relative_path("docFile", "AGENTS.md").is_ok());
    assert!(validate_relative_path("agentDir", "my agent/dir").is_ok());
    assert!(validate_relative_path("agentDir", "a/../b").is_err());
    assert!(validate_relative_path("agentDir", "\\server").is_err());
}

#[test]
fn test_stored_config_ignores_unknown_keys() {
    let stored = StoredConfig::from_json(r#"{"lang": "ja", "futureKey": [1, 2]}"#).unwrap();
    assert_eq!(stored.lang.as_deref(), Some("ja"));
}

#[test]
fn test_stored_config_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let stored = StoredConfig::load_from_dir(temp_dir.path()).unwrap();
    assert_eq!(stored, StoredConfig::default());
}

#[test]
fn test_stored_config_malformed_names_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".sdd-scaffold.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = StoredConfig::load(&path).unwrap_err();
    assert!(matches!(err, ScaffoldError::Configuration(_)));
    assert!(err.to_string().contains(".sdd-scaffold.json"));
}
