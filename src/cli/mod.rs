//! CLI argument parsing for sdd-scaffold.
//!
//! Uses clap derive macros for declarative argument definitions. Enumerated
//! values (`--agent`, `--lang`, `--os`, `--overwrite`) are taken as plain
//! strings and validated by the configuration resolver, so a bad value is a
//! configuration error rather than a usage error.

use crate::config::{AgentId, CliOptions};
use clap::Parser;
use std::path::PathBuf;

/// sdd-scaffold: install spec-driven development commands and templates
/// for an AI coding assistant into the current project.
///
/// Files are materialized from a templates directory according to a JSON
/// manifest. Use `--dry-run` to preview exactly what would be written.
#[derive(Parser, Debug)]
#[command(name = "sdd-scaffold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target agent: claude-code, gemini-cli or qwen-code.
    #[arg(long, value_name = "ID")]
    pub agent: Option<String>,

    /// Shorthand for `--agent claude-code`.
    #[arg(long = "claude-code", visible_alias = "claude")]
    pub claude_code: bool,

    /// Shorthand for `--agent gemini-cli`.
    #[arg(long = "gemini-cli", visible_alias = "gemini")]
    pub gemini_cli: bool,

    /// Shorthand for `--agent qwen-code`.
    #[arg(long = "qwen-code", visible_alias = "qwen")]
    pub qwen_code: bool,

    /// Document language: ja, en or zh-TW.
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Target OS: auto, mac, windows or linux.
    #[arg(long, value_name = "OS")]
    pub os: Option<String>,

    /// Conflict policy for existing files: prompt, skip or force.
    #[arg(long, value_name = "POLICY")]
    pub overwrite: Option<String>,

    /// Answer yes to every conflict (turns `prompt` into `force`).
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Back up files before overwriting them, optionally into DIR.
    #[arg(
        long,
        value_name = "DIR",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = ""
    )]
    pub backup: Option<String>,

    /// Working-data directory for specs and steering documents.
    #[arg(long = "kiro-dir", value_name = "PATH")]
    pub kiro_dir: Option<String>,

    /// Print the plan without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Manifest file (default: <templates>/manifests/<agent>.json).
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Templates root that manifest sources resolve against.
    #[arg(long, value_name = "DIR", default_value = "templates")]
    pub templates: PathBuf,

    /// Enable info-level logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Agents selected through shorthand flags, in flag order.
    pub fn agent_flags(&self) -> Vec<AgentId> {
        [
            (self.claude_code, AgentId::ClaudeCode),
            (self.gemini_cli, AgentId::GeminiCli),
            (self.qwen_code, AgentId::QwenCode),
        ]
        .into_iter()
        .filter_map(|(set, agent)| set.then_some(agent))
        .collect()
    }

    /// The options record handed to the configuration resolver.
    pub fn to_options(&self) -> CliOptions {
        CliOptions {
            agent: self.agent.clone(),
            agent_flags: self.agent_flags(),
            lang: self.lang.clone(),
            os: self.os.clone(),
            overwrite: self.overwrite.clone(),
            kiro_dir: self.kiro_dir.clone(),
            yes: self.yes,
            backup: self
                .backup
                .as_ref()
                .map(|dir| Some(dir.clone()).filter(|d| !d.is_empty())),
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["sdd-scaffold"]).unwrap();
        assert_eq!(cli.templates, PathBuf::from("templates"));
        assert!(cli.manifest.is_none());
        assert_eq!(cli.to_options(), CliOptions::default());
    }

    #[test]
    fn parse_full() {
        let cli = Cli::try_parse_from([
            "sdd-scaffold",
            "--agent",
            "gemini-cli",
            "--lang",
            "ja",
            "--os",
            "mac",
            "--overwrite",
            "force",
            "--kiro-dir",
            "docs/kiro",
            "--dry-run",
            "--manifest",
            "m.json",
            "--templates",
            "tpl",
            "-y",
        ])
        .unwrap();

        assert_eq!(cli.manifest, Some(PathBuf::from("m.json")));
        assert_eq!(cli.templates, PathBuf::from("tpl"));

        let options = cli.to_options();
        assert_eq!(options.agent.as_deref(), Some("gemini-cli"));
        assert_eq!(options.lang.as_deref(), Some("ja"));
        assert_eq!(options.os.as_deref(), Some("mac"));
        assert_eq!(options.overwrite.as_deref(), Some("force"));
        assert_eq!(options.kiro_dir.as_deref(), Some("docs/kiro"));
        assert!(options.yes);
        assert!(options.dry_run);
        assert!(options.backup.is_none());
    }

    #[test]
    fn parse_backup_forms() {
        let cli = Cli::try_parse_from(["sdd-scaffold", "--backup"]).unwrap();
        assert_eq!(cli.to_options().backup, Some(None));

        let cli = Cli::try_parse_from(["sdd-scaffold", "--backup=.bk"]).unwrap();
        assert_eq!(cli.to_options().backup, Some(Some(".bk".to_string())));

        // Without `=`, the next token is not consumed as the backup dir.
        assert!(Cli::try_parse_from(["sdd-scaffold", "--backup", ".bk"]).is_err());
    }

    #[test]
    fn parse_agent_aliases() {
        let cli = Cli::try_parse_from(["sdd-scaffold", "--claude"]).unwrap();
        assert_eq!(cli.agent_flags(), vec![AgentId::ClaudeCode]);

        let cli = Cli::try_parse_from(["sdd-scaffold", "--gemini-cli", "--qwen"]).unwrap();
        assert_eq!(
            cli.to_options().agent_flags,
            vec![AgentId::GeminiCli, AgentId::QwenCode]
        );
    }

    #[test]
    fn parse_accepts_unknown_enum_values() {
        let cli = Cli::try_parse_from(["sdd-scaffold", "--lang", "fr"]).unwrap();
        assert_eq!(cli.to_options().lang.as_deref(), Some("fr"));
    }
}
