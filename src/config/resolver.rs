//! Configuration precedence resolution.
//!
//! Three flat layers are merged left to right: built-in defaults, the stored
//! per-project config, then CLI flags. The merged strings are validated into
//! a [`ResolvedConfig`], and runtime facts (platform, clock) fill in what only
//! the running process knows. Resolution is pure: the same inputs always give
//! the same output or the same [`ScaffoldError::Configuration`].

use super::model::{ConfigLayer, StoredConfig, resolve_layout};
use super::types::{
    AgentId, AgentLayout, BACKUP_STAMP_FORMAT, DEFAULT_BACKUP_ROOT, DEFAULT_KIRO_DIR, Lang,
    OsType, OverwritePolicy, one_of,
};
use crate::error::{Result, ScaffoldError};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Characters allowed in the kiro directory path.
static KIRO_DIR_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._/-]+$").expect("Invalid kiro dir regex"));

/// Options supplied on the command line. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Value of `--agent`.
    pub agent: Option<String>,
    /// Agents selected through per-agent shorthand flags (`--claude-code`, ...).
    pub agent_flags: Vec<AgentId>,
    pub lang: Option<String>,
    pub os: Option<String>,
    pub overwrite: Option<String>,
    pub kiro_dir: Option<String>,
    /// `--yes`: auto-confirm every conflict.
    pub yes: bool,
    /// `None`: no `--backup`; `Some(None)`: bare `--backup`; `Some(Some(dir))`: `--backup=dir`.
    pub backup: Option<Option<String>>,
    pub dry_run: bool,
}

/// Facts about the running process that feed resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeFacts {
    /// Platform identifier as reported by the runtime (e.g. `linux`, `macos`).
    pub platform: String,
    /// Invocation time, used to stamp the default backup directory.
    pub now: DateTime<Utc>,
}

impl RuntimeFacts {
    /// Facts for the current process.
    pub fn current() -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
            now: Utc::now(),
        }
    }
}

/// Fully resolved, validated configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub agent: AgentId,
    /// OS as requested (may be `Auto`).
    pub os: OsType,
    /// OS after expanding `Auto`; never `Auto`.
    pub resolved_os: OsType,
    pub lang: Lang,
    /// Project-relative working-data directory, validated safe.
    pub kiro_dir: String,
    /// Overwrite policy as requested.
    pub overwrite: OverwritePolicy,
    /// Overwrite policy after applying `--yes`.
    pub effective_overwrite: OverwritePolicy,
    pub backup_enabled: bool,
    /// Backup directory, relative to the target directory unless absolute.
    /// Empty when backups are disabled and no directory was configured.
    pub backup_dir: String,
    pub dry_run: bool,
    pub layout: AgentLayout,
}

/// Built-in defaults layer.
pub fn default_layer() -> ConfigLayer {
    ConfigLayer {
        agent: Some(AgentId::default().as_str().to_string()),
        lang: Some(Lang::default().as_str().to_string()),
        os: Some(OsType::default().as_str().to_string()),
        kiro_dir: Some(DEFAULT_KIRO_DIR.to_string()),
        overwrite: Some(OverwritePolicy::default().as_str().to_string()),
        backup_dir: None,
    }
}

/// Merge CLI options, stored config and runtime facts into a [`ResolvedConfig`].
///
/// # Errors
///
/// * `ScaffoldError::Configuration` - an enumerated value is outside its set,
///   `kiro_dir`, the backup dir or a layout path is unsafe, or agent
///   selection flags disagree
pub fn resolve(
    cli: &CliOptions,
    stored: &StoredConfig,
    facts: &RuntimeFacts,
) -> Result<ResolvedConfig> {
    let cli_layer = ConfigLayer {
        agent: select_agent(cli)?,
        lang: cli.lang.clone(),
        os: cli.os.clone(),
        kiro_dir: cli.kiro_dir.clone(),
        overwrite: cli.overwrite.clone(),
        backup_dir: cli
            .backup
            .clone()
            .flatten()
            .filter(|dir| !dir.trim().is_empty()),
    };

    let merged = default_layer()
        .overlay(ConfigLayer::from(stored))
        .overlay(cli_layer);

    let agent = parse_field(merged.agent.as_deref(), "agent", AgentId::from_str, || {
        one_of(&AgentId::ALL.map(|a| a.as_str()))
    })?;
    let lang = parse_field(merged.lang.as_deref(), "lang", Lang::from_str, || {
        one_of(&Lang::ALL.map(|l| l.as_str()))
    })?;
    let os = parse_field(merged.os.as_deref(), "os", OsType::from_str, || {
        one_of(&OsType::ALL.map(|o| o.as_str()))
    })?;
    let overwrite = parse_field(
        merged.overwrite.as_deref(),
        "overwrite",
        OverwritePolicy::from_str,
        || one_of(&OverwritePolicy::ALL.map(|p| p.as_str())),
    )?;

    let kiro_dir = merged
        .kiro_dir
        .unwrap_or_else(|| DEFAULT_KIRO_DIR.to_string());
    validate_kiro_dir(&kiro_dir)?;

    let backup_enabled = cli.backup.is_some();
    let backup_dir = match merged.backup_dir {
        Some(dir) => {
            validate_relative_path("backupDir", &dir)?;
            dir
        }
        None if backup_enabled => default_backup_dir(&facts.now),
        None => String::new(),
    };

    let layout = resolve_layout(agent, &stored.agent_layouts);
    validate_layout(agent, &layout)?;

    let resolved = ResolvedConfig {
        agent,
        os,
        resolved_os: os.resolve(&facts.platform),
        lang,
        kiro_dir,
        overwrite,
        effective_overwrite: overwrite.effective(cli.yes),
        backup_enabled,
        backup_dir,
        dry_run: cli.dry_run,
        layout,
    };

    tracing::debug!(
        agent = %resolved.agent,
        os = %resolved.resolved_os,
        lang = %resolved.lang,
        kiro_dir = %resolved.kiro_dir,
        overwrite = %resolved.effective_overwrite,
        backup = resolved.backup_enabled,
        dry_run = resolved.dry_run,
        "resolved configuration"
    );

    Ok(resolved)
}

/// Reconcile `--agent` with the per-agent shorthand flags.
fn select_agent(cli: &CliOptions) -> Result<Option<String>> {
    let mut flags = cli.agent_flags.clone();
    flags.sort();
    flags.dedup();

    if flags.len() > 1 {
        let names: Vec<String> = flags.iter().map(|a| format!("--{}", a)).collect();
        return Err(ScaffoldError::Configuration(format!(
            "conflicting agent flags: {} (select exactly one agent)",
            names.join(", ")
        )));
    }

    match (cli.agent.as_deref(), flags.first()) {
        (Some(explicit), Some(flag)) if explicit != flag.as_str() => {
            Err(ScaffoldError::Configuration(format!(
                "conflicting agent selection: --agent {} and --{}",
                explicit, flag
            )))
        }
        (Some(explicit), _) => Ok(Some(explicit.to_string())),
        (None, Some(flag)) => Ok(Some(flag.as_str().to_string())),
        (None, None) => Ok(None),
    }
}

fn parse_field<T>(
    value: Option<&str>,
    field: &str,
    parse: impl Fn(&str) -> Option<T>,
    allowed: impl Fn() -> String,
) -> Result<T> {
    let value = value.unwrap_or_default();
    parse(value).ok_or_else(|| {
        ScaffoldError::Configuration(format!(
            "invalid {} '{}': expected one of: {}",
            field,
            value,
            allowed()
        ))
    })
}

/// Validate that the kiro directory is a safe project-relative path.
///
/// Rules:
/// - must be non-empty and relative
/// - must not contain a `..` segment
/// - only letters, digits, `-`, `_`, `/` and `.` are allowed
pub fn validate_kiro_dir(kiro_dir: &str) -> Result<()> {
    validate_relative_path("kiroDir", kiro_dir)?;

    if !KIRO_DIR_CHARS.is_match(kiro_dir) {
        return Err(ScaffoldError::Configuration(format!(
            "invalid kiroDir '{}': only letters, digits, '-', '_', '/' and '.' are allowed",
            kiro_dir
        )));
    }

    Ok(())
}

/// Reject empty, absolute, or `..`-containing paths for `field`.
pub fn validate_relative_path(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ScaffoldError::Configuration(format!(
            "invalid {} '': must not be empty",
            field
        )));
    }

    if value.starts_with('/') || value.starts_with('\\') || Path::new(value).is_absolute() {
        return Err(ScaffoldError::Configuration(format!(
            "invalid {} '{}': must be a relative path",
            field, value
        )));
    }

    if value.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(ScaffoldError::Configuration(format!(
            "invalid {} '{}': must not contain '..' segments",
            field, value
        )));
    }

    Ok(())
}

/// Layout values come from the stored file and become write destinations.
fn validate_layout(agent: AgentId, layout: &AgentLayout) -> Result<()> {
    for (key, value) in [
        ("commandsDir", &layout.commands_dir),
        ("agentDir", &layout.agent_dir),
        ("docFile", &layout.doc_file),
    ] {
        validate_relative_path(&format!("agentLayouts.{}.{}", agent, key), value)?;
    }
    Ok(())
}

fn default_backup_dir(now: &DateTime<Utc>) -> String {
    format!("{}/{}", DEFAULT_BACKUP_ROOT, now.format(BACKUP_STAMP_FORMAT))
}
