//! Configuration enums, per-agent layouts, and defaults.
//!
//! Every enumerated field is a closed set. Values arrive as strings (from
//! the CLI or the stored config file) and are parsed with `from_str`, which
//! returns `None` for anything outside the set so the resolver can report
//! the offending field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// File name of the persisted per-project config, relative to the target directory.
pub const STORED_CONFIG_FILE: &str = ".sdd-scaffold.json";

/// Default working-data directory for generated spec/steering documents.
pub const DEFAULT_KIRO_DIR: &str = ".kiro";

/// Root of the default backup directory used by a bare `--backup`.
pub const DEFAULT_BACKUP_ROOT: &str = ".sdd-scaffold.backup";

/// Timestamp format appended to [`DEFAULT_BACKUP_ROOT`].
pub const BACKUP_STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Target AI coding-assistant integration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum AgentId {
    #[default]
    #[serde(rename = "claude-code")]
    ClaudeCode,
    #[serde(rename = "gemini-cli")]
    GeminiCli,
    #[serde(rename = "qwen-code")]
    QwenCode,
}

impl AgentId {
    /// All supported agents, in display order.
    pub const ALL: [AgentId; 3] = [AgentId::ClaudeCode, AgentId::GeminiCli, AgentId::QwenCode];

    /// Parse an agent identifier from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "claude-code" => Some(Self::ClaudeCode),
            "gemini-cli" => Some(Self::GeminiCli),
            "qwen-code" => Some(Self::QwenCode),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClaudeCode => "claude-code",
            Self::GeminiCli => "gemini-cli",
            Self::QwenCode => "qwen-code",
        }
    }

    /// Built-in directory layout for this agent.
    pub fn default_layout(&self) -> AgentLayout {
        let (agent_dir, doc_file) = match self {
            Self::ClaudeCode => (".claude", "CLAUDE.md"),
            Self::GeminiCli => (".gemini", "GEMINI.md"),
            Self::QwenCode => (".qwen", "QWEN.md"),
        };
        AgentLayout {
            commands_dir: format!("{}/commands/kiro", agent_dir),
            agent_dir: agent_dir.to_string(),
            doc_file: doc_file.to_string(),
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating system, as requested (`auto` allowed) or as resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OsType {
    #[default]
    Auto,
    Mac,
    Windows,
    Linux,
}

impl OsType {
    pub const ALL: [OsType; 4] = [OsType::Auto, OsType::Mac, OsType::Windows, OsType::Linux];

    /// Parse an OS type from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(Self::Auto),
            "mac" => Some(Self::Mac),
            "windows" => Some(Self::Windows),
            "linux" => Some(Self::Linux),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Mac => "mac",
            Self::Windows => "windows",
            Self::Linux => "linux",
        }
    }

    /// Map a runtime platform identifier to a concrete OS.
    ///
    /// Unrecognized identifiers (containers, BSDs, WSL variants reporting
    /// something exotic) fall back to `Linux`. Never returns `Auto`.
    pub fn from_platform(platform: &str) -> Self {
        match platform {
            "macos" | "darwin" => Self::Mac,
            "windows" | "win32" => Self::Windows,
            _ => Self::Linux,
        }
    }

    /// Expand `Auto` against the runtime platform; concrete values pass through.
    pub fn resolve(self, platform: &str) -> Self {
        match self {
            Self::Auto => Self::from_platform(platform),
            other => other,
        }
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of the generated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Lang {
    #[serde(rename = "ja")]
    Ja,
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Ja, Lang::En, Lang::ZhTw];

    /// Parse a language code from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ja" => Some(Self::Ja),
            "en" => Some(Self::En),
            "zh-TW" => Some(Self::ZhTw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy applied when a destination file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Ask per conflicting file (default, safest).
    #[default]
    Prompt,
    /// Leave existing files untouched.
    Skip,
    /// Overwrite existing files, backing them up first when enabled.
    Force,
}

impl OverwritePolicy {
    pub const ALL: [OverwritePolicy; 3] = [
        OverwritePolicy::Prompt,
        OverwritePolicy::Skip,
        OverwritePolicy::Force,
    ];

    /// Parse an overwrite policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "prompt" => Some(Self::Prompt),
            "skip" => Some(Self::Skip),
            "force" => Some(Self::Force),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Skip => "skip",
            Self::Force => "force",
        }
    }

    /// The policy actually enforced at write time.
    ///
    /// Auto-confirm upgrades `Prompt` to `Force`; `Skip` and `Force` are never altered.
    pub fn effective(self, auto_confirm: bool) -> Self {
        match self {
            Self::Prompt if auto_confirm => Self::Force,
            other => other,
        }
    }
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved per-agent directory layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentLayout {
    /// Directory receiving slash-command definitions (e.g. `.claude/commands/kiro`).
    pub commands_dir: String,
    /// Agent home directory (e.g. `.claude`).
    pub agent_dir: String,
    /// Agent documentation file name (e.g. `CLAUDE.md`).
    pub doc_file: String,
}

/// Render a closed set of values for error messages.
pub(crate) fn one_of(values: &[&str]) -> String {
    values.join(", ")
}
