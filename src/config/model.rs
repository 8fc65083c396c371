//! Stored config struct and the flat layer record used for precedence merging.

use super::types::{AgentId, AgentLayout};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-project configuration persisted in `.sdd-scaffold.json`.
///
/// Every field is optional; a missing file is equivalent to `StoredConfig::default()`.
/// Enumerated values are kept as strings here and validated during resolution,
/// so a bad stored value is reported as a configuration error naming the field.
/// Unknown keys are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kiro_dir: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<String>,

    /// Backup directory used when `--backup` is given without a value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_dir: Option<String>,

    /// Partial layout overrides keyed by agent id.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub agent_layouts: BTreeMap<String, AgentLayoutOverride>,
}

/// Partial override of an agent's built-in layout. Unset fields keep the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentLayoutOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands_dir: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_dir: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_file: Option<String>,
}

impl AgentLayoutOverride {
    /// Apply this override on top of `base`, field by field.
    pub fn apply(&self, base: AgentLayout) -> AgentLayout {
        AgentLayout {
            commands_dir: self.commands_dir.clone().unwrap_or(base.commands_dir),
            agent_dir: self.agent_dir.clone().unwrap_or(base.agent_dir),
            doc_file: self.doc_file.clone().unwrap_or(base.doc_file),
        }
    }
}

/// Built-in layout for `agent` with its stored override, if any, applied.
pub fn resolve_layout(
    agent: AgentId,
    overrides: &BTreeMap<String, AgentLayoutOverride>,
) -> AgentLayout {
    match overrides.get(agent.as_str()) {
        Some(over) => over.apply(agent.default_layout()),
        None => agent.default_layout(),
    }
}

/// One source of configuration values: built-in defaults, the stored file, or the CLI.
///
/// Layers are merged left to right with [`ConfigLayer::overlay`]; a value present
/// in the upper layer always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    pub agent: Option<String>,
    pub lang: Option<String>,
    pub os: Option<String>,
    pub kiro_dir: Option<String>,
    pub overwrite: Option<String>,
    pub backup_dir: Option<String>,
}

impl ConfigLayer {
    /// Overlay `upper` on top of `self`.
    pub fn overlay(self, upper: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            agent: upper.agent.or(self.agent),
            lang: upper.lang.or(self.lang),
            os: upper.os.or(self.os),
            kiro_dir: upper.kiro_dir.or(self.kiro_dir),
            overwrite: upper.overwrite.or(self.overwrite),
            backup_dir: upper.backup_dir.or(self.backup_dir),
        }
    }
}

impl From<&StoredConfig> for ConfigLayer {
    fn from(stored: &StoredConfig) -> Self {
        ConfigLayer {
            agent: stored.agent.clone(),
            lang: stored.lang.clone(),
            os: stored.os.clone(),
            kiro_dir: stored.kiro_dir.clone(),
            overwrite: stored.overwrite.clone(),
            backup_dir: stored.backup_dir.clone(),
        }
    }
}
