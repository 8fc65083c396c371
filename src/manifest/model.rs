//! Manifest data types.

use crate::config::{AgentId, OsType};
use serde::{Deserialize, Serialize};

/// The only manifest schema version this build understands.
pub const MANIFEST_VERSION: u32 = 1;

/// Versioned list of artifacts to materialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    pub artifacts: Vec<Artifact>,
}

/// One unit of file-tree output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    /// Identifier, expected to be unique within the manifest (not enforced).
    pub id: String,
    pub source: SourceSpec,
    /// Inclusion predicate; absent means always included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub when: Option<Condition>,
}

/// Where an artifact's files come from and where they go.
///
/// All path fields may contain `{{NAME}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SourceSpec {
    /// Verbatim recursive copy of a directory.
    #[serde(rename_all = "camelCase")]
    StaticDir { from: String, to_dir: String },

    /// A single rendered file.
    #[serde(rename_all = "camelCase")]
    TemplateFile {
        from: String,
        to_dir: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rename: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        out_file: Option<String>,
    },

    /// A directory whose template files are rendered and the rest copied.
    #[serde(rename_all = "camelCase")]
    TemplateDir { from_dir: String, to_dir: String },
}

impl SourceSpec {
    /// Manifest name of this source kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceSpec::StaticDir { .. } => "staticDir",
            SourceSpec::TemplateFile { .. } => "templateFile",
            SourceSpec::TemplateDir { .. } => "templateDir",
        }
    }
}

/// Conditional inclusion of an artifact.
///
/// Every present predicate must match; an empty condition always matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<Predicate<AgentId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<Predicate<OsType>>,
}

impl Condition {
    /// Evaluate against the active agent and resolved OS.
    pub fn matches(&self, agent: AgentId, os: OsType) -> bool {
        let agent_ok = self.agent.as_ref().is_none_or(|p| p.matches(&agent));
        let os_ok = self.os.as_ref().is_none_or(|p| p.matches(&os));
        agent_ok && os_ok
    }
}

/// A predicate given as one value (equality) or a list (membership).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Predicate<T> {
    One(T),
    Any(Vec<T>),
}

impl<T: PartialEq> Predicate<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Predicate::One(expected) => expected == value,
            Predicate::Any(options) => options.contains(value),
        }
    }
}
