//! Template context: the placeholder values shared by path and content substitution.
//!
//! The context is a flat map from a fixed set of placeholder names to plain
//! strings, fully determined by the resolved configuration. The same context
//! is used to substitute manifest path fields and template file contents.

use crate::config::{
    AgentId, AgentLayout, AgentLayoutOverride, Lang, ResolvedConfig, resolve_layout,
};
use std::collections::BTreeMap;

/// `{{AGENT}}`: agent identifier, e.g. `claude-code`.
pub const AGENT: &str = "AGENT";
/// `{{AGENT_DIR}}`: agent home directory, e.g. `.claude`.
pub const AGENT_DIR: &str = "AGENT_DIR";
/// `{{AGENT_DOC}}`: agent documentation file name, e.g. `CLAUDE.md`.
pub const AGENT_DOC: &str = "AGENT_DOC";
/// `{{AGENT_COMMANDS_DIR}}`: slash-command directory, e.g. `.claude/commands/kiro`.
pub const AGENT_COMMANDS_DIR: &str = "AGENT_COMMANDS_DIR";
/// `{{LANG_CODE}}`: language code, e.g. `en`.
pub const LANG_CODE: &str = "LANG_CODE";
/// `{{KIRO_DIR}}`: working-data directory, e.g. `.kiro`.
pub const KIRO_DIR: &str = "KIRO_DIR";

/// Placeholder name -> value mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    values: BTreeMap<&'static str, String>,
}

impl TemplateContext {
    /// Build the context for an agent, applying its stored layout override.
    ///
    /// Override fields are applied one by one; unset fields keep the agent's
    /// built-in value. `kiro_dir` is used verbatim.
    pub fn build(
        agent: AgentId,
        lang: Lang,
        kiro_dir: &str,
        layout_overrides: &BTreeMap<String, AgentLayoutOverride>,
    ) -> Self {
        let layout = resolve_layout(agent, layout_overrides);
        Self::from_layout(agent, lang, kiro_dir, &layout)
    }

    /// Build the context from a resolved configuration, whose layout already
    /// has overrides applied.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::from_layout(config.agent, config.lang, &config.kiro_dir, &config.layout)
    }

    fn from_layout(agent: AgentId, lang: Lang, kiro_dir: &str, layout: &AgentLayout) -> Self {
        let values = BTreeMap::from([
            (AGENT, agent.as_str().to_string()),
            (AGENT_DIR, layout.agent_dir.clone()),
            (AGENT_DOC, layout.doc_file.clone()),
            (AGENT_COMMANDS_DIR, layout.commands_dir.clone()),
            (LANG_CODE, lang.as_str().to_string()),
            (KIRO_DIR, kiro_dir.to_string()),
        ]);
        Self { values }
    }

    /// Look up a placeholder value by name (without braces).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Iterate placeholder names and values in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
