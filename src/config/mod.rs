//! Configuration model and resolution for sdd-scaffold.
//!
//! This module defines the stored per-project config (`.sdd-scaffold.json`),
//! the closed enumerations for agent/os/lang/overwrite, and the resolver that
//! merges defaults, stored config and CLI flags into one immutable
//! [`ResolvedConfig`].

mod model;
mod operations;
mod resolver;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{AgentLayoutOverride, StoredConfig, resolve_layout};
pub use resolver::{CliOptions, ResolvedConfig, RuntimeFacts, resolve};
pub use types::{AgentId, AgentLayout, Lang, OsType, OverwritePolicy};
