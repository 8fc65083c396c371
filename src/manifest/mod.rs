//! Declarative artifact manifest.
//!
//! A manifest is a versioned JSON document listing the artifacts to
//! materialize. It is loaded once per invocation and never mutated.
//!
//! ```json
//! {
//!   "version": 1,
//!   "artifacts": [
//!     { "id": "commands",
//!       "source": { "type": "staticDir", "from": "commands/{{AGENT}}", "toDir": "{{AGENT_COMMANDS_DIR}}" },
//!       "when": { "agent": ["claude-code", "qwen-code"], "os": "mac" } }
//!   ]
//! }
//! ```

mod loader;
mod model;


pub use model::{Artifact, Manifest, SourceSpec};
