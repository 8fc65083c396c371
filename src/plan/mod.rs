//! Artifact planning and plan display.
//!
//! The planner is the single source of truth for what a run will touch:
//! `--dry-run` prints its output, and a real run hands the very same value
//! to the executor. Nothing here reads or writes the target directory.

mod display;
mod planning;
mod types;


pub use display::{format_plan, format_summary};
pub use planning::plan;
pub use types::{PlannedArtifact, PlannedSource};
