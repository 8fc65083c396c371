//! Exit code constants for the sdd-scaffold CLI.
//!
//! - 0: Success (including `--help`, `--version` and `--dry-run`)
//! - 1: User error (configuration, manifest or template problems)
//! - 2: Execution failure (filesystem write failed part-way through a plan)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid configuration, unreadable manifest, or a template
/// that does not render.
pub const USER_ERROR: i32 = 1;

/// Execution failure: a filesystem operation failed while applying the plan.
pub const EXECUTION_FAILURE: i32 = 2;
