//! Filesystem helpers used by the executor.
//!
//! All writes are atomic; directory listings are deterministic.

mod atomic;
mod backup;
mod tree;

pub use atomic::atomic_write;
pub use backup::backup_file;
pub use tree::list_files;
