//! Key/value storage backends for the session.
//!
//! - **memory**: process-local map, lost on exit. Used by tests and `--ephemeral` runs.
//! - **file**: JSON object on disk behind an advisory lock.

pub mod file;
pub mod memory;

use std::sync::Arc;

use payday_core::config::{StorageBackend, StorageConfig};
use payday_core::KeyValueStore;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Build the backend selected by `config`.
pub fn open_storage(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(FileStore::new(config.effective_session_path())),
    }
}
