//! Storage backends for history and stats.

pub mod file;
pub mod memory;
pub mod persisted;
pub mod traits;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use persisted::{Persisted, read_json, write_json};
pub use traits::KeyValueStore;
