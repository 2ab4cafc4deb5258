//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory on native)
//! - Input coordinate mapping

pub mod input;
pub mod storage;

pub use input::client_to_playfield;
pub use storage::{MemoryStorage, Storage};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
