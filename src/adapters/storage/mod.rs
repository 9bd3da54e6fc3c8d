//! Storage Adapters
//!
//! Implementations of the SessionStore port for persisting conversation state.
//!
//! ## Available Adapters
//!
//! - **FileSessionStore** - One YAML document per session on disk
//! - **InMemorySessionStore** - State kept in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSessionStore, InMemorySessionStore};
//!
//! // Persistent: file-based storage
//! let store = FileSessionStore::new("./sessions");
//!
//! // Testing: in-memory storage
//! let store = InMemorySessionStore::new();
//! ```

mod file_session_store;
mod in_memory_session_store;

pub use file_session_store::FileSessionStore;
pub use in_memory_session_store::InMemorySessionStore;
