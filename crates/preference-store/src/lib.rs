//! Device-local preference and history storage
//!
//! The app persists a small set of scalar preferences (language, persona)
//! and two JSON-encoded scan history lists in a device-local key-value
//! store with no expiry and no cross-device sync. This crate provides the
//! store abstraction and the typed accessors over it.
//!
//! The store is always passed in explicitly rather than reached as ambient
//! global state, so callers can substitute [`MemoryStore`] in tests and a
//! [`FileStore`] in the shipped app.

pub mod history;
pub mod prefs;
pub mod store;

pub use history::{OfflineScans, ScanHistory, HISTORY_CAP};
pub use prefs::{Preferences, LANGUAGE_KEY, PERSONA_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
