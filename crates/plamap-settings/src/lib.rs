//! # PLA Live Map Settings
//!
//! Preference handling for the live map frontend: a fixed table of
//! numeric and boolean preferences synchronized between a persistent
//! string key-value store and the bound form fields.
//!
//! The layer is organized as:
//! - Storage capability (in-memory or file-backed key-value store)
//! - Typed preference access with per-key defaults
//! - Form binding (hydration on load, change events written back)

pub mod controller;
pub mod error;
pub mod preferences;
pub mod storage;

pub use controller::{FormBinding, PreferencesController};
pub use error::{PreferencesError, PreferencesResult};
pub use preferences::{
    descriptor_for_field, PrefKind, PrefValue, PreferenceDescriptor, PreferenceStore, PREFERENCES,
};
pub use storage::{default_store_path, FileStorage, MemoryStorage, PreferenceStorage};
