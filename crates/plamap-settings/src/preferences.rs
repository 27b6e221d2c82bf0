//! The preference table and typed access over raw string storage.
//!
//! Keys, bound field identifiers, and defaults come from the live map
//! frontend. Integers are stored as base-10 decimal strings; booleans as
//! `"1"`/`"0"`.

use tracing::warn;

use crate::error::PreferencesResult;
use crate::storage::PreferenceStorage;

/// Value kind a preference can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefKind {
    Integer,
    Boolean,
}

/// A typed preference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefValue {
    Integer(i64),
    Boolean(bool),
}

impl PrefValue {
    /// Kind of this value.
    pub fn kind(self) -> PrefKind {
        match self {
            Self::Integer(_) => PrefKind::Integer,
            Self::Boolean(_) => PrefKind::Boolean,
        }
    }
}

/// One entry of the preference table: the storage key, the form field it
/// is bound to, and the default used when nothing is stored yet.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceDescriptor {
    pub key: &'static str,
    pub field: &'static str,
    pub default: PrefValue,
}

impl PreferenceDescriptor {
    /// Kind of this preference.
    pub fn kind(&self) -> PrefKind {
        self.default.kind()
    }
}

/// The ten live map preferences.
pub const PREFERENCES: [PreferenceDescriptor; 10] = [
    PreferenceDescriptor {
        key: "teleportHeight",
        field: "y",
        default: PrefValue::Integer(50),
    },
    PreferenceDescriptor {
        key: "rolls",
        field: "rolls",
        default: PrefValue::Integer(1),
    },
    PreferenceDescriptor {
        key: "thresh",
        field: "thresh",
        default: PrefValue::Integer(50),
    },
    PreferenceDescriptor {
        key: "initSpawn",
        field: "initSpawn",
        default: PrefValue::Boolean(false),
    },
    PreferenceDescriptor {
        key: "mapShinyFilter",
        field: "shinyFilterCheck",
        default: PrefValue::Boolean(true),
    },
    PreferenceDescriptor {
        key: "mapAlphaFilter",
        field: "alphaFilterCheck",
        default: PrefValue::Boolean(true),
    },
    PreferenceDescriptor {
        key: "outbreakAlphaFilter",
        field: "outbreakAlphaFilter",
        default: PrefValue::Boolean(false),
    },
    PreferenceDescriptor {
        key: "outbreakShinyFilter",
        field: "outbreakShinyFilter",
        default: PrefValue::Boolean(false),
    },
    PreferenceDescriptor {
        key: "massOutbreakRolls",
        field: "massOutbreakRolls",
        default: PrefValue::Integer(26),
    },
    PreferenceDescriptor {
        key: "passiveMoveLimit",
        field: "passiveMoveLimit",
        default: PrefValue::Integer(10),
    },
];

/// Find the descriptor bound to a form field.
pub fn descriptor_for_field(field: &str) -> Option<&'static PreferenceDescriptor> {
    PREFERENCES.iter().find(|desc| desc.field == field)
}

/// Typed preference access over an injected string store.
pub struct PreferenceStore {
    storage: Box<dyn PreferenceStorage>,
}

impl PreferenceStore {
    /// Create a store over the given storage backend.
    pub fn new(storage: impl PreferenceStorage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    /// Read an integer preference, falling back to `default` when the key
    /// is absent or the stored string does not parse as base-10.
    pub fn read_int(&self, key: &str, default: i64) -> i64 {
        match self.storage.get(key) {
            None => default,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(key, raw = %raw, "stored preference is not an integer, using default");
                default
            }),
        }
    }

    /// Store an integer preference in its decimal string form.
    pub fn write_int(&mut self, key: &str, value: i64) -> PreferencesResult<()> {
        self.storage.set(key, &value.to_string())
    }

    /// Read a boolean preference. Only a stored `"1"` decodes to true.
    pub fn read_bool(&self, key: &str, default: bool) -> bool {
        match self.storage.get(key) {
            None => default,
            Some(raw) => raw == "1",
        }
    }

    /// Store a boolean preference as `"1"` or `"0"`.
    pub fn write_bool(&mut self, key: &str, value: bool) -> PreferencesResult<()> {
        self.storage.set(key, if value { "1" } else { "0" })
    }

    /// Read a preference through its descriptor.
    pub fn read(&self, desc: &PreferenceDescriptor) -> PrefValue {
        match desc.default {
            PrefValue::Integer(default) => PrefValue::Integer(self.read_int(desc.key, default)),
            PrefValue::Boolean(default) => PrefValue::Boolean(self.read_bool(desc.key, default)),
        }
    }

    /// Write a preference through its descriptor.
    pub fn write(&mut self, desc: &PreferenceDescriptor, value: PrefValue) -> PreferencesResult<()> {
        match value {
            PrefValue::Integer(v) => self.write_int(desc.key, v),
            PrefValue::Boolean(v) => self.write_bool(desc.key, v),
        }
    }

    /// Raw stored string for `key`, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.storage.get(key)
    }
}
