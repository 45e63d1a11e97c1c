//! Boolean preference flags keyed by name.
//!
//! Used by the application shell for UI toggles; the simulation core never
//! reads preferences.  The trait keeps the storage backend (browser
//! localStorage in the original deployment, a file, or memory) out of the
//! core.

use std::collections::HashMap;

/// Simple get/set of boolean flags by key.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<bool>;
    fn set(&mut self, key: &str, value: bool);
}

/// In-memory [`PreferenceStore`] backed by a `HashMap`.
#[derive(Default, Debug, Clone)]
pub struct MemoryPrefs {
    flags: HashMap<String, bool>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }

    fn set(&mut self, key: &str, value: bool) {
        self.flags.insert(key.to_owned(), value);
    }
}
