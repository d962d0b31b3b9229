//! Per-cycle scratch state shared between plugins.
//!
//! The scheduler creates one `CycleState` per scheduling attempt and passes
//! it to every plugin. Plugins that need to hand data from one extension
//! point to the next write it here; plugins that don't simply ignore it.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

type StateValue = Arc<dyn Any + Send + Sync>;

/// Typed key/value store scoped to one scheduling cycle.
#[derive(Default)]
pub struct CycleState {
    entries: RwLock<HashMap<String, StateValue>>,
}

impl CycleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub fn write<T: Any + Send + Sync>(&self, key: impl Into<String>, value: T) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.into(), Arc::new(value));
    }

    /// Read the entry under `key` if present and of type `T`.
    pub fn read<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()?.downcast::<T>().ok()
    }

    pub fn delete(&self, key: &str) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for CycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CycleState")
            .field("entries", &self.len())
            .finish()
    }
}
