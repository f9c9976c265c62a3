//! Completion store
//!
//! Holds the done flag of every registered item behind a single mutation
//! entry point. Readers only ever receive owned snapshots.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::errors::{PriorAuthError, Result};
use crate::registry::{self, ITEMS, ITEM_COUNT};
use crate::schemas::Item;

/// Immutable view of the done flag of every item.
///
/// Always holds exactly one entry per registered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSnapshot {
    done: HashMap<&'static str, bool>,
}

impl CompletionSnapshot {
    /// Snapshot with every item not done
    pub fn empty() -> Self {
        Self::from_flags([false; ITEM_COUNT])
    }

    /// Snapshot with every item done
    pub fn all_done() -> Self {
        Self::from_flags([true; ITEM_COUNT])
    }

    /// Build a snapshot from flags given in registry order
    pub fn from_flags(flags: [bool; ITEM_COUNT]) -> Self {
        let done = ITEMS
            .iter()
            .zip(flags)
            .map(|(item, flag)| (item.id, flag))
            .collect();
        CompletionSnapshot { done }
    }

    /// Build a snapshot where exactly the given items are done.
    ///
    /// # Errors
    /// * `UnknownItem` - If any id is not registered
    pub fn with_done<'a>(ids: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut snapshot = Self::empty();
        for id in ids {
            let item = registry::require_item(id)?;
            snapshot.done.insert(item.id, true);
        }
        Ok(snapshot)
    }

    /// Whether the item is done. Unregistered ids are never done.
    pub fn is_done(&self, id: &str) -> bool {
        self.done.get(id).copied().unwrap_or(false)
    }

    /// Number of items marked done
    pub fn done_count(&self) -> usize {
        self.done.values().filter(|done| **done).count()
    }

    /// Flags in registry order
    pub fn flags(&self) -> [bool; ITEM_COUNT] {
        let mut flags = [false; ITEM_COUNT];
        for (slot, item) in flags.iter_mut().zip(ITEMS) {
            *slot = self.is_done(item.id);
        }
        flags
    }

    /// Items paired with their done flag, in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&'static Item, bool)> + '_ {
        ITEMS.iter().map(move |item| (item, self.is_done(item.id)))
    }

    fn flip(&mut self, id: &str) -> Result<bool> {
        let flag = self
            .done
            .get_mut(id)
            .ok_or_else(|| PriorAuthError::UnknownItem(id.to_string()))?;
        *flag = !*flag;
        Ok(*flag)
    }
}

impl Default for CompletionSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for CompletionSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ITEM_COUNT))?;
        for (item, done) in self.iter() {
            map.serialize_entry(item.id, &done)?;
        }
        map.end()
    }
}

/// Owner of the session's completion state
#[derive(Debug, Default)]
pub struct CompletionStore {
    state: CompletionSnapshot,
}

impl CompletionStore {
    /// Create a store with every item not done
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the done flag of one item and return its new value.
    ///
    /// # Errors
    /// * `UnknownItem` - If the id is not registered; state is left unchanged
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        match self.state.flip(id) {
            Ok(done) => {
                tracing::debug!(item = id, done, "toggled item");
                Ok(done)
            }
            Err(e) => {
                tracing::warn!(item = id, "rejected toggle of unknown item");
                Err(e)
            }
        }
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> CompletionSnapshot {
        self.state.clone()
    }
}
