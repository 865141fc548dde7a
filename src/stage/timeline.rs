// SPDX-License-Identifier: MPL-2.0
//! Deferred visual actions, keyed by item identity.
//!
//! The original widget fired independent timers per transition and let a
//! superseding transition race the stale ones. Here every pending action is
//! keyed by [`ItemId`]: scheduling for an item first cancels that item's
//! pending actions, so only the latest transition's side effects ever run.

use crate::catalog::ItemId;
use std::time::Instant;

/// What to do with an item when its deadline arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Start the fade-in tween (after a stagger delay).
    BeginFadeIn,
    /// Take the fully faded-out item out of the layout.
    RemoveFromLayout,
}

#[derive(Debug, Clone)]
struct Entry {
    id: ItemId,
    due: Instant,
    action: DeferredAction,
}

/// Pending deferred actions, at most one per item.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    entries: Vec<Entry>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an action for an item, cancelling any action already
    /// pending for the same item.
    pub fn schedule(&mut self, id: ItemId, due: Instant, action: DeferredAction) {
        self.cancel(id);
        self.entries.push(Entry { id, due, action });
    }

    /// Cancels the pending action for an item, if any.
    pub fn cancel(&mut self, id: ItemId) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Removes and returns every action whose deadline has passed, in
    /// deadline order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<(ItemId, DeferredAction)> {
        let mut due: Vec<Entry> = Vec::new();
        self.entries.retain(|entry| {
            if entry.due <= now {
                due.push(entry.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| entry.due);
        due.into_iter().map(|entry| (entry.id, entry.action)).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
