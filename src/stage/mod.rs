// SPDX-License-Identifier: MPL-2.0
//! The rendering boundary between the gallery state machines and the UI.
//!
//! [`Stage`] is the command capability set the controller drives: item
//! visibility, modal content, scroll locking, and lazy-load bookkeeping.
//! The production implementation is [`VisualStage`], which turns commands
//! into per-item visual attributes and time-based tweens sampled on the
//! animation tick; tests drive the controller against a recording fake
//! instead.

mod timeline;
mod visuals;

pub use timeline::{DeferredAction, Timeline};
pub use visuals::{ItemVisual, ModalSnapshot, VisualStage};

use crate::catalog::ItemId;
use std::time::Duration;

/// Command capabilities the gallery controller needs from its host.
///
/// Deferred effects (stagger delays, linger-then-remove) only ever touch
/// presentation attributes; implementations must not feed anything back
/// into the controller.
pub trait Stage {
    /// Schedule a fade-in for the item after `delay`.
    fn show_item(&mut self, id: ItemId, delay: Duration);

    /// Fade the item out now and remove it from the layout after `linger`.
    fn hide_item(&mut self, id: ItemId, linger: Duration);

    /// Render the modal viewer for the given item.
    fn present_modal(&mut self, id: ItemId);

    /// Hide the modal viewer.
    fn dismiss_modal(&mut self);

    /// Suppress background scrolling while the modal is up.
    fn lock_scroll(&mut self);

    /// Restore background scrolling.
    fn unlock_scroll(&mut self);

    /// Swap the item's placeholder for its real image source.
    fn begin_loading(&mut self, id: ItemId);

    /// Record that the item's pixels arrived.
    fn mark_loaded(&mut self, id: ItemId);
}
