// SPDX-License-Identifier: MPL-2.0
//! The event-facing facade over the filter and lightbox state machines.
//!
//! Every operation applies the state transition and issues the matching
//! [`Stage`] commands, so event handlers stay one-liners and the whole flow
//! is testable against a recording stage without a renderer.
//!
//! Policy decisions live here rather than in the state machines:
//! - activating a filter while the lightbox is open closes it first, so a
//!   stale index into the new visible subset is never observable;
//! - an `open` on an item outside the visible subset dismisses any open
//!   modal and leaves the lightbox closed.

use super::filter::{CategoryFilter, FilterController};
use super::lightbox::{Lightbox, LightboxState};
use crate::catalog::{Catalog, ItemId};
use crate::config::Timings;
use crate::stage::Stage;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct GalleryController {
    filter: FilterController,
    lightbox: Lightbox,
    timings: Timings,
}

impl GalleryController {
    #[must_use]
    pub fn new(catalog: &Catalog, timings: Timings) -> Self {
        Self {
            filter: FilterController::new(catalog),
            lightbox: Lightbox::new(),
            timings,
        }
    }

    /// The visible subset, in catalog order.
    #[must_use]
    pub fn visible(&self) -> &[ItemId] {
        self.filter.visible()
    }

    #[must_use]
    pub fn active_filter(&self) -> &CategoryFilter {
        self.filter.active()
    }

    #[must_use]
    pub fn lightbox_state(&self) -> LightboxState {
        self.lightbox.state()
    }

    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_open()
    }

    /// The item the lightbox currently shows, if open.
    #[must_use]
    pub fn current_item(&self) -> Option<ItemId> {
        self.lightbox.current(self.filter.visible())
    }

    /// Activates a filter: closes the lightbox if it is open, recomputes the
    /// visible subset, and stages the show/hide animations. Matching items
    /// fade in with a per-item stagger keyed on catalog position (as the
    /// grid animates top to bottom); the rest fade out and leave the layout
    /// after the configured linger.
    pub fn activate_filter(
        &mut self,
        catalog: &Catalog,
        filter: CategoryFilter,
        stage: &mut impl Stage,
    ) {
        if self.lightbox.close() {
            stage.dismiss_modal();
            stage.unlock_scroll();
        }

        debug!(filter = ?filter, "activating filter");
        let outcome = self.filter.activate(catalog, filter);

        for id in &outcome.shown {
            let delay = self.timings.filter_stagger * id.index() as u32;
            stage.show_item(*id, delay);
        }
        for id in &outcome.hidden {
            stage.hide_item(*id, self.timings.hide_delay);
        }
    }

    /// Opens the lightbox on a visible item and locks background scrolling.
    ///
    /// An item outside the visible subset is invalid input: the lightbox
    /// ends up `Closed`, and a modal that happened to be open is dismissed.
    pub fn open_item(&mut self, id: ItemId, stage: &mut impl Stage) {
        let was_open = self.lightbox.is_open();
        match self.lightbox.open(self.filter.visible(), id) {
            Some(position) => {
                debug!(item = id.index(), position, "lightbox open");
                stage.present_modal(id);
                stage.lock_scroll();
            }
            None => {
                debug!(item = id.index(), "lightbox open rejected: not visible");
                if was_open {
                    stage.dismiss_modal();
                    stage.unlock_scroll();
                }
            }
        }
    }

    /// Closes the lightbox and restores scrolling. No-op if already closed.
    pub fn close_lightbox(&mut self, stage: &mut impl Stage) {
        if self.lightbox.close() {
            stage.dismiss_modal();
            stage.unlock_scroll();
        }
    }

    /// Steps to the next visible item, wrapping at the end. No-op while
    /// closed or when the visible subset is empty.
    pub fn next(&mut self, stage: &mut impl Stage) {
        let visible = self.filter.visible();
        if let Some(position) = self.lightbox.next(visible) {
            stage.present_modal(visible[position]);
        }
    }

    /// Steps to the previous visible item, wrapping at the start.
    pub fn prev(&mut self, stage: &mut impl Stage) {
        let visible = self.filter.visible();
        if let Some(position) = self.lightbox.prev(visible) {
            stage.present_modal(visible[position]);
        }
    }
}
