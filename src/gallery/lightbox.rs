// SPDX-License-Identifier: MPL-2.0
//! The lightbox state machine: which visible item the modal viewer shows.
//!
//! The lightbox never holds a copy of the visible subset; every operation
//! borrows it from the caller. Navigation is circular in both directions,
//! and every invalid input degrades to a silent no-op.

use crate::catalog::ItemId;

/// Modal viewer state: closed, or open at an index into the visible subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    /// Index into the visible subset as of the last transition.
    Open(usize),
}

/// Step-navigates the modal viewer through the visible subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> LightboxState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    /// The item currently on display, if the lightbox is open and its index
    /// still falls inside the given visible subset.
    #[must_use]
    pub fn current(&self, visible: &[ItemId]) -> Option<ItemId> {
        match self.state {
            LightboxState::Closed => None,
            LightboxState::Open(index) => visible.get(index).copied(),
        }
    }

    /// Opens the lightbox on `item`, which must be a member of `visible`.
    ///
    /// Returns the item's position on success. An item absent from the
    /// visible subset is invalid input: the lightbox is forced `Closed`
    /// (the sentinel outcome) and `None` is returned, so a caller can never
    /// observe an out-of-range index.
    pub fn open(&mut self, visible: &[ItemId], item: ItemId) -> Option<usize> {
        match visible.iter().position(|candidate| *candidate == item) {
            Some(position) => {
                self.state = LightboxState::Open(position);
                Some(position)
            }
            None => {
                self.state = LightboxState::Closed;
                None
            }
        }
    }

    /// Closes the lightbox. Returns `true` if it was open; closing an
    /// already-closed lightbox is a no-op.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = LightboxState::Closed;
        was_open
    }

    /// Steps to the next visible item, wrapping at the end.
    ///
    /// No-op (returns `None`) while closed or when the visible subset is
    /// empty; the state is left unchanged in both cases.
    pub fn next(&mut self, visible: &[ItemId]) -> Option<usize> {
        self.step(visible, Step::Forward)
    }

    /// Steps to the previous visible item, wrapping at the start.
    ///
    /// Symmetric to [`Lightbox::next`].
    pub fn prev(&mut self, visible: &[ItemId]) -> Option<usize> {
        self.step(visible, Step::Backward)
    }

    fn step(&mut self, visible: &[ItemId], direction: Step) -> Option<usize> {
        let LightboxState::Open(index) = self.state else {
            return None;
        };
        if visible.is_empty() {
            return None;
        }

        let len = visible.len();
        let next = match direction {
            Step::Forward => (index + 1) % len,
            Step::Backward => (index + len - 1) % len,
        };
        self.state = LightboxState::Open(next);
        Some(next)
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Forward,
    Backward,
}
