// SPDX-License-Identifier: MPL-2.0
//! Gallery state: category filtering, the lightbox state machine, and the
//! controller facade that turns user intents into state transitions plus
//! stage commands.

mod controller;
mod filter;
mod lightbox;

pub use controller::GalleryController;
pub use filter::{CategoryFilter, FilterController, FilterOutcome};
pub use lightbox::{Lightbox, LightboxState};
