// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::ItemId;
use crate::error::Error;
use crate::loader::ImageData;
use crate::ui::{filter_bar, grid, lightbox_view};
use iced::widget::scrollable;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    FilterBar(filter_bar::Message),
    Grid(grid::Message),
    Lightbox(lightbox_view::Message),
    /// A key was pressed anywhere in the window.
    KeyPressed(iced::keyboard::Key),
    /// The gallery scrollable reported a new viewport.
    Scrolled(scrollable::Viewport),
    /// Periodic tick driving deferred actions and tweens.
    Tick(Instant),
    /// Result of an async image decode.
    ImageLoaded {
        id: ItemId,
        result: Result<ImageData, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to the gallery manifest (defaults to `gallery.toml`).
    pub manifest_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
