// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the catalog, the gallery controller, the
//! visual stage, and the image loader, and translates messages into state
//! transitions and load tasks. Policy decisions (window sizing, default
//! manifest name, what happens on a broken manifest) stay close to the main
//! update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::config::{self, Config, Timings};
use crate::error::Error;
use crate::gallery::GalleryController;
use crate::loader::ImageLoader;
use crate::stage::VisualStage;
use crate::ui::filter_bar;
use crate::ui::theme::ThemeMode;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Manifest file looked up in the working directory when none is given.
const DEFAULT_MANIFEST: &str = "gallery.toml";

/// Root Iced application state.
pub struct App {
    catalog: Catalog,
    gallery: GalleryController,
    stage: VisualStage,
    loader: ImageLoader,
    filter_bar: filter_bar::State,
    timings: Timings,
    config: Config,
    theme_mode: ThemeMode,
    /// Current scroll offset of the gallery scrollable.
    scroll_offset: f32,
    /// Height of the gallery viewport, updated from scroll events.
    viewport_height: f32,
    /// Why the catalog failed to load, if it did (renders the empty state).
    load_error: Option<Error>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.catalog.len())
            .field("filter", self.gallery.active_filter())
            .field("lightbox", &self.gallery.lightbox_state())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let catalog = Catalog::default();
        let timings = Timings::default();
        Self {
            gallery: GalleryController::new(&catalog, timings),
            stage: VisualStage::new(0, timings),
            loader: ImageLoader::new(0),
            filter_bar: filter_bar::State::from_catalog(&catalog),
            catalog,
            timings,
            config: Config::default(),
            theme_mode: ThemeMode::default(),
            scroll_offset: 0.0,
            viewport_height: WINDOW_DEFAULT_HEIGHT as f32,
            load_error: None,
        }
    }
}

impl App {
    /// Builds the application state from CLI flags and kicks off the initial
    /// entrance reveal and image loads.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.clone().map(PathBuf::from));
        if let Some(warning) = config_warning {
            warn!("{warning}");
        }

        let manifest_path = flags
            .manifest_path
            .clone()
            .unwrap_or_else(|| DEFAULT_MANIFEST.to_string());

        let (catalog, load_error) = match Catalog::load(&PathBuf::from(&manifest_path)) {
            Ok(catalog) => {
                info!(items = catalog.len(), manifest = %manifest_path, "catalog loaded");
                (catalog, None)
            }
            Err(err) => {
                warn!(manifest = %manifest_path, error = %err, "failed to load catalog");
                (Catalog::default(), Some(err))
            }
        };

        let timings = config.timings();
        let mut app = Self {
            gallery: GalleryController::new(&catalog, timings),
            stage: VisualStage::new(catalog.len(), timings),
            loader: ImageLoader::new(catalog.len()),
            filter_bar: filter_bar::State::from_catalog(&catalog),
            catalog,
            timings,
            theme_mode: config.general.theme_mode,
            config,
            scroll_offset: 0.0,
            viewport_height: WINDOW_DEFAULT_HEIGHT as f32,
            load_error,
        };

        let task = update::startup(&mut app);
        (app, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    pub fn title(&self) -> String {
        self.catalog
            .title()
            .unwrap_or("Iced Gallery")
            .to_string()
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
