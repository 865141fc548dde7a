// SPDX-License-Identifier: MPL-2.0
//! Message dispatch for the application.
//!
//! Every user interaction lands here, becomes a gallery-controller
//! transition plus stage commands, and may spawn image decode tasks. The
//! keyboard only acts while the lightbox is open, and scroll events are
//! ignored while it suppresses background scrolling.

use super::{App, Message};
use crate::catalog::ItemId;
use crate::loader;
use crate::stage::Stage;
use crate::ui::{filter_bar, grid, lightbox_view};
use iced::keyboard;
use iced::Task;
use std::time::Duration;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::FilterBar(msg) => {
            let filter_bar::Effect::Activate(filter) = app.filter_bar.handle(msg);
            app.gallery
                .activate_filter(&app.catalog, filter, &mut app.stage);
            // Items that just came (back) into the layout may never have
            // been on screen before; fetch the ones now in view.
            load_visible(app)
        }
        Message::Grid(grid::Message::Pressed(id)) => {
            app.gallery.open_item(id, &mut app.stage);
            request_loads(app, &[id])
        }
        Message::Grid(grid::Message::HoverEntered(id)) => {
            app.stage.set_hover(id, true);
            Task::none()
        }
        Message::Grid(grid::Message::HoverExited(id)) => {
            app.stage.set_hover(id, false);
            Task::none()
        }
        Message::Lightbox(msg) => match msg {
            lightbox_view::Message::ClosePressed | lightbox_view::Message::BackdropPressed => {
                app.gallery.close_lightbox(&mut app.stage);
                Task::none()
            }
            lightbox_view::Message::NextPressed => {
                app.gallery.next(&mut app.stage);
                load_current(app)
            }
            lightbox_view::Message::PrevPressed => {
                app.gallery.prev(&mut app.stage);
                load_current(app)
            }
        },
        Message::KeyPressed(key) => {
            // Keyboard navigation only acts on an open lightbox.
            if !app.gallery.is_lightbox_open() {
                return Task::none();
            }
            match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    app.gallery.close_lightbox(&mut app.stage);
                    Task::none()
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                    app.gallery.next(&mut app.stage);
                    load_current(app)
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    app.gallery.prev(&mut app.stage);
                    load_current(app)
                }
                _ => Task::none(),
            }
        }
        Message::Scrolled(viewport) => {
            // Background scrolling is suppressed while the lightbox is up.
            if app.stage.scroll_locked() {
                return Task::none();
            }
            app.scroll_offset = viewport.absolute_offset().y;
            app.viewport_height = viewport.bounds().height;
            reveal_visible(app);
            load_visible(app)
        }
        Message::Tick(now) => {
            app.stage.tick(now);
            Task::none()
        }
        Message::ImageLoaded { id, result } => {
            app.loader.complete(id, result);
            if app.loader.handle(id).is_some() {
                app.stage.mark_loaded(id);
            }
            Task::none()
        }
    }
}

/// Initial entrance reveal and image loads, run once from `App::new`.
pub(super) fn startup(app: &mut App) -> Task<Message> {
    if app.catalog.is_empty() {
        return Task::none();
    }

    // Stagger the entrance for the rows in the initial viewport; items
    // further down reveal when they scroll into view.
    let ids = ids_in_view(app);
    for (position, id) in ids.iter().enumerate() {
        app.stage
            .show_item(*id, app.timings.entrance_stagger * position as u32);
    }

    if app.config.lazy_loading() {
        request_loads(app, &ids)
    } else {
        let all: Vec<ItemId> = app.catalog.ids().collect();
        request_loads(app, &all)
    }
}

/// Items currently laid out, in catalog order.
fn in_layout_ids(app: &App) -> Vec<ItemId> {
    app.stage
        .visuals()
        .filter(|(_, visual)| visual.in_layout)
        .map(|(id, _)| id)
        .collect()
}

/// Laid-out items whose rows intersect the viewport (plus preload margin).
fn ids_in_view(app: &App) -> Vec<ItemId> {
    let in_layout = in_layout_ids(app);
    let total_rows = in_layout.len().div_ceil(grid::COLUMNS);
    let rows = grid::visible_row_range(
        app.scroll_offset,
        app.viewport_height,
        app.config.preload_rows(),
        total_rows,
    );
    grid::items_in_rows(&in_layout, rows)
}

/// Entrance reveal for items that just scrolled into view.
fn reveal_visible(app: &mut App) {
    for id in ids_in_view(app) {
        if !app.stage.is_revealed(id) {
            app.stage.show_item(id, Duration::ZERO);
        }
    }
}

/// Requests decodes for the in-view items that are still placeholders.
fn load_visible(app: &mut App) -> Task<Message> {
    if !app.config.lazy_loading() {
        return Task::none();
    }
    let ids = ids_in_view(app);
    request_loads(app, &ids)
}

/// Requests a decode for the item the lightbox is showing.
fn load_current(app: &mut App) -> Task<Message> {
    match app.gallery.current_item() {
        Some(id) => request_loads(app, &[id]),
        None => Task::none(),
    }
}

/// Spawns a decode task per item that has not been requested yet.
fn request_loads(app: &mut App, ids: &[ItemId]) -> Task<Message> {
    let mut tasks = Vec::new();
    for id in ids {
        if !app.loader.begin(*id) {
            continue;
        }
        app.stage.begin_loading(*id);
        if let Some(item) = app.catalog.get(*id) {
            let path = item.image.clone();
            let id = *id;
            tasks.push(Task::perform(loader::load_image(path), move |result| {
                Message::ImageLoaded { id, result }
            }));
        }
    }
    Task::batch(tasks)
}
