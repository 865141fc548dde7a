// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the scrollable page (header, filter bar, grid) and stacks the
//! lightbox overlay on top while the stage has a modal up.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{grid, header, lightbox_view};
use iced::widget::{container, scrollable, text, Column, Stack};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    if let Some(err) = &app.load_error {
        return empty_state(err);
    }

    let parallax = app.scroll_offset * app.timings.parallax_factor;
    let title = app.catalog.title().unwrap_or("Gallery");

    let page = Column::new()
        .push(header::view(title, parallax))
        .push(
            app.filter_bar
                .view(app.gallery.active_filter())
                .map(Message::FilterBar),
        )
        .push(
            grid::view(grid::ViewContext {
                catalog: &app.catalog,
                stage: &app.stage,
                loader: &app.loader,
            })
            .map(Message::Grid),
        )
        .width(Length::Fill);

    let base: Element<'_, Message> = scrollable(page)
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    // While the stage has a modal up (including the closing fade), stack
    // the lightbox overlay on top of the page.
    let modal = app
        .stage
        .modal()
        .and_then(|snapshot| app.catalog.get(snapshot.item).map(|item| (snapshot, item)));

    match modal {
        Some((snapshot, item)) => Stack::new()
            .push(base)
            .push(
                lightbox_view::view(lightbox_view::ViewContext {
                    item,
                    handle: app.loader.handle(snapshot.item),
                    snapshot,
                })
                .map(Message::Lightbox),
            )
            .into(),
        None => base,
    }
}

fn empty_state(err: &crate::error::Error) -> Element<'_, Message> {
    let content = Column::new()
        .push(text("No gallery to show").size(typography::HEADER))
        .push(text(err.to_string()).size(typography::BODY))
        .push(text("Pass a manifest path: iced_gallery path/to/gallery.toml").size(typography::CAPTION))
        .spacing(spacing::MD)
        .align_x(iced::Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
