// SPDX-License-Identifier: MPL-2.0
//! The gallery grid: cards for every item currently in the layout.
//!
//! Cells animate through their [`ItemVisual`] attributes (opacity, vertical
//! offset, scale); items filtered out of the layout simply do not render.
//! The grid also owns the geometry used to translate a scroll offset into
//! the set of rows considered "in view" for lazy loading and the scroll
//! reveal.

use crate::catalog::{Catalog, ItemId};
use crate::loader::ImageLoader;
use crate::stage::{ItemVisual, VisualStage};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::header::HEADER_HEIGHT;
use crate::ui::styles;
use iced::widget::{button, container, image, mouse_area, text, Column, Row};
use iced::{Color, ContentFit, Element, Length, Padding};
use std::ops::Range;

/// Cards per row.
pub const COLUMNS: usize = 3;

/// Vertical gap between rows.
pub const ROW_SPACING: f32 = spacing::LG;

/// Messages emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A card was clicked.
    Pressed(ItemId),
    /// The pointer entered a card.
    HoverEntered(ItemId),
    /// The pointer left a card.
    HoverExited(ItemId),
}

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub stage: &'a VisualStage,
    pub loader: &'a ImageLoader,
}

/// Rows of the grid whose cards intersect the viewport, extended downward
/// by `preload_rows`. Used for lazy loading and the scroll reveal; the grid
/// sits below the header inside the scrollable.
#[must_use]
pub fn visible_row_range(
    scroll_offset: f32,
    viewport_height: f32,
    preload_rows: u32,
    total_rows: usize,
) -> Range<usize> {
    if total_rows == 0 {
        return 0..0;
    }

    let row_stride = sizing::CARD_HEIGHT + ROW_SPACING;
    let grid_top = HEADER_HEIGHT;

    let visible_top = (scroll_offset - grid_top).max(0.0);
    let visible_bottom = (scroll_offset + viewport_height - grid_top).max(0.0);

    let first = (visible_top / row_stride).floor() as usize;
    let last = (visible_bottom / row_stride).ceil() as usize + preload_rows as usize;

    first.min(total_rows)..last.min(total_rows)
}

/// Ids of the items laid out in the given rows, in catalog order.
#[must_use]
pub fn items_in_rows(in_layout: &[ItemId], rows: Range<usize>) -> Vec<ItemId> {
    let start = rows.start * COLUMNS;
    let end = (rows.end * COLUMNS).min(in_layout.len());
    if start >= end {
        return Vec::new();
    }
    in_layout[start..end].to_vec()
}

/// Renders every item currently in the layout as a wrapped grid of cards.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let in_layout: Vec<(ItemId, &ItemVisual)> = ctx
        .stage
        .visuals()
        .filter(|(_, visual)| visual.in_layout)
        .collect();

    let mut rows = Column::new().spacing(ROW_SPACING);
    for chunk in in_layout.chunks(COLUMNS) {
        let mut row = Row::new().spacing(spacing::LG);
        for &(id, visual) in chunk {
            row = row.push(card(&ctx, id, visual));
        }
        rows = rows.push(row);
    }

    container(rows)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(Padding {
            bottom: spacing::XL,
            ..Padding::ZERO
        })
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, id: ItemId, visual: &ItemVisual) -> Element<'a, Message> {
    let Some(item) = ctx.catalog.get(id) else {
        return container(text("")).into();
    };

    let alpha = visual.opacity();
    let scale = visual.scale();

    let picture: Element<'a, Message> = match ctx.loader.handle(id) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(sizing::CARD_IMAGE_HEIGHT * scale)
            .content_fit(ContentFit::Cover)
            .opacity(alpha)
            .into(),
        None => {
            let caption = if visual.loading { "Loading…" } else { "" };
            container(text(caption).size(typography::CAPTION))
                .width(Length::Fill)
                .height(sizing::CARD_IMAGE_HEIGHT * scale)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(styles::container::placeholder)
                .into()
        }
    };

    let title = text(item.title.as_str())
        .size(typography::TITLE)
        .style(move |theme: &iced::Theme| faded_text(theme, alpha, false));
    let description = text(item.description.as_str())
        .size(typography::CAPTION)
        .style(move |theme: &iced::Theme| faded_text(theme, alpha, true));

    let content = Column::new()
        .push(picture)
        .push(title)
        .push(description)
        .spacing(spacing::XS)
        .padding(spacing::SM);

    let hovered = visual.hovered;
    let surface = container(content)
        .width(sizing::CARD_WIDTH * scale)
        .height(sizing::CARD_HEIGHT * scale)
        .style(styles::container::card(hovered));

    // The vertical offset of the entrance/filter tween; the cell keeps its
    // full height so rows don't jump while items animate.
    let cell = container(surface)
        .width(sizing::CARD_WIDTH)
        .height(sizing::CARD_HEIGHT)
        .padding(Padding {
            top: visual.offset_y().max(0.0),
            ..Padding::ZERO
        });

    mouse_area(
        button(cell)
            .padding(0.0)
            .style(styles::button::card)
            .on_press(Message::Pressed(id)),
    )
    .on_enter(Message::HoverEntered(id))
    .on_exit(Message::HoverExited(id))
    .into()
}

fn faded_text(theme: &iced::Theme, alpha: f32, secondary: bool) -> text::Style {
    let palette = theme.extended_palette();
    let base = if secondary {
        palette.background.strong.text
    } else {
        palette.background.base.text
    };
    text::Style {
        color: Some(Color {
            a: base.a * alpha,
            ..base
        }),
    }
}
