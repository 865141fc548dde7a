// SPDX-License-Identifier: MPL-2.0
//! The lightbox overlay: a dimmed backdrop with the current item's image,
//! caption, and close/previous/next controls.
//!
//! Clicks on the backdrop close the viewer; clicks inside the panel are
//! opaque. The overlay and content opacities come from the stage so open,
//! close, and content crossfades all render from the same visual state.

use crate::catalog::GalleryItem;
use crate::stage::ModalSnapshot;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, container, image, mouse_area, opaque, text, Column, Row};
use iced::{Color, ContentFit, Element, Length};

/// Messages emitted by the lightbox overlay.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ClosePressed,
    PrevPressed,
    NextPressed,
    BackdropPressed,
}

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub item: &'a GalleryItem,
    pub handle: Option<&'a image::Handle>,
    pub snapshot: ModalSnapshot,
}

/// Renders the modal overlay for stacking above the gallery.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content_alpha = ctx.snapshot.content_opacity;

    let picture: Element<'a, Message> = match ctx.handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(sizing::LIGHTBOX_IMAGE_HEIGHT)
            .content_fit(ContentFit::Contain)
            .opacity(content_alpha)
            .into(),
        None => container(text("Loading…").size(typography::BODY))
            .width(Length::Fill)
            .height(sizing::LIGHTBOX_IMAGE_HEIGHT)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::container::placeholder)
            .into(),
    };

    let viewer = Row::new()
        .push(nav_button("‹", Message::PrevPressed))
        .push(picture)
        .push(nav_button("›", Message::NextPressed))
        .spacing(spacing::SM)
        .align_y(iced::Alignment::Center);

    let title = text(ctx.item.title.as_str())
        .size(typography::TITLE)
        .style(move |theme: &iced::Theme| caption_style(theme, content_alpha, false));
    let description = text(ctx.item.description.as_str())
        .size(typography::CAPTION)
        .style(move |theme: &iced::Theme| caption_style(theme, content_alpha, true));

    let close_row = Row::new()
        .push(iced::widget::space::horizontal())
        .push(nav_button("✕", Message::ClosePressed));

    let panel = Column::new()
        .push(close_row)
        .push(viewer)
        .push(title)
        .push(description)
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .width(sizing::LIGHTBOX_WIDTH);

    let overlay_alpha = ctx.snapshot.overlay_opacity;
    opaque(
        mouse_area(
            center(opaque(
                container(panel).style(styles::container::modal_panel),
            ))
            .style(styles::container::backdrop(overlay_alpha)),
        )
        .on_press(Message::BackdropPressed),
    )
}

fn nav_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(typography::TITLE).color(palette::WHITE))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(message)
        .into()
}

fn caption_style(theme: &iced::Theme, alpha: f32, secondary: bool) -> text::Style {
    let extended = theme.extended_palette();
    let base = if secondary {
        extended.background.strong.text
    } else {
        extended.background.base.text
    };
    text::Style {
        color: Some(Color {
            a: base.a * alpha,
            ..base
        }),
    }
}
