// SPDX-License-Identifier: MPL-2.0
//! Gallery header with a scroll-driven parallax offset.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{container, text, Column};
use iced::{Element, Length, Padding};

/// Fixed height of the header area inside the scrollable.
pub const HEADER_HEIGHT: f32 = 140.0;

/// Renders the gallery title. `parallax_offset` pushes the text down as the
/// page scrolls, at a fraction of the scroll offset, so the header appears
/// to move slower than the content.
pub fn view<'a, Message: 'a>(title: &'a str, parallax_offset: f32) -> Element<'a, Message> {
    let content = Column::new()
        .push(text(title).size(typography::HEADER))
        .spacing(spacing::SM);

    container(content)
        .width(Length::Fill)
        .height(HEADER_HEIGHT)
        .center_x(Length::Fill)
        .padding(Padding {
            top: spacing::XL + parallax_offset.max(0.0),
            ..Padding::ZERO
        })
        .into()
}
