// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface of one gallery card. The hover variant brightens the border,
/// standing in for the original's brightness filter.
pub fn card(hovered: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let base = extended.background.weak.color;

        container::Style {
            background: Some(Background::Color(base)),
            border: Border {
                color: if hovered {
                    palette::PRIMARY_400
                } else {
                    Color::TRANSPARENT
                },
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: if hovered { shadow::MD } else { shadow::SM },
            ..container::Style::default()
        }
    }
}

/// Dimmed backdrop behind the lightbox. Opacity follows the modal fade.
pub fn backdrop(progress: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG * progress,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// Surface of the lightbox content panel.
pub fn modal_panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Placeholder surface shown while an image has not loaded yet.
pub fn placeholder(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.strong.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::PLACEHOLDER,
            ..base
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
