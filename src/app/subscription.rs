// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard presses are always forwarded (the update loop ignores them
//! unless the lightbox is open). The animation tick only runs while the
//! stage actually has tweens or deferred actions outstanding, so an idle
//! gallery costs nothing.

use super::{App, Message};
use iced::{keyboard, time, Subscription};
use std::time::Duration;

/// Frame interval for the animation tick while the stage is animating.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    let keys = keyboard::listen().filter_map(|event| match event {
        keyboard::Event::KeyPressed { key, .. } => Some(Message::KeyPressed(key)),
        _ => None,
    });

    let tick = if app.stage.is_animating() {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    };

    Subscription::batch([keys, tick])
}
