// SPDX-License-Identifier: MPL-2.0
//! Production [`Stage`] implementation: per-item visual attributes with
//! time-based tweens, modal visuals, and scroll locking.
//!
//! Commands only ever *start* animations; the app's tick subscription calls
//! [`VisualStage::tick`] to advance them. Core gallery state is never read
//! or written here.

use super::timeline::{DeferredAction, Timeline};
use super::Stage;
use crate::catalog::ItemId;
use crate::config::Timings;
use std::time::{Duration, Instant};

/// The animatable attributes of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pose {
    opacity: f32,
    offset_y: f32,
    scale: f32,
}

/// Before the entrance reveal: transparent, shifted down.
const POSE_ENTRANCE: Pose = Pose {
    opacity: 0.0,
    offset_y: 20.0,
    scale: 1.0,
};

/// Fully visible.
const POSE_SHOWN: Pose = Pose {
    opacity: 1.0,
    offset_y: 0.0,
    scale: 1.0,
};

/// Filtered out: transparent, shifted down, slightly shrunk.
const POSE_FILTERED_OUT: Pose = Pose {
    opacity: 0.0,
    offset_y: 20.0,
    scale: 0.8,
};

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: Pose,
    to: Pose,
    start: Instant,
    duration: Duration,
}

impl Tween {
    fn sample(&self, now: Instant) -> (Pose, bool) {
        let elapsed = now.saturating_duration_since(self.start);
        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.to, true);
        }
        let t = ease_out(elapsed.as_secs_f32() / self.duration.as_secs_f32());
        let pose = Pose {
            opacity: lerp(self.from.opacity, self.to.opacity, t),
            offset_y: lerp(self.from.offset_y, self.to.offset_y, t),
            scale: lerp(self.from.scale, self.to.scale, t),
        };
        (pose, false)
    }
}

/// Rendered state of one gallery item.
#[derive(Debug, Clone)]
pub struct ItemVisual {
    pose: Pose,
    tween: Option<Tween>,
    /// Whether the item currently occupies grid space.
    pub in_layout: bool,
    /// Pointer is over the cell (hover highlight).
    pub hovered: bool,
    /// The real image source has been requested (placeholder swapped).
    pub loading: bool,
    /// Pixels have arrived.
    pub loaded: bool,
    /// Entrance reveal has been triggered at least once.
    pub revealed: bool,
}

impl ItemVisual {
    fn new() -> Self {
        Self {
            pose: POSE_ENTRANCE,
            tween: None,
            in_layout: true,
            hovered: false,
            loading: false,
            loaded: false,
            revealed: false,
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.pose.opacity
    }

    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.pose.offset_y
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.pose.scale
    }

    fn tween_to(&mut self, target: Pose, now: Instant, duration: Duration) {
        self.tween = Some(Tween {
            from: self.pose,
            to: target,
            start: now,
            duration,
        });
    }

    /// Advances the tween. Returns `true` while still animating.
    fn advance(&mut self, now: Instant) -> bool {
        if let Some(tween) = self.tween {
            let (pose, done) = tween.sample(now);
            self.pose = pose;
            if done {
                self.tween = None;
            }
            return !done;
        }
        false
    }
}

/// One animated scalar of the modal (overlay opacity, content opacity).
#[derive(Debug, Clone, Copy)]
struct Channel {
    current: f32,
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    animating: bool,
}

impl Channel {
    fn at(value: f32, now: Instant) -> Self {
        Self {
            current: value,
            from: value,
            to: value,
            start: now,
            duration: Duration::ZERO,
            animating: false,
        }
    }

    fn fade_to(&mut self, target: f32, now: Instant, duration: Duration) {
        self.from = self.current;
        self.to = target;
        self.start = now;
        self.duration = duration;
        self.animating = true;
    }

    fn advance(&mut self, now: Instant) -> bool {
        if !self.animating {
            return false;
        }
        let elapsed = now.saturating_duration_since(self.start);
        if self.duration.is_zero() || elapsed >= self.duration {
            self.current = self.to;
            self.animating = false;
            return false;
        }
        let t = ease_out(elapsed.as_secs_f32() / self.duration.as_secs_f32());
        self.current = lerp(self.from, self.to, t);
        true
    }
}

#[derive(Debug, Clone)]
struct ModalVisual {
    item: ItemId,
    overlay: Channel,
    content: Channel,
    closing: bool,
}

/// Read-only view of the modal for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalSnapshot {
    pub item: ItemId,
    pub overlay_opacity: f32,
    pub content_opacity: f32,
    pub closing: bool,
}

/// Per-item visuals, the deferred-action timeline, and modal state.
#[derive(Debug, Clone)]
pub struct VisualStage {
    visuals: Vec<ItemVisual>,
    timeline: Timeline,
    modal: Option<ModalVisual>,
    scroll_locked: bool,
    timings: Timings,
}

impl VisualStage {
    /// Creates visuals for `len` items, all in their pre-entrance pose.
    #[must_use]
    pub fn new(len: usize, timings: Timings) -> Self {
        Self {
            visuals: (0..len).map(|_| ItemVisual::new()).collect(),
            timeline: Timeline::new(),
            modal: None,
            scroll_locked: false,
            timings,
        }
    }

    #[must_use]
    pub fn visual(&self, id: ItemId) -> Option<&ItemVisual> {
        self.visuals.get(id.index())
    }

    /// Iterates `(id, visual)` pairs in catalog order.
    pub fn visuals(&self) -> impl Iterator<Item = (ItemId, &ItemVisual)> {
        self.visuals
            .iter()
            .enumerate()
            .map(|(index, visual)| (ItemId::new(index), visual))
    }

    #[must_use]
    pub fn modal(&self) -> Option<ModalSnapshot> {
        self.modal.as_ref().map(|modal| ModalSnapshot {
            item: modal.item,
            overlay_opacity: modal.overlay.current,
            content_opacity: modal.content.current,
            closing: modal.closing,
        })
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[must_use]
    pub fn is_revealed(&self, id: ItemId) -> bool {
        self.visual(id).is_some_and(|visual| visual.revealed)
    }

    pub fn set_hover(&mut self, id: ItemId, hovered: bool) {
        if let Some(visual) = self.visuals.get_mut(id.index()) {
            visual.hovered = hovered;
        }
    }

    /// Whether any tween or deferred action is still outstanding. The app
    /// only runs its tick subscription while this is `true`.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.timeline.is_empty()
            || self.visuals.iter().any(|visual| visual.tween.is_some())
            || self.modal.as_ref().is_some_and(|modal| {
                modal.overlay.animating || modal.content.animating || modal.closing
            })
    }

    /// Runs due deferred actions and advances every tween.
    pub fn tick(&mut self, now: Instant) {
        for (id, action) in self.timeline.drain_due(now) {
            let Some(visual) = self.visuals.get_mut(id.index()) else {
                continue;
            };
            match action {
                DeferredAction::BeginFadeIn => {
                    visual.tween_to(POSE_SHOWN, now, self.timings.fade);
                }
                DeferredAction::RemoveFromLayout => {
                    visual.in_layout = false;
                    visual.tween = None;
                }
            }
        }

        for visual in &mut self.visuals {
            visual.advance(now);
        }

        let mut clear_modal = false;
        if let Some(modal) = &mut self.modal {
            modal.overlay.advance(now);
            modal.content.advance(now);
            clear_modal = modal.closing && !modal.overlay.animating;
        }
        if clear_modal {
            self.modal = None;
        }
    }
}

impl Stage for VisualStage {
    fn show_item(&mut self, id: ItemId, delay: Duration) {
        let now = Instant::now();
        let Some(visual) = self.visuals.get_mut(id.index()) else {
            return;
        };
        visual.in_layout = true;
        visual.revealed = true;
        // Supersedes a pending removal for the same item, if any.
        self.timeline
            .schedule(id, now + delay, DeferredAction::BeginFadeIn);
    }

    fn hide_item(&mut self, id: ItemId, linger: Duration) {
        let now = Instant::now();
        let Some(visual) = self.visuals.get_mut(id.index()) else {
            return;
        };
        visual.tween_to(POSE_FILTERED_OUT, now, self.timings.fade.min(linger));
        self.timeline
            .schedule(id, now + linger, DeferredAction::RemoveFromLayout);
    }

    fn present_modal(&mut self, id: ItemId) {
        let now = Instant::now();
        match &mut self.modal {
            // Already open: keep the overlay, crossfade the content.
            Some(modal) if !modal.closing => {
                modal.item = id;
                modal.content = Channel::at(0.0, now);
                modal.content.fade_to(1.0, now, self.timings.crossfade);
            }
            _ => {
                let mut overlay = Channel::at(0.0, now);
                overlay.fade_to(1.0, now, self.timings.modal_fade);
                let mut content = Channel::at(0.0, now);
                content.fade_to(1.0, now, self.timings.modal_fade);
                self.modal = Some(ModalVisual {
                    item: id,
                    overlay,
                    content,
                    closing: false,
                });
            }
        }
    }

    fn dismiss_modal(&mut self) {
        let now = Instant::now();
        if let Some(modal) = &mut self.modal {
            modal.closing = true;
            modal.overlay.fade_to(0.0, now, self.timings.modal_fade);
        }
    }

    fn lock_scroll(&mut self) {
        self.scroll_locked = true;
    }

    fn unlock_scroll(&mut self) {
        self.scroll_locked = false;
    }

    fn begin_loading(&mut self, id: ItemId) {
        if let Some(visual) = self.visuals.get_mut(id.index()) {
            visual.loading = true;
        }
    }

    fn mark_loaded(&mut self, id: ItemId) {
        if let Some(visual) = self.visuals.get_mut(id.index()) {
            visual.loaded = true;
        }
    }
}
