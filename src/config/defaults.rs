// SPDX-License-Identifier: MPL-2.0
//! Default values and valid ranges for configuration settings.

/// Per-item delay applied to the entrance reveal at startup (milliseconds).
pub const DEFAULT_ENTRANCE_STAGGER_MS: u64 = 100;

/// Per-item delay applied when a filter change fades items back in (milliseconds).
pub const DEFAULT_FILTER_STAGGER_MS: u64 = 50;

/// How long a filtered-out item lingers (fading) before it leaves the layout.
pub const DEFAULT_HIDE_DELAY_MS: u64 = 400;

/// Duration of item fade/translate tweens.
pub const DEFAULT_FADE_MS: u64 = 600;

/// Duration of the lightbox open/close fade.
pub const DEFAULT_MODAL_FADE_MS: u64 = 300;

/// Duration of the lightbox content crossfade on next/previous.
pub const DEFAULT_CROSSFADE_MS: u64 = 150;

/// Fraction of the scroll offset applied to the header for the parallax effect.
pub const DEFAULT_PARALLAX_FACTOR: f32 = 0.3;

/// Whether images load lazily as their rows scroll into view.
pub const DEFAULT_LAZY_LOADING: bool = true;

/// Number of off-screen rows to preload below the viewport.
pub const DEFAULT_PRELOAD_ROWS: u32 = 1;

/// Upper bound for stagger and delay settings so a misconfigured file
/// cannot freeze the gallery for seconds per item.
pub const MAX_STAGGER_MS: u64 = 2_000;

/// Upper bound for tween durations.
pub const MAX_FADE_MS: u64 = 5_000;

/// Valid range for the parallax factor.
pub const MIN_PARALLAX_FACTOR: f32 = 0.0;
pub const MAX_PARALLAX_FACTOR: f32 = 1.0;
