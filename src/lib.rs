// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a filterable image gallery with a lightbox viewer,
//! built with the Iced GUI framework.
//!
//! A fixed catalog of captioned images is loaded from a TOML manifest,
//! presented as a grid that filters by category, and viewed one item at a
//! time in a modal lightbox with circular keyboard/button navigation.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.2.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod loader;
pub mod stage;
pub mod ui;
