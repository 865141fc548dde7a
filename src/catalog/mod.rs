// SPDX-License-Identifier: MPL-2.0
//! The gallery catalog: the fixed, ordered list of items on display.
//!
//! A [`Catalog`] is loaded once from a TOML manifest at startup and never
//! changes afterwards. Items are addressed by [`ItemId`], an index newtype
//! that stays valid for the process lifetime. Filtering and navigation work
//! on ids; only the view resolves them back to item data.

mod manifest;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A category tag attached to each gallery item.
///
/// Tags are compared case-sensitively, matching the manifest verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a catalog item: its position in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the item in the catalog.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single gallery entry as described by the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    /// Category tag used by the filter bar.
    pub category: Category,
    /// Caption title shown on the card and in the lightbox.
    pub title: String,
    /// Longer caption shown under the title.
    pub description: String,
    /// Image file, resolved against the manifest directory.
    pub image: PathBuf,
}

/// The ordered, immutable set of gallery items.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    title: Option<String>,
    items: Vec<GalleryItem>,
}

impl Catalog {
    /// Creates a catalog directly from items (used by tests and benches;
    /// the application loads from a manifest instead).
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { title: None, items }
    }

    /// Loads a catalog from a TOML manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// describes no items.
    pub fn load(path: &Path) -> Result<Self> {
        manifest::load(path)
    }

    pub(crate) fn with_title(title: Option<String>, items: Vec<GalleryItem>) -> Self {
        Self { title, items }
    }

    /// Gallery title from the manifest, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.get(id.index())
    }

    /// Iterates over item ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        (0..self.items.len()).map(ItemId::new)
    }

    /// Iterates over `(id, item)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &GalleryItem)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemId::new(index), item))
    }

    /// Distinct categories in first-appearance order, for the filter bar.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category) {
                seen.push(item.category.clone());
            }
        }
        seen
    }
}
