// SPDX-License-Identifier: MPL-2.0
//! Category filtering for the gallery grid.
//!
//! [`FilterController`] owns the active filter and the visible subset derived
//! from it. The visible subset is recomputed, in catalog order, on every
//! activation and never mutated by anything else.

use crate::catalog::{Catalog, Category, ItemId};

/// The active filter: everything, or a single category tag.
///
/// Exactly one filter is active at a time; activating a new one fully
/// replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every catalog item.
    #[default]
    All,
    /// Show only items carrying this tag.
    Tag(Category),
}

impl CategoryFilter {
    /// Returns `true` if this filter matches the given category.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => tag == category,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

/// Result of a filter activation, split for the stage: which items just
/// became visible and which were filtered out. Both lists are in catalog
/// order and together cover the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub shown: Vec<ItemId>,
    pub hidden: Vec<ItemId>,
}

/// Owns the active filter and the derived visible subset.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterController {
    active: CategoryFilter,
    visible: Vec<ItemId>,
}

impl FilterController {
    /// Creates a controller with the default `All` filter: every item of the
    /// catalog is visible.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            active: CategoryFilter::All,
            visible: catalog.ids().collect(),
        }
    }

    /// Activates a filter, replacing the previous one, and recomputes the
    /// visible subset by scanning the catalog in order.
    ///
    /// An unknown tag simply yields an empty visible subset; there is no
    /// error condition.
    pub fn activate(&mut self, catalog: &Catalog, filter: CategoryFilter) -> FilterOutcome {
        let mut shown = Vec::new();
        let mut hidden = Vec::new();

        self.visible.clear();
        for (id, item) in catalog.iter() {
            if filter.matches(&item.category) {
                self.visible.push(id);
                shown.push(id);
            } else {
                hidden.push(id);
            }
        }
        self.active = filter;

        FilterOutcome { shown, hidden }
    }

    /// The currently active filter.
    #[must_use]
    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    /// The visible subset, in catalog order.
    #[must_use]
    pub fn visible(&self) -> &[ItemId] {
        &self.visible
    }

    /// Returns `true` if the item passes the active filter.
    #[must_use]
    pub fn is_visible(&self, id: ItemId) -> bool {
        self.visible.contains(&id)
    }

    /// Position of the item within the visible subset, if present.
    #[must_use]
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.visible.iter().position(|candidate| *candidate == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GalleryItem;
    use std::path::PathBuf;

    fn catalog(tags: &[&str]) -> Catalog {
        let items = tags
            .iter()
            .enumerate()
            .map(|(index, tag)| GalleryItem {
                category: Category::new(*tag),
                title: format!("item-{index}"),
                description: String::new(),
                image: PathBuf::from(format!("{index}.jpg")),
            })
            .collect();
        Catalog::new(items)
    }

    #[test]
    fn all_filter_matches_every_category() {
        let filter = CategoryFilter::All;
        assert!(filter.matches(&Category::new("nature")));
        assert!(filter.matches(&Category::new("city")));
        assert!(!filter.is_active());
    }

    #[test]
    fn tag_filter_matches_only_its_tag() {
        let filter = CategoryFilter::Tag(Category::new("nature"));
        assert!(filter.matches(&Category::new("nature")));
        assert!(!filter.matches(&Category::new("city")));
        assert!(filter.is_active());
    }

    #[test]
    fn new_controller_shows_whole_catalog() {
        let catalog = catalog(&["x", "y", "x"]);
        let controller = FilterController::new(&catalog);

        assert_eq!(controller.active(), &CategoryFilter::All);
        assert_eq!(controller.visible().len(), 3);
    }

    #[test]
    fn activate_recomputes_visible_in_catalog_order() {
        let catalog = catalog(&["x", "y", "x"]);
        let mut controller = FilterController::new(&catalog);

        let outcome = controller.activate(&catalog, CategoryFilter::Tag(Category::new("x")));

        let visible: Vec<usize> = controller.visible().iter().map(|id| id.index()).collect();
        assert_eq!(visible, vec![0, 2]);

        let shown: Vec<usize> = outcome.shown.iter().map(|id| id.index()).collect();
        let hidden: Vec<usize> = outcome.hidden.iter().map(|id| id.index()).collect();
        assert_eq!(shown, vec![0, 2]);
        assert_eq!(hidden, vec![1]);
    }

    #[test]
    fn activate_all_restores_whole_catalog() {
        let catalog = catalog(&["x", "y", "x"]);
        let mut controller = FilterController::new(&catalog);

        controller.activate(&catalog, CategoryFilter::Tag(Category::new("y")));
        let outcome = controller.activate(&catalog, CategoryFilter::All);

        assert_eq!(controller.visible().len(), catalog.len());
        assert_eq!(outcome.shown.len(), catalog.len());
        assert!(outcome.hidden.is_empty());
    }

    #[test]
    fn unknown_tag_yields_empty_visible_set() {
        let catalog = catalog(&["x", "y"]);
        let mut controller = FilterController::new(&catalog);

        let outcome = controller.activate(&catalog, CategoryFilter::Tag(Category::new("z")));

        assert!(controller.visible().is_empty());
        assert!(outcome.shown.is_empty());
        assert_eq!(outcome.hidden.len(), 2);
    }

    #[test]
    fn outcome_lists_are_disjoint_and_cover_catalog() {
        let catalog = catalog(&["x", "y", "z", "x", "y"]);
        let mut controller = FilterController::new(&catalog);

        let outcome = controller.activate(&catalog, CategoryFilter::Tag(Category::new("y")));

        assert_eq!(outcome.shown.len() + outcome.hidden.len(), catalog.len());
        for id in &outcome.shown {
            assert!(!outcome.hidden.contains(id));
        }
    }

    #[test]
    fn position_reports_index_within_visible_subset() {
        let catalog = catalog(&["x", "y", "x"]);
        let mut controller = FilterController::new(&catalog);
        controller.activate(&catalog, CategoryFilter::Tag(Category::new("x")));

        assert_eq!(controller.position(ItemId::new(0)), Some(0));
        assert_eq!(controller.position(ItemId::new(2)), Some(1));
        assert_eq!(controller.position(ItemId::new(1)), None);
        assert!(controller.is_visible(ItemId::new(2)));
        assert!(!controller.is_visible(ItemId::new(1)));
    }

    #[test]
    fn reactivating_same_filter_is_idempotent() {
        let catalog = catalog(&["x", "y"]);
        let mut controller = FilterController::new(&catalog);

        controller.activate(&catalog, CategoryFilter::Tag(Category::new("x")));
        let before = controller.visible().to_vec();
        controller.activate(&catalog, CategoryFilter::Tag(Category::new("x")));

        assert_eq!(controller.visible(), before.as_slice());
    }
}
