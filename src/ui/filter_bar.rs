// SPDX-License-Identifier: MPL-2.0
//! Filter bar sub-component: one button per category plus "All".

use crate::catalog::{Catalog, Category};
use crate::gallery::CategoryFilter;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row};
use iced::{Element, Length};

/// Filter bar state: the fixed button set derived from the catalog.
#[derive(Debug, Clone, Default)]
pub struct State {
    categories: Vec<Category>,
}

/// Messages emitted by the filter bar.
#[derive(Debug, Clone)]
pub enum Message {
    /// A filter button was pressed.
    Selected(CategoryFilter),
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Activate the chosen filter.
    Activate(CategoryFilter),
}

impl State {
    /// Derives the button set from the catalog: distinct categories in
    /// first-appearance order.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            categories: catalog.categories(),
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Handle a filter bar message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Selected(filter) => Effect::Activate(filter),
        }
    }

    /// Render the button row; the active filter gets the highlighted style.
    pub fn view(&self, active: &CategoryFilter) -> Element<'_, Message> {
        let mut row = Row::new().spacing(spacing::SM);

        row = row.push(filter_button(
            "All",
            CategoryFilter::All,
            *active == CategoryFilter::All,
        ));

        for category in &self.categories {
            let filter = CategoryFilter::Tag(category.clone());
            let is_active = *active == filter;
            row = row.push(filter_button(category.as_str(), filter, is_active));
        }

        container(row)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(spacing::MD)
            .into()
    }
}

fn filter_button(
    label: &str,
    filter: CategoryFilter,
    is_active: bool,
) -> Element<'_, Message> {
    let style = if is_active {
        styles::button::filter_active
    } else {
        styles::button::filter_inactive
    };

    button(text(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(style)
        .on_press(Message::Selected(filter))
        .into()
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
    fn buttons_follow_first_appearance_order() {
        let state = State::from_catalog(&catalog(&["city", "nature", "city", "portrait"]));
        let tags: Vec<&str> = state.categories().iter().map(Category::as_str).collect();
        assert_eq!(tags, vec!["city", "nature", "portrait"]);
    }

    #[test]
    fn selection_produces_activate_effect() {
        let mut state = State::from_catalog(&catalog(&["city"]));

        let effect = state.handle(Message::Selected(CategoryFilter::Tag(Category::new("city"))));
        let Effect::Activate(filter) = effect;
        assert_eq!(filter, CategoryFilter::Tag(Category::new("city")));
    }

    #[test]
    fn empty_catalog_still_offers_all() {
        let state = State::from_catalog(&Catalog::default());
        assert!(state.categories().is_empty());
        // The "All" button is unconditional in `view`; nothing to derive.
    }
}
