// SPDX-License-Identifier: MPL-2.0
use iced_gallery::catalog::{Catalog, Category, ItemId};
use iced_gallery::config::{self, Config, Timings};
use iced_gallery::gallery::{CategoryFilter, GalleryController, LightboxState};
use iced_gallery::stage::VisualStage;
use iced_gallery::ui::theme::ThemeMode;
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn write_manifest(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("gallery.toml");
    fs::write(
        &path,
        r#"
title = "Integration Gallery"

[[items]]
category = "nature"
title = "Forest"
description = "Trees in fog."
image = "images/forest.jpg"

[[items]]
category = "city"
title = "Skyline"
description = "Dusk over downtown."
image = "images/skyline.jpg"

[[items]]
category = "nature"
title = "River"
description = "Spring melt."
image = "images/river.jpg"
"#,
    )
    .expect("failed to write manifest");
    path
}

#[test]
fn manifest_to_lightbox_round_trip() {
    let dir = tempdir().expect("failed to create temp dir");
    let catalog = Catalog::load(&write_manifest(dir.path())).expect("catalog load failed");
    assert_eq!(catalog.title(), Some("Integration Gallery"));
    assert_eq!(catalog.len(), 3);

    let timings = Timings::default();
    let mut gallery = GalleryController::new(&catalog, timings);
    let mut stage = VisualStage::new(catalog.len(), timings);

    // Filter down to "nature": Forest (0) and River (2) stay visible.
    gallery.activate_filter(
        &catalog,
        CategoryFilter::Tag(Category::new("nature")),
        &mut stage,
    );
    let visible: Vec<usize> = gallery.visible().iter().map(|id| id.index()).collect();
    assert_eq!(visible, vec![0, 2]);

    // The filtered-out item fades and leaves the layout after the linger.
    stage.tick(Instant::now() + Duration::from_secs(30));
    assert!(!stage.visual(ItemId::new(1)).unwrap().in_layout);
    assert!(stage.visual(ItemId::new(0)).unwrap().in_layout);

    // Open River, wrap forward to Forest, wrap back to River.
    gallery.open_item(ItemId::new(2), &mut stage);
    assert_eq!(gallery.lightbox_state(), LightboxState::Open(1));
    assert!(stage.scroll_locked());
    assert_eq!(stage.modal().unwrap().item, ItemId::new(2));

    gallery.next(&mut stage);
    assert_eq!(gallery.lightbox_state(), LightboxState::Open(0));
    assert_eq!(stage.modal().unwrap().item, ItemId::new(0));

    gallery.prev(&mut stage);
    assert_eq!(gallery.lightbox_state(), LightboxState::Open(1));
    assert_eq!(stage.modal().unwrap().item, ItemId::new(2));

    // Close: scroll unlocks immediately, the modal fades out then clears.
    gallery.close_lightbox(&mut stage);
    assert_eq!(gallery.lightbox_state(), LightboxState::Closed);
    assert!(!stage.scroll_locked());
    assert!(stage.modal().unwrap().closing);

    stage.tick(Instant::now() + Duration::from_secs(30));
    assert!(stage.modal().is_none());
}

#[test]
fn filter_change_closes_an_open_lightbox() {
    let dir = tempdir().expect("failed to create temp dir");
    let catalog = Catalog::load(&write_manifest(dir.path())).expect("catalog load failed");

    let timings = Timings::default();
    let mut gallery = GalleryController::new(&catalog, timings);
    let mut stage = VisualStage::new(catalog.len(), timings);

    gallery.open_item(ItemId::new(1), &mut stage);
    assert!(gallery.is_lightbox_open());

    gallery.activate_filter(
        &catalog,
        CategoryFilter::Tag(Category::new("nature")),
        &mut stage,
    );

    assert_eq!(gallery.lightbox_state(), LightboxState::Closed);
    assert!(!stage.scroll_locked());
}

#[test]
fn unknown_category_empties_the_gallery_safely() {
    let dir = tempdir().expect("failed to create temp dir");
    let catalog = Catalog::load(&write_manifest(dir.path())).expect("catalog load failed");

    let timings = Timings::default();
    let mut gallery = GalleryController::new(&catalog, timings);
    let mut stage = VisualStage::new(catalog.len(), timings);

    gallery.activate_filter(
        &catalog,
        CategoryFilter::Tag(Category::new("underwater")),
        &mut stage,
    );
    assert!(gallery.visible().is_empty());

    // Opening and navigating with nothing visible must not reach an Open
    // state or stage a modal.
    gallery.open_item(ItemId::new(0), &mut stage);
    gallery.next(&mut stage);
    gallery.prev(&mut stage);
    assert_eq!(gallery.lightbox_state(), LightboxState::Closed);
    assert!(stage.modal().is_none());

    // Everything is hidden once the linger passes.
    stage.tick(Instant::now() + Duration::from_secs(30));
    for id in catalog.ids() {
        assert!(!stage.visual(id).unwrap().in_layout);
    }
}

#[test]
fn full_cycle_returns_to_the_starting_item() {
    let dir = tempdir().expect("failed to create temp dir");
    let catalog = Catalog::load(&write_manifest(dir.path())).expect("catalog load failed");

    let timings = Timings::default();
    let mut gallery = GalleryController::new(&catalog, timings);
    let mut stage = VisualStage::new(catalog.len(), timings);

    gallery.open_item(ItemId::new(1), &mut stage);
    let start = gallery.lightbox_state();

    for _ in 0..catalog.len() {
        gallery.next(&mut stage);
    }
    assert_eq!(gallery.lightbox_state(), start);

    for _ in 0..catalog.len() {
        gallery.prev(&mut stage);
    }
    assert_eq!(gallery.lightbox_state(), start);
}

#[test]
fn config_round_trips_through_a_custom_directory() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Light;
    config.animation.filter_stagger_ms = Some(75);
    config.loading.lazy = Some(false);

    config::save_to_path(&config, &path).expect("save failed");
    let loaded = config::load_from_path(&path).expect("load failed");

    assert_eq!(loaded, config);
    assert_eq!(
        loaded.timings().filter_stagger,
        Duration::from_millis(75)
    );
    assert!(!loaded.lazy_loading());
}
