// SPDX-License-Identifier: MPL-2.0
//! TOML manifest parsing for the gallery catalog.
//!
//! A manifest looks like:
//!
//! ```toml
//! title = "Street & Nature"
//!
//! [[items]]
//! category = "nature"
//! title = "Misty Forest"
//! description = "Early morning in the old growth."
//! image = "images/forest.jpg"
//! ```
//!
//! Relative image paths resolve against the manifest's directory.

use super::{Catalog, Category, GalleryItem};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Manifest {
    title: Option<String>,
    #[serde(default)]
    items: Vec<ManifestItem>,
}

#[derive(Debug, Deserialize)]
struct ManifestItem {
    category: String,
    title: String,
    #[serde(default)]
    description: String,
    image: PathBuf,
}

/// Loads and validates a catalog manifest.
pub fn load(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let manifest: Manifest =
        toml::from_str(&content).map_err(|err| Error::Manifest(err.to_string()))?;

    if manifest.items.is_empty() {
        return Err(Error::Manifest(format!(
            "{} describes no items",
            path.display()
        )));
    }

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let items = manifest
        .items
        .into_iter()
        .map(|item| GalleryItem {
            category: Category::new(item.category),
            title: item.title,
            description: item.description,
            image: resolve(base, item.image),
        })
        .collect();

    Ok(Catalog::with_title(manifest.title, items))
}

fn resolve(base: &Path, image: PathBuf) -> PathBuf {
    if image.is_absolute() {
        image
    } else {
        base.join(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_manifest(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("gallery.toml");
        let mut file = fs::File::create(&path).expect("failed to create manifest");
        file.write_all(content.as_bytes())
            .expect("failed to write manifest");
        path
    }

    #[test]
    fn loads_items_in_manifest_order() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(
            dir.path(),
            r#"
title = "Test Gallery"

[[items]]
category = "nature"
title = "Forest"
description = "Trees."
image = "images/forest.jpg"

[[items]]
category = "city"
title = "Skyline"
image = "images/skyline.jpg"
"#,
        );

        let catalog = load(&path).expect("load failed");
        assert_eq!(catalog.title(), Some("Test Gallery"));
        assert_eq!(catalog.len(), 2);

        let titles: Vec<&str> = catalog.iter().map(|(_, item)| item.title.as_str()).collect();
        assert_eq!(titles, vec!["Forest", "Skyline"]);
    }

    #[test]
    fn relative_image_paths_resolve_against_manifest_dir() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(
            dir.path(),
            r#"
[[items]]
category = "nature"
title = "Forest"
image = "images/forest.jpg"
"#,
        );

        let catalog = load(&path).expect("load failed");
        let (_, item) = catalog.iter().next().expect("item missing");
        assert_eq!(item.image, dir.path().join("images/forest.jpg"));
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(
            dir.path(),
            r#"
[[items]]
category = "city"
title = "Skyline"
image = "skyline.jpg"
"#,
        );

        let catalog = load(&path).expect("load failed");
        let (_, item) = catalog.iter().next().expect("item missing");
        assert_eq!(item.description, "");
    }

    #[test]
    fn empty_manifest_is_rejected() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(dir.path(), "title = \"Empty\"\n");

        let err = load(&path).expect_err("empty manifest should fail");
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn invalid_toml_is_a_manifest_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(dir.path(), "[[items]\ncategory = ");

        let err = load(&path).expect_err("invalid toml should fail");
        assert!(matches!(err, Error::Manifest(_)));
    }
}
