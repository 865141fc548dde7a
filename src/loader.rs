// SPDX-License-Identifier: MPL-2.0
//! Lazy image loading for the gallery grid.
//!
//! Every item starts out as a placeholder. When its row scrolls into view
//! the app requests a load; decoding happens off the update loop and the
//! result comes back as a message. Decoded handles are kept for the process
//! lifetime (the catalog is small and fixed), so an item only ever loads
//! once.

use crate::catalog::ItemId;
use crate::error::Result;
use iced::widget::image;
use std::path::PathBuf;
use tracing::debug;

/// A decoded image ready for the renderer.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Load lifecycle of one item's image.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Not requested yet; the cell renders its placeholder.
    #[default]
    Pending,
    /// A decode task is in flight.
    Loading,
    /// Pixels arrived.
    Ready(ImageData),
    /// Decoding failed; the cell keeps its placeholder.
    Failed,
}

/// Tracks the load state of every catalog item.
#[derive(Debug, Clone, Default)]
pub struct ImageLoader {
    states: Vec<LoadState>,
}

impl ImageLoader {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            states: (0..len).map(|_| LoadState::default()).collect(),
        }
    }

    #[must_use]
    pub fn state(&self, id: ItemId) -> Option<&LoadState> {
        self.states.get(id.index())
    }

    /// The decoded handle, once ready.
    #[must_use]
    pub fn handle(&self, id: ItemId) -> Option<&image::Handle> {
        match self.state(id) {
            Some(LoadState::Ready(data)) => Some(&data.handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self, id: ItemId) -> bool {
        matches!(self.state(id), Some(LoadState::Pending))
    }

    /// Marks the item as loading. Returns `true` only on the first request,
    /// so callers can use it to decide whether to spawn a decode task.
    pub fn begin(&mut self, id: ItemId) -> bool {
        match self.states.get_mut(id.index()) {
            Some(state @ LoadState::Pending) => {
                *state = LoadState::Loading;
                true
            }
            _ => false,
        }
    }

    /// Records a finished decode.
    pub fn complete(&mut self, id: ItemId, result: Result<ImageData>) {
        let Some(state) = self.states.get_mut(id.index()) else {
            return;
        };
        match result {
            Ok(data) => {
                debug!(item = id.index(), width = data.width, height = data.height, "image ready");
                *state = LoadState::Ready(data);
            }
            Err(err) => {
                tracing::warn!(item = id.index(), error = %err, "image load failed");
                *state = LoadState::Failed;
            }
        }
    }
}

/// Reads and decodes an image file into an RGBA handle.
///
/// Runs on the async executor; the result re-enters the update loop as a
/// message.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a decodable image.
pub async fn load_image(path: PathBuf) -> Result<ImageData> {
    let bytes = std::fs::read(&path)?;
    let decoded = image_rs::load_from_memory(&bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn items_start_pending() {
        let loader = ImageLoader::new(2);
        assert!(loader.is_pending(ItemId::new(0)));
        assert!(loader.handle(ItemId::new(0)).is_none());
    }

    #[test]
    fn begin_transitions_only_once() {
        let mut loader = ImageLoader::new(1);
        let id = ItemId::new(0);

        assert!(loader.begin(id));
        assert!(!loader.begin(id));
        assert!(!loader.is_pending(id));
    }

    #[test]
    fn complete_stores_the_handle() {
        let mut loader = ImageLoader::new(1);
        let id = ItemId::new(0);
        loader.begin(id);

        loader.complete(id, Ok(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])));
        assert!(loader.handle(id).is_some());
        assert!(matches!(loader.state(id), Some(LoadState::Ready(_))));
    }

    #[test]
    fn failure_keeps_the_placeholder() {
        let mut loader = ImageLoader::new(1);
        let id = ItemId::new(0);
        loader.begin(id);

        loader.complete(id, Err(Error::Image("corrupt".into())));
        assert!(matches!(loader.state(id), Some(LoadState::Failed)));
        assert!(loader.handle(id).is_none());
        // A failed item is not retried.
        assert!(!loader.begin(id));
    }

    #[test]
    fn out_of_range_ids_are_ignored() {
        let mut loader = ImageLoader::new(1);
        assert!(!loader.begin(ItemId::new(5)));
        loader.complete(ItemId::new(5), Err(Error::Image("ignored".into())));
        assert!(loader.state(ItemId::new(5)).is_none());
    }

    #[tokio::test]
    async fn load_image_decodes_a_real_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("pixel.png");
        image_rs::RgbaImage::from_pixel(2, 3, image_rs::Rgba([10, 20, 30, 255]))
            .save(&path)
            .expect("failed to write test image");

        let data = load_image(path).await.expect("decode failed");
        assert_eq!((data.width, data.height), (2, 3));
    }

    #[tokio::test]
    async fn load_image_reports_missing_file() {
        let err = load_image(PathBuf::from("/nonexistent/image.png"))
            .await
            .expect_err("missing file should fail");
        assert!(matches!(err, Error::Io(_)));
    }

    #[tokio::test]
    async fn load_image_reports_undecodable_bytes() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"definitely not pixels").expect("write failed");

        let err = load_image(path).await.expect_err("garbage should fail");
        assert!(matches!(err, Error::Image(_)));
    }
}
