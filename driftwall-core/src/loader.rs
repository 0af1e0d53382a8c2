//! Order-preserving image preloading
//!
//! Images are read and decoded concurrently, so they finish in arbitrary
//! order. [`LoadTracker`] slots each completion by its input index and hands
//! back the complete, input-ordered set exactly once.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use image::RgbaImage;

use crate::error::LoadError;
use crate::geometry::Size;

/// A decoded image, shared between the layout and the renderer.
#[derive(Debug)]
pub struct LoadedImage {
    source: PathBuf,
    pixels: RgbaImage,
}

impl LoadedImage {
    /// Wrap already-decoded pixels.
    pub fn new(source: impl Into<PathBuf>, pixels: RgbaImage) -> Self {
        Self {
            source: source.into(),
            pixels,
        }
    }

    /// Path the image was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Decoded RGBA8 pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Intrinsic pixel size.
    pub fn size(&self) -> Size {
        let (width, height) = self.pixels.dimensions();
        Size::new(width as f32, height as f32)
    }
}

/// Collects out-of-order completions and releases them in input order once.
#[derive(Debug)]
pub struct LoadTracker<T> {
    slots: Vec<Option<T>>,
    remaining: usize,
    fired: bool,
}

impl<T> LoadTracker<T> {
    /// Track `len` pending loads.
    pub fn new(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
            remaining: len,
            fired: false,
        }
    }

    /// Loads still outstanding.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Record completion of load `index`.
    ///
    /// Returns the full ordered set on the completion that fills the last
    /// slot and `None` on every other call, including duplicate or
    /// out-of-range indices and anything arriving after the set was released.
    pub fn complete(&mut self, index: usize, item: T) -> Option<Vec<T>> {
        if self.fired {
            log::warn!("load {index} completed after the set was released");
            return None;
        }

        let Some(slot) = self.slots.get_mut(index) else {
            log::warn!("load index {index} out of range");
            return None;
        };

        if slot.is_some() {
            log::warn!("load {index} completed twice; keeping the first");
            return None;
        }

        *slot = Some(item);
        self.remaining -= 1;

        if self.remaining > 0 {
            return None;
        }

        self.fired = true;
        Some(
            std::mem::take(&mut self.slots)
                .into_iter()
                .flatten()
                .collect(),
        )
    }
}

/// Read and decode a single image on the blocking pool.
pub async fn load_image(
    path: impl AsRef<Path>,
) -> Result<LoadedImage, LoadError> {
    let path = path.as_ref().to_path_buf();

    let bytes = tokio::fs::read(&path).await.map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    let decode_path = path.clone();
    let decoded = tokio::task::spawn_blocking(move || {
        image::load_from_memory(&bytes)
            .map(|image| image.to_rgba8())
            .map_err(|source| LoadError::Decode {
                path: decode_path,
                source,
            })
    })
    .await
    .map_err(|source| LoadError::Task {
        path: path.clone(),
        source,
    })??;

    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(LoadError::ZeroSized { path });
    }

    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        decoded.width(),
        decoded.height()
    );

    Ok(LoadedImage::new(path, decoded))
}

/// Load every path concurrently and return the images in input order.
///
/// The first failure aborts the whole set; remaining loads are dropped.
pub async fn load_images<P>(
    paths: &[P],
) -> Result<Vec<Arc<LoadedImage>>, LoadError>
where
    P: AsRef<Path>,
{
    if paths.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut tracker = LoadTracker::new(paths.len());
    let mut pending: FuturesUnordered<_> = paths
        .iter()
        .enumerate()
        .map(|(index, path)| async move { (index, load_image(path).await) })
        .collect();

    while let Some((index, result)) = pending.next().await {
        let image = Arc::new(result?);
        if let Some(ordered) = tracker.complete(index, image) {
            log::info!("loaded {} images", ordered.len());
            return Ok(ordered);
        }
    }

    Err(LoadError::Incomplete {
        remaining: tracker.remaining(),
    })
}
