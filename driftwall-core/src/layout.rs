//! Strip construction: one masked, cover-fitted slot per image.

use std::sync::Arc;

use crate::config::GalleryConfig;
use crate::geometry::{Fit, Rect};
use crate::loader::LoadedImage;
use crate::metrics::ViewportMetrics;

/// One slot of the strip.
///
/// The slot owns its mask (the `width` x `height` rectangle at `x`, `y`) and
/// the transform of its inner visual; the image itself is shared.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    image: Arc<LoadedImage>,
    /// Horizontal position, rewritten every frame by the wraparound.
    pub x: f32,
    /// Vertical position, fixed after layout.
    pub y: f32,
    /// Mask width.
    pub width: f32,
    /// Mask height.
    pub height: f32,
    /// Cover transform of the image inside the mask.
    pub cover: Fit,
    /// Inner scale around the image center, driven by hover tweens.
    pub scale: f32,
}

impl Thumbnail {
    /// Shared source image.
    pub fn image(&self) -> &Arc<LoadedImage> {
        &self.image
    }

    /// Mask rectangle in viewport space, used for clipping and hit-testing.
    pub fn mask(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Map a point in slot-local space back to source pixel coordinates,
    /// undoing the cover transform and the hover scale.
    pub fn source_point(&self, local_x: f32, local_y: f32) -> (f32, f32) {
        let size = self.image.size();
        let (cx, cy) = (size.width / 2.0, size.height / 2.0);
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };

        let ix = (local_x - self.cover.left) / self.cover.scale;
        let iy = (local_y - self.cover.top) / self.cover.scale;
        (cx + (ix - cx) / scale, cy + (iy - cy) / scale)
    }
}

/// Lay out `images` left to right, in input order.
pub fn build_strip(
    images: &[Arc<LoadedImage>],
    metrics: &ViewportMetrics,
    config: &GalleryConfig,
) -> Vec<Thumbnail> {
    let slot = metrics.slot_size();
    let y = metrics.slot_height / config.vertical_offset_divisor;

    images
        .iter()
        .enumerate()
        .map(|(index, image)| Thumbnail {
            image: Arc::clone(image),
            x: index as f32 * metrics.stride(),
            y,
            width: slot.width,
            height: slot.height,
            cover: Fit::cover(image.size(), slot),
            scale: config.rest_scale,
        })
        .collect()
}
