//! CPU-side texture data for the gallery shader
//!
//! Every image is resampled into one square layer of a 2D texture array so a
//! single bind group covers the whole strip. The shader samples in source UV
//! space, which undoes the stretch.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use driftwall_core::LoadedImage;
use image::imageops::{self, FilterType};

use super::render_pipeline::MAX_SLOTS;

/// Edge length of each texture-array layer.
pub const LAYER_SIZE: u32 = 1024;

// Global counter for telling texture sets apart on the GPU side
static TEXTURE_SET_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Layer pixels plus the displacement map, ready for `write_texture`.
pub struct GalleryTextures {
    id: u64,
    layer_size: u32,
    layer_count: u32,
    layers: Vec<u8>,
    map_size: (u32, u32),
    map: Vec<u8>,
}

impl GalleryTextures {
    pub fn prepare(
        images: &[Arc<LoadedImage>],
        displacement_map: &LoadedImage,
    ) -> Self {
        Self::with_layer_size(images, displacement_map, LAYER_SIZE)
    }

    pub fn with_layer_size(
        images: &[Arc<LoadedImage>],
        displacement_map: &LoadedImage,
        layer_size: u32,
    ) -> Self {
        let layer_size = layer_size.max(1);
        if images.len() > MAX_SLOTS {
            log::warn!(
                "Gallery holds {} images; only the first {MAX_SLOTS} \
                 are rendered",
                images.len()
            );
        }

        let used = &images[..images.len().min(MAX_SLOTS)];
        let layer_bytes = (layer_size as usize).pow(2) * 4;
        let mut layers = Vec::with_capacity(layer_bytes * used.len());

        for image in used {
            let pixels = image.pixels();
            if pixels.dimensions() == (layer_size, layer_size) {
                layers.extend_from_slice(pixels.as_raw());
            } else {
                let resized = imageops::resize(
                    pixels,
                    layer_size,
                    layer_size,
                    FilterType::Triangle,
                );
                layers.extend_from_slice(resized.as_raw());
            }
        }

        let map = displacement_map.pixels();

        Self {
            id: TEXTURE_SET_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            layer_size,
            layer_count: used.len() as u32,
            layers,
            map_size: map.dimensions(),
            map: map.as_raw().clone(),
        }
    }

    /// Unique per texture set; the renderer re-uploads when it changes.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn layer_size(&self) -> u32 {
        self.layer_size
    }

    pub fn layer_count(&self) -> u32 {
        self.layer_count
    }

    /// Tightly packed RGBA8 layers, in strip order.
    pub fn layers(&self) -> &[u8] {
        &self.layers
    }

    pub fn map_size(&self) -> (u32, u32) {
        self.map_size
    }

    /// RGBA8 displacement map pixels.
    pub fn map(&self) -> &[u8] {
        &self.map
    }
}

impl fmt::Debug for GalleryTextures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryTextures")
            .field("id", &self.id)
            .field("layer_size", &self.layer_size)
            .field("layer_count", &self.layer_count)
            .field("map_size", &self.map_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn image(width: u32, height: u32, value: u8) -> Arc<LoadedImage> {
        Arc::new(LoadedImage::new(
            format!("{width}x{height}.png"),
            RgbaImage::from_pixel(
                width,
                height,
                Rgba([value, value, value, 255]),
            ),
        ))
    }

    #[test]
    fn layers_are_square_and_ordered() {
        let images =
            vec![image(40, 20, 10), image(16, 16, 200), image(8, 30, 90)];
        let map = LoadedImage::new("map.png", RgbaImage::new(32, 32));

        let textures = GalleryTextures::with_layer_size(&images, &map, 16);

        assert_eq!(textures.layer_count(), 3);
        assert_eq!(textures.layers().len(), 3 * 16 * 16 * 4);
        let layer = 16 * 16 * 4;
        assert_eq!(textures.layers()[0], 10);
        assert_eq!(textures.layers()[layer], 200);
        assert_eq!(textures.layers()[2 * layer], 90);
        assert_eq!(textures.map_size(), (32, 32));
        assert_eq!(textures.map().len(), 32 * 32 * 4);
    }

    #[test]
    fn layer_count_is_capped() {
        let images: Vec<_> =
            (0..MAX_SLOTS + 3).map(|_| image(4, 4, 1)).collect();
        let map = LoadedImage::new("map.png", RgbaImage::new(4, 4));

        let textures = GalleryTextures::with_layer_size(&images, &map, 4);
        assert_eq!(textures.layer_count() as usize, MAX_SLOTS);
    }

    #[test]
    fn every_set_gets_a_fresh_id() {
        let images = vec![image(4, 4, 1)];
        let map = LoadedImage::new("map.png", RgbaImage::new(4, 4));

        let a = GalleryTextures::with_layer_size(&images, &map, 4);
        let b = GalleryTextures::with_layer_size(&images, &map, 4);
        assert_ne!(a.id(), b.id());
    }
}
