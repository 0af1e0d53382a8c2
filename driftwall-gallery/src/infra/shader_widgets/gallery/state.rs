//! State types for the gallery widget

use std::sync::Arc;

use driftwall_core::Gallery;
use iced::{Rectangle, advanced::graphics::Viewport};

use super::render_pipeline::{GalleryGlobals, MAX_SLOTS, SlotUniform};
use super::textures::GalleryTextures;

/// Interaction state stored per-widget instance
#[derive(Debug, Clone, Default)]
pub struct GalleryProgramState {
    /// Whether the viewport size has been published
    pub measured: bool,
    /// Slot under the cursor, as last published
    pub hovered: Option<usize>,
}

/// Snapshot of one gallery frame, owned by the primitive
#[derive(Debug, Clone)]
pub struct Scene {
    pub textures: Arc<GalleryTextures>,
    pub slots: Vec<SlotUniform>,
    /// [scale_x, scale_y]
    pub displacement: [f32; 2],
    /// [left, top, scaled width, scaled height]
    pub map: [f32; 4],
}

impl Scene {
    pub fn capture(gallery: &Gallery, textures: &Arc<GalleryTextures>) -> Self {
        let count = gallery
            .thumbnails()
            .len()
            .min(textures.layer_count() as usize);

        let slots = gallery.thumbnails()[..count]
            .iter()
            .enumerate()
            .map(|(layer, thumb)| SlotUniform::from_thumbnail(thumb, layer))
            .collect();

        let filter = gallery.filter();
        let scaled = filter.map_fit.scaled(filter.map_size);

        Self {
            textures: Arc::clone(textures),
            slots,
            displacement: [filter.scale_x, filter.scale_y],
            map: [
                filter.map_fit.left,
                filter.map_fit.top,
                scaled.width,
                scaled.height,
            ],
        }
    }

    /// Build GPU globals for this frame
    ///
    /// # Arguments
    /// * `viewport` - The viewport for projection matrix and scale factor
    /// * `bounds` - Widget bounds in viewport space
    pub fn globals(
        &self,
        viewport: &Viewport,
        bounds: &Rectangle,
    ) -> GalleryGlobals {
        let mut slots = [SlotUniform::default(); MAX_SLOTS];
        let count = self.slots.len().min(MAX_SLOTS);
        slots[..count].copy_from_slice(&self.slots[..count]);

        GalleryGlobals {
            transform: viewport.projection().into(),
            bounds: [bounds.x, bounds.y, bounds.width, bounds.height],
            filter_params: [
                self.displacement[0],
                self.displacement[1],
                count as f32,
                viewport.scale_factor() as f32,
            ],
            map: self.map,
            slots,
        }
    }
}
