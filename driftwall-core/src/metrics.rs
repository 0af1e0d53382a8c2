//! Viewport-derived strip metrics, computed once at startup.

use crate::config::GalleryConfig;
use crate::geometry::Size;

/// Slot and strip dimensions derived from the first measured viewport.
///
/// The strip is never re-laid out, so these stay fixed for the lifetime of the
/// gallery even if the window is resized afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Viewport the metrics were derived from.
    pub viewport: Size,
    /// Gap between slots.
    pub margin: f32,
    /// Width of every slot (and of its mask).
    pub slot_width: f32,
    /// Height of every slot (and of its mask).
    pub slot_height: f32,
    /// Number of slots in the strip.
    pub count: usize,
}

impl ViewportMetrics {
    /// Derive metrics for `count` slots laid across `viewport`.
    pub fn new(viewport: Size, count: usize, config: &GalleryConfig) -> Self {
        let margin = config.margin;
        let columns = config.visible_columns.max(1.0);
        let slot_width = ((viewport.width - 2.0 * margin) / columns).max(1.0);
        let slot_height = (viewport.height * config.height_ratio).max(1.0);

        Self {
            viewport,
            margin,
            slot_width,
            slot_height,
            count,
        }
    }

    /// Horizontal distance between the origins of two neighbouring slots.
    pub fn stride(&self) -> f32 {
        self.slot_width + self.margin
    }

    /// Total strip width: one stride per slot.
    pub fn strip_width(&self) -> f32 {
        self.count as f32 * self.stride()
    }

    /// Size of a slot's mask.
    pub fn slot_size(&self) -> Size {
        Size::new(self.slot_width, self.slot_height)
    }
}
