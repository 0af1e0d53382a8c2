//! GPU types for the gallery shader

use bytemuck::{Pod, Zeroable};
use driftwall_core::Thumbnail;

/// Slots the uniform block has room for.
pub const MAX_SLOTS: usize = 16;

/// One slot of the strip as seen by the fragment shader (48 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SlotUniform {
    /// Mask in widget-local space
    /// [x, y, width, height]
    pub rect: [f32; 4],

    /// Image placement inside the mask
    /// [cover.left, cover.top, cover.scale, hover scale]
    pub transform: [f32; 4],

    /// Source image
    /// [width, height, texture layer, unused]
    pub image: [f32; 4],
}

impl SlotUniform {
    pub fn from_thumbnail(thumb: &Thumbnail, layer: usize) -> Self {
        let size = thumb.image().size();
        Self {
            rect: [thumb.x, thumb.y, thumb.width, thumb.height],
            transform: [
                thumb.cover.left,
                thumb.cover.top,
                thumb.cover.scale,
                thumb.scale,
            ],
            image: [size.width, size.height, layer as f32, 0.0],
        }
    }
}

/// GPU uniform data for the gallery
///
/// Total size: 880 bytes (55 * 16 bytes, all 16-byte aligned)
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GalleryGlobals {
    /// Projection/transform matrix (offset 0, size 64)
    pub transform: [f32; 16],

    /// Widget bounds (offset 64, size 16)
    /// [bounds.x, bounds.y, bounds.width, bounds.height]
    pub bounds: [f32; 4],

    /// Filter parameters (offset 80, size 16)
    /// [scale_x, scale_y, slot_count, scale_factor]
    pub filter_params: [f32; 4],

    /// Displacement map placement in widget-local space (offset 96, size 16)
    /// [left, top, scaled width, scaled height]
    pub map: [f32; 4],

    /// Slots (offset 112, size 16 * 48)
    pub slots: [SlotUniform; MAX_SLOTS],
}

// Compile-time assertion to verify struct size
const _: () = assert!(
    std::mem::size_of::<GalleryGlobals>() == 880,
    "GalleryGlobals must be 880 bytes"
);

const _: () = assert!(
    std::mem::size_of::<SlotUniform>() == 48,
    "SlotUniform must be 48 bytes"
);
