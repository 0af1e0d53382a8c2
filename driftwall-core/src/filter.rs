//! Displacement filter state
//!
//! The map is cover-fitted over the viewport once; each frame only the
//! horizontal strength changes. The renderer offsets every sample point by
//! `(map.rg - 0.5) * (scale_x, scale_y)`.

use crate::geometry::{Fit, Size};

/// Strength and placement of the displacement map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacementFilter {
    /// Intrinsic size of the displacement map.
    pub map_size: Size,
    /// Cover transform placing the map over the viewport.
    pub map_fit: Fit,
    /// Horizontal displacement strength (px at full map deflection).
    pub scale_x: f32,
    /// Vertical displacement strength; the gallery keeps it at zero.
    pub scale_y: f32,
}

impl DisplacementFilter {
    /// Fit a map of `map_size` over `viewport`, with no distortion at rest.
    pub fn new(map_size: Size, viewport: Size) -> Self {
        Self {
            map_size,
            map_fit: Fit::cover(map_size, viewport),
            scale_x: 0.0,
            scale_y: 0.0,
        }
    }

    /// Horizontal-only strength proportional to scroll speed, signed by
    /// `direction`.
    pub fn modulate(&mut self, direction: f32, scroll: f32, strength: f32) {
        self.scale_x = strength * direction * scroll.abs();
        self.scale_y = 0.0;
    }

    /// Normalized map coordinate under viewport point (`x`, `y`).
    pub fn map_uv(&self, x: f32, y: f32) -> (f32, f32) {
        let scaled = self.map_fit.scaled(self.map_size);
        (
            (x - self.map_fit.left) / scaled.width,
            (y - self.map_fit.top) / scaled.height,
        )
    }

    /// Whether any displacement is applied.
    pub fn is_active(&self) -> bool {
        self.scale_x != 0.0 || self.scale_y != 0.0
    }
}
