//! Configuration for the gallery engine
//!
//! Runtime copy of [`crate::constants`].

use std::time::Duration;

use crate::tween::Easing;

/// Tunables for layout, scroll physics and hover feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryConfig {
    /// Gap between slots (logical px).
    pub margin: f32,
    /// Slots visible across the viewport.
    pub visible_columns: f32,
    /// Slot height relative to the viewport height.
    pub height_ratio: f32,
    /// Divisor applied to the slot height for the strip's top offset.
    pub vertical_offset_divisor: f32,
    /// Per-frame easing of scroll toward its target.
    pub ease_factor: f32,
    /// Per-frame decay of the eased scroll.
    pub decay: f32,
    /// Divisor turning a wheel delta into a scroll target.
    pub wheel_divisor: f32,
    /// Filter strength per unit of scroll.
    pub filter_strength: f32,
    /// Edge length of the square displacement map.
    pub displacement_map_size: f32,
    /// Inner scale while hovered.
    pub hover_scale: f32,
    /// Inner scale at rest.
    pub rest_scale: f32,
    /// Hover tween duration.
    pub hover_duration: Duration,
    /// Hover tween easing.
    pub hover_easing: Easing,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        use crate::constants::{filter, hover, layout, scroll};
        Self {
            margin: layout::MARGIN,
            visible_columns: layout::VISIBLE_COLUMNS,
            height_ratio: layout::HEIGHT_RATIO,
            vertical_offset_divisor: layout::VERTICAL_OFFSET_DIVISOR,
            ease_factor: scroll::EASE_FACTOR,
            decay: scroll::DECAY,
            wheel_divisor: scroll::WHEEL_DIVISOR,
            filter_strength: filter::STRENGTH,
            displacement_map_size: filter::MAP_SIZE,
            hover_scale: hover::SCALE,
            rest_scale: hover::REST_SCALE,
            hover_duration: Duration::from_millis(hover::DURATION_MS),
            hover_easing: Easing::EaseOut,
        }
    }
}
