//! Gallery tuning constants
//!
//! Every tunable of the strip, the scroll physics and the hover feedback lives
//! here so [`GalleryConfig::default`](crate::config::GalleryConfig) and the
//! renderer agree on the same numbers.

/// Strip geometry, derived from the viewport once at startup.
pub mod layout {
    /// Horizontal gap between neighbouring slots (logical px).
    pub const MARGIN: f32 = 50.0;
    /// Number of slots that fit across the viewport (minus two margins).
    pub const VISIBLE_COLUMNS: f32 = 3.0;
    /// Slot height as a fraction of the viewport height.
    pub const HEIGHT_RATIO: f32 = 0.8;
    /// Slots sit `slot_height / VERTICAL_OFFSET_DIVISOR` below the top edge.
    pub const VERTICAL_OFFSET_DIVISOR: f32 = 10.0;
}

/// Per-frame scroll physics.
pub mod scroll {
    /// Fraction of the remaining distance to the target covered each frame.
    pub const EASE_FACTOR: f32 = 0.1;
    /// Multiplicative decay applied to the eased scroll each frame.
    pub const DECAY: f32 = 0.9;
    /// `target = wheel_delta / WHEEL_DIVISOR`.
    pub const WHEEL_DIVISOR: f32 = 3.0;
    /// Browser-style wheel delta reported for one line notch.
    pub const WHEEL_DELTA_PER_LINE: f32 = 120.0;
}

/// Displacement filter defaults.
pub mod filter {
    /// `scale_x = STRENGTH * direction * |scroll|`.
    pub const STRENGTH: f32 = 3.0;
    /// Edge length of the bundled displacement map (px).
    pub const MAP_SIZE: f32 = 512.0;
}

/// Hover zoom feedback.
pub mod hover {
    /// Inner scale while the cursor rests on a slot.
    pub const SCALE: f32 = 1.1;
    /// Resting inner scale.
    pub const REST_SCALE: f32 = 1.0;
    /// Duration of both the zoom-in and zoom-out tween (ms).
    pub const DURATION_MS: u64 = 690;
}
