//! Wheel-driven scroll physics and strip wraparound.

use crate::config::GalleryConfig;
use crate::metrics::ViewportMetrics;

/// Eased scroll velocity and the wheel-set value it chases.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Eased per-frame scroll applied to slot positions.
    pub current: f32,
    /// Last wheel-derived target.
    pub target: f32,
}

impl ScrollState {
    /// Replace the target from a browser-convention wheel delta.
    ///
    /// Repeated events re-peg the target rather than accumulating.
    pub fn on_wheel(&mut self, wheel_delta: f32, config: &GalleryConfig) {
        self.target = wheel_delta / config.wheel_divisor;
    }

    /// Direction sign of the distortion for the current (pre-step) scroll:
    /// `-1` while scrolling positive, `+1` otherwise.
    pub fn direction(&self) -> f32 {
        if self.current > 0.0 { -1.0 } else { 1.0 }
    }

    /// Ease toward the target, then decay. The target itself never decays.
    pub fn step(&mut self, config: &GalleryConfig) {
        self.current -= (self.current - self.target) * config.ease_factor;
        self.current *= config.decay;
    }

    /// Fixed point of [`ScrollState::step`] for the current target.
    pub fn steady_state(&self, config: &GalleryConfig) -> f32 {
        // s = (s - (s - t) * e) * d  =>  s = t * e * d / (1 - (1 - e) * d)
        let retained = (1.0 - config.ease_factor) * config.decay;
        self.target * config.ease_factor * config.decay / (1.0 - retained)
    }
}

/// Shift `x` by `scroll` and wrap it back into
/// `[-slot_width - margin, strip_width - slot_width - margin)`.
pub fn wrap_position(scroll: f32, x: f32, metrics: &ViewportMetrics) -> f32 {
    let strip = metrics.strip_width();
    let stride = metrics.stride();
    if strip <= 0.0 {
        return x;
    }

    let mut wrapped = (scroll + x + strip + stride).rem_euclid(strip);
    // rem_euclid may round up to exactly `strip` for tiny negative inputs
    if wrapped >= strip {
        wrapped -= strip;
    }
    wrapped - stride
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn metrics() -> ViewportMetrics {
        ViewportMetrics::new(
            Size::new(1300.0, 1000.0),
            7,
            &GalleryConfig::default(),
        )
    }

    #[test]
    fn wheel_replaces_target() {
        let config = GalleryConfig::default();
        let mut scroll = ScrollState::default();

        scroll.on_wheel(300.0, &config);
        assert_eq!(scroll.target, 100.0);

        scroll.on_wheel(300.0, &config);
        assert_eq!(scroll.target, 100.0);

        scroll.on_wheel(-120.0, &config);
        assert_eq!(scroll.target, -40.0);
    }

    #[test]
    fn direction_flips_at_zero() {
        let mut scroll = ScrollState::default();
        assert_eq!(scroll.direction(), 1.0);
        scroll.current = 0.001;
        assert_eq!(scroll.direction(), -1.0);
        scroll.current = -3.0;
        assert_eq!(scroll.direction(), 1.0);
    }

    #[test]
    fn step_eases_then_decays() {
        let config = GalleryConfig::default();
        let mut scroll = ScrollState {
            current: 10.0,
            target: 100.0,
        };
        scroll.step(&config);
        // (10 - (10 - 100) * 0.1) * 0.9
        assert!((scroll.current - 17.1).abs() < 1e-4);
        assert_eq!(scroll.target, 100.0);
    }

    #[test]
    fn wrap_is_identity_inside_band_without_scroll() {
        let metrics = metrics();
        for i in 0..6 {
            let x = i as f32 * metrics.stride();
            assert_eq!(wrap_position(0.0, x, &metrics), x);
        }
    }

    #[test]
    fn last_slot_starts_on_the_band_edge_and_wraps_left() {
        let metrics = metrics();
        let last = 6.0 * metrics.stride();
        assert_eq!(last, metrics.strip_width() - metrics.stride());
        assert_eq!(wrap_position(0.0, last, &metrics), -metrics.stride());
    }

    #[test]
    fn wrap_moves_leaving_slot_to_the_far_end() {
        let metrics = metrics();
        let leftmost = -metrics.stride();
        let wrapped = wrap_position(-1.0, leftmost, &metrics);
        assert!(
            (wrapped - (metrics.strip_width() - metrics.stride() - 1.0)).abs()
                < 1e-3
        );
    }

    #[test]
    fn wrap_handles_large_negative_offsets() {
        let metrics = metrics();
        let wrapped = wrap_position(-1.0e6, 0.0, &metrics);
        assert!(wrapped >= -metrics.stride());
        assert!(wrapped < metrics.strip_width() - metrics.stride());
    }
}
