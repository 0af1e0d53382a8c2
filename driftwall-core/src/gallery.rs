//! The gallery state machine
//!
//! [`Gallery`] owns everything the frame loop touches: the strip of
//! thumbnails, scroll state, the displacement filter and the hover tweens.
//! Input handlers and [`Gallery::advance`] are plain `&mut self` methods; the
//! host decides when frames and events happen.

use std::sync::Arc;
use std::time::Duration;

use crate::config::GalleryConfig;
use crate::filter::DisplacementFilter;
use crate::geometry::Size;
use crate::layout::{Thumbnail, build_strip};
use crate::loader::LoadedImage;
use crate::metrics::ViewportMetrics;
use crate::scroll::{ScrollState, wrap_position};
use crate::tween::TweenSet;

/// Animated property of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenKey {
    /// Inner scale of slot `n`.
    HoverScale(usize),
}

/// Owned gallery state.
#[derive(Debug, Clone)]
pub struct Gallery {
    config: GalleryConfig,
    metrics: ViewportMetrics,
    thumbnails: Vec<Thumbnail>,
    scroll: ScrollState,
    filter: DisplacementFilter,
    tweens: TweenSet<TweenKey>,
    hovered: Option<usize>,
}

impl Gallery {
    /// Lay out `images` for `viewport` and fit the displacement map.
    pub fn new(
        images: &[Arc<LoadedImage>],
        viewport: Size,
        config: GalleryConfig,
    ) -> Self {
        let metrics = ViewportMetrics::new(viewport, images.len(), &config);
        let thumbnails = build_strip(images, &metrics, &config);
        let map_size = Size::new(
            config.displacement_map_size,
            config.displacement_map_size,
        );
        let filter = DisplacementFilter::new(map_size, viewport);

        log::debug!(
            "gallery laid out: {} slots of {:.0}x{:.0}, strip {:.0}px",
            thumbnails.len(),
            metrics.slot_width,
            metrics.slot_height,
            metrics.strip_width()
        );

        Self {
            config,
            metrics,
            thumbnails,
            scroll: ScrollState::default(),
            filter,
            tweens: TweenSet::new(),
            hovered: None,
        }
    }

    /// Use the intrinsic size of the loaded displacement map instead of the
    /// configured default.
    pub fn with_map_size(mut self, map_size: Size) -> Self {
        self.filter = DisplacementFilter::new(map_size, self.metrics.viewport);
        self
    }

    /// Wheel input: replace the scroll target.
    pub fn on_wheel(&mut self, wheel_delta: f32) {
        self.scroll.on_wheel(wheel_delta, &self.config);
        log::trace!("wheel {wheel_delta} -> target {}", self.scroll.target);
    }

    /// Cursor entered slot `index`: zoom its inner visual in.
    pub fn hover_start(&mut self, index: usize) {
        self.animate_scale(index, self.config.hover_scale);
    }

    /// Cursor left slot `index`: zoom its inner visual back out.
    pub fn hover_end(&mut self, index: usize) {
        self.animate_scale(index, self.config.rest_scale);
    }

    /// Move the hover to `slot`, ending the previous hover first.
    pub fn set_hovered(&mut self, slot: Option<usize>) {
        if self.hovered == slot {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            self.hover_end(previous);
        }
        if let Some(next) = slot {
            self.hover_start(next);
        }
        self.hovered = slot;
    }

    fn animate_scale(&mut self, index: usize, to: f32) {
        let Some(thumb) = self.thumbnails.get(index) else {
            log::warn!("hover on unknown slot {index}");
            return;
        };
        log::trace!("slot {index} scale {:.3} -> {to}", thumb.scale);
        self.tweens.animate(
            TweenKey::HoverScale(index),
            thumb.scale,
            to,
            self.config.hover_duration,
            self.config.hover_easing,
        );
    }

    /// First slot in strip order whose mask contains the viewport point.
    pub fn slot_at(&self, x: f32, y: f32) -> Option<usize> {
        self.thumbnails
            .iter()
            .position(|thumb| thumb.mask().contains(x, y))
    }

    /// One animation frame: ease and decay scroll, wrap every slot, modulate
    /// the filter, then advance hover tweens by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        let direction = self.scroll.direction();
        self.scroll.step(&self.config);

        let scroll = self.scroll.current;
        for thumb in &mut self.thumbnails {
            thumb.x = wrap_position(scroll, thumb.x, &self.metrics);
        }

        self.filter
            .modulate(direction, scroll, self.config.filter_strength);

        let thumbnails = &mut self.thumbnails;
        self.tweens.advance(dt, |key, value| match key {
            TweenKey::HoverScale(index) => {
                if let Some(thumb) = thumbnails.get_mut(index) {
                    thumb.scale = value;
                }
            }
        });
    }

    /// Slots in layout order.
    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    /// Current scroll state.
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// Current filter state.
    pub fn filter(&self) -> &DisplacementFilter {
        &self.filter
    }

    /// Strip metrics fixed at construction.
    pub fn metrics(&self) -> &ViewportMetrics {
        &self.metrics
    }

    /// Active configuration.
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Slot currently under the cursor.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Whether any hover tween is still running.
    pub fn is_animating_hover(&self) -> bool {
        self.tweens.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn gallery() -> Gallery {
        let images: Vec<_> = (0..3)
            .map(|i| {
                Arc::new(LoadedImage::new(
                    format!("{i}.png"),
                    RgbaImage::new(300, 400),
                ))
            })
            .collect();
        Gallery::new(
            &images,
            Size::new(1300.0, 1000.0),
            GalleryConfig::default(),
        )
    }

    #[test]
    fn overlapping_masks_resolve_in_strip_order() {
        let mut gallery = gallery();
        // Slide slot 2 halfway over slot 1
        gallery.thumbnails[2].x = gallery.thumbnails[1].x + 200.0;
        let y = gallery.thumbnails[1].y + 1.0;
        let overlap = gallery.thumbnails[2].x + 10.0;

        assert_eq!(gallery.slot_at(overlap, y), Some(1));
        assert_eq!(gallery.slot_at(gallery.thumbnails[1].x + 1.0, y), Some(1));
        assert_eq!(
            gallery.slot_at(gallery.thumbnails[1].x + 450.0, y),
            Some(2)
        );
    }
}
