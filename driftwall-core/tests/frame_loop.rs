use std::sync::Arc;
use std::time::Duration;

use driftwall_core::scroll::wrap_position;
use driftwall_core::{
    Gallery, GalleryConfig, LoadedImage, ScrollState, Size, ViewportMetrics,
};
use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FRAME: Duration = Duration::from_millis(16);

fn images(count: u32) -> Vec<Arc<LoadedImage>> {
    (0..count)
        .map(|i| {
            Arc::new(LoadedImage::new(
                format!("{i}.png"),
                RgbaImage::new(320 + i * 40, 480),
            ))
        })
        .collect()
}

fn gallery() -> Gallery {
    Gallery::new(
        &images(7),
        Size::new(1300.0, 1000.0),
        GalleryConfig::default(),
    )
}

#[test]
fn strip_of_seven_matches_the_stride_scenario() {
    let gallery = gallery();
    let metrics = gallery.metrics();
    let width = metrics.slot_width;

    assert_eq!(metrics.strip_width(), 7.0 * (width + 50.0));
    for (i, thumb) in gallery.thumbnails().iter().enumerate() {
        assert_eq!(thumb.x, i as f32 * (width + 50.0));
    }
}

#[test]
fn wheel_delta_of_300_targets_100() {
    let mut gallery = gallery();
    gallery.on_wheel(300.0);
    assert_eq!(gallery.scroll().target, 100.0);

    // Repeated events re-peg instead of compounding
    gallery.on_wheel(300.0);
    assert_eq!(gallery.scroll().target, 100.0);
}

#[test]
fn wraparound_stays_in_band_for_random_inputs() {
    let metrics = ViewportMetrics::new(
        Size::new(1280.0, 720.0),
        7,
        &GalleryConfig::default(),
    );
    let low = -metrics.stride();
    let high = metrics.strip_width() - metrics.stride();
    let mut rng = StdRng::seed_from_u64(0x1099bb);

    for _ in 0..10_000 {
        let scroll = rng.random_range(-50_000.0f32..50_000.0);
        let x = rng.random_range(-50_000.0f32..50_000.0);
        let wrapped = wrap_position(scroll, x, &metrics);
        assert!(
            wrapped >= low && wrapped < high,
            "scroll={scroll} x={x} wrapped={wrapped} band=[{low}, {high})"
        );
    }
}

#[test]
fn rest_is_a_fixed_point() {
    let mut gallery = gallery();
    // First frame wraps the last slot off the band edge
    gallery.advance(FRAME);
    let positions: Vec<f32> =
        gallery.thumbnails().iter().map(|t| t.x).collect();

    for _ in 0..120 {
        gallery.advance(FRAME);
        let now: Vec<f32> = gallery.thumbnails().iter().map(|t| t.x).collect();
        assert_eq!(now, positions);
        assert_eq!(gallery.filter().scale_x, 0.0);
        assert_eq!(gallery.scroll(), ScrollState::default());
    }
}

#[test]
fn scroll_converges_toward_the_steady_state() {
    let config = GalleryConfig::default();
    let mut scroll = ScrollState {
        current: 0.0,
        target: 100.0,
    };
    let limit = scroll.steady_state(&config);
    assert!((limit - 100.0 * 0.09 / 0.19).abs() < 1e-3);

    let mut distance = (scroll.current - limit).abs();
    for _ in 0..60 {
        scroll.step(&config);
        let next = (scroll.current - limit).abs();
        assert!(next <= distance);
        distance = next;
    }
    assert!(distance < 1e-3);
    assert_eq!(scroll.target, 100.0);
}

#[test]
fn filter_strength_follows_scroll_speed_and_direction() {
    let mut gallery = gallery();
    gallery.on_wheel(-300.0);

    // Scroll starts at zero, so the first frame reports direction +1
    gallery.advance(FRAME);
    let scroll = gallery.scroll().current;
    assert!(scroll < 0.0);
    assert_eq!(gallery.filter().scale_x, 3.0 * scroll.abs());
    assert_eq!(gallery.filter().scale_y, 0.0);

    gallery.on_wheel(300.0);
    for _ in 0..10 {
        gallery.advance(FRAME);
    }
    let before = gallery.scroll().current;
    assert!(before > 0.0);
    gallery.advance(FRAME);
    let after = gallery.scroll().current;
    assert_eq!(gallery.filter().scale_x, -3.0 * after.abs());
}

#[test]
fn slots_move_with_scroll() {
    let mut gallery = gallery();
    gallery.advance(FRAME);
    let before: Vec<f32> = gallery.thumbnails().iter().map(|t| t.x).collect();

    gallery.on_wheel(-600.0);
    gallery.advance(FRAME);
    let scroll = gallery.scroll().current;
    let metrics = *gallery.metrics();

    for (thumb, x) in gallery.thumbnails().iter().zip(before) {
        assert_eq!(thumb.x, wrap_position(scroll, x, &metrics));
    }
}

#[test]
fn hover_zooms_to_target_scale() {
    let mut gallery = gallery();
    gallery.hover_start(2);

    for _ in 0..60 {
        gallery.advance(FRAME);
    }
    assert_eq!(gallery.thumbnails()[2].scale, 1.1);
    assert!(!gallery.is_animating_hover());
    // Only the hovered slot's inner visual changes
    assert_eq!(gallery.thumbnails()[1].scale, 1.0);
    assert_eq!(gallery.thumbnails()[2].width, gallery.metrics().slot_width);
}

#[test]
fn hover_end_cancels_an_inflight_zoom() {
    let mut gallery = gallery();
    gallery.hover_start(0);
    gallery.advance(FRAME);
    let peak = gallery.thumbnails()[0].scale;
    assert!(peak > 1.0 && peak < 1.1);

    gallery.hover_end(0);
    let mut max_seen = peak;
    for _ in 0..60 {
        gallery.advance(FRAME);
        max_seen = max_seen.max(gallery.thumbnails()[0].scale);
    }

    assert_eq!(max_seen, peak);
    assert_eq!(gallery.thumbnails()[0].scale, 1.0);
}

#[test]
fn moving_the_hover_releases_the_previous_slot() {
    let mut gallery = gallery();
    gallery.set_hovered(Some(1));
    for _ in 0..60 {
        gallery.advance(FRAME);
    }

    gallery.set_hovered(Some(3));
    for _ in 0..60 {
        gallery.advance(FRAME);
    }

    assert_eq!(gallery.hovered(), Some(3));
    assert_eq!(gallery.thumbnails()[1].scale, 1.0);
    assert_eq!(gallery.thumbnails()[3].scale, 1.1);
}

#[test]
fn hit_testing_uses_the_mask() {
    let gallery = gallery();
    let first = gallery.thumbnails()[0].mask();

    assert_eq!(gallery.slot_at(first.x + 1.0, first.y + 1.0), Some(0));
    // The margin between slots belongs to nobody
    assert_eq!(
        gallery.slot_at(first.x + first.width + 10.0, first.y + 1.0),
        None
    );
    assert_eq!(gallery.slot_at(first.x + 1.0, 0.0), None);
}
