use std::sync::Arc;
use std::time::{Duration, Instant};

use driftwall_core::{Gallery, GalleryConfig, Size};

use crate::assets::GalleryAssets;

/// Application state.
///
/// The gallery is built once both the assets and the viewport size are known
/// and is never relaid out afterwards.
#[derive(Debug)]
pub struct State {
    pub config: GalleryConfig,
    pub assets: Option<Arc<GalleryAssets>>,
    pub viewport: Option<Size>,
    pub gallery: Option<Gallery>,
    pub load_error: Option<String>,
    last_frame: Option<Instant>,
}

impl State {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            assets: None,
            viewport: None,
            gallery: None,
            load_error: None,
            last_frame: None,
        }
    }

    /// Build the gallery if everything it needs has arrived.
    pub fn try_build_gallery(&mut self) -> bool {
        if self.gallery.is_some() {
            return false;
        }
        let (Some(assets), Some(viewport)) =
            (self.assets.as_ref(), self.viewport)
        else {
            return false;
        };

        let gallery = Gallery::new(&assets.images, viewport, self.config)
            .with_map_size(assets.displacement_map.size());

        log::info!(
            "Gallery ready: {} images in a {:.0}x{:.0} viewport",
            gallery.thumbnails().len(),
            viewport.width,
            viewport.height
        );

        self.gallery = Some(gallery);
        true
    }

    /// Time since the previous frame; zero on the first one.
    pub fn frame_delta(&mut self, now: Instant) -> Duration {
        let dt = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);
        dt
    }

    pub fn is_ready(&self) -> bool {
        self.gallery.is_some()
    }
}
