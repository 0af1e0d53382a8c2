use std::sync::Arc;
use std::time::Instant;

use driftwall_core::Size;

use crate::assets::GalleryAssets;

#[derive(Debug, Clone)]
pub enum Message {
    /// Preloading finished, successfully or not.
    AssetsLoaded(Result<Arc<GalleryAssets>, String>),
    /// First known size of the gallery surface.
    ViewportMeasured(Size),
    /// Frame-synchronized tick with timestamp from `window::frames()`.
    Frame(Instant),
    /// Wheel delta, 120 per line notch, positive when scrolling up.
    Wheel(f32),
    /// Slot under the cursor changed.
    HoverChanged(Option<usize>),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AssetsLoaded(_) => "AssetsLoaded",
            Self::ViewportMeasured(_) => "ViewportMeasured",
            Self::Frame(_) => "Frame",
            Self::Wheel(_) => "Wheel",
            Self::HoverChanged(_) => "HoverChanged",
        }
    }
}
