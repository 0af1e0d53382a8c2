//! Bundled gallery assets and their preload task

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use driftwall_core::{LoadedImage, load_image, load_images};

use crate::infra::shader_widgets::gallery::GalleryTextures;

/// Gallery images, in strip order.
pub const CONTENT_IMAGES: [&str; 7] =
    ["1.png", "2.png", "3.png", "4.png", "5.png", "6.png", "7.png"];

/// Displacement map sampled by the filter.
pub const DISPLACEMENT_MAP: &str = "displacement.png";

/// Resolved asset paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    pub content: Vec<PathBuf>,
    pub displacement_map: PathBuf,
}

impl AssetManifest {
    /// The compile-time asset list, resolved against `dir`.
    pub fn bundled(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            content: CONTENT_IMAGES.iter().map(|name| dir.join(name)).collect(),
            displacement_map: dir.join(DISPLACEMENT_MAP),
        }
    }
}

/// Everything the gallery needs once preloading finishes.
#[derive(Debug)]
pub struct GalleryAssets {
    pub images: Vec<Arc<LoadedImage>>,
    pub displacement_map: Arc<LoadedImage>,
    pub textures: Arc<GalleryTextures>,
}

/// Preload every asset and prepare GPU-ready texture data.
///
/// Errors are flattened to a string so they can travel inside a message.
pub async fn load(
    manifest: AssetManifest,
) -> Result<Arc<GalleryAssets>, String> {
    load_assets(manifest)
        .await
        .map(Arc::new)
        .map_err(|err| format!("{err:#}"))
}

async fn load_assets(manifest: AssetManifest) -> anyhow::Result<GalleryAssets> {
    let images = load_images(&manifest.content)
        .await
        .context("failed to load gallery images")?;

    let displacement_map = load_image(&manifest.displacement_map)
        .await
        .map(Arc::new)
        .with_context(|| {
            format!(
                "failed to load displacement map {}",
                manifest.displacement_map.display()
            )
        })?;

    let textures = {
        let images = images.clone();
        let map = Arc::clone(&displacement_map);
        tokio::task::spawn_blocking(move || {
            GalleryTextures::prepare(&images, &map)
        })
        .await
        .context("texture preparation task failed")?
    };

    log::debug!(
        "Prepared {} texture layers of {}px",
        textures.layer_count(),
        textures.layer_size()
    );

    Ok(GalleryAssets {
        images,
        displacement_map,
        textures: Arc::new(textures),
    })
}
