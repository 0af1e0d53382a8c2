use std::path::PathBuf;

use driftwall_core::GalleryConfig;
use iced::Task;

use crate::assets::{self, AssetManifest};
use crate::messages::Message;
use crate::state::State;

/// Environment variable overriding the asset directory.
pub const ASSETS_DIR_ENV: &str = "DRIFTWALL_ASSETS_DIR";

/// Initial window size in logical pixels.
pub const DEFAULT_WINDOW_SIZE: iced::Size = iced::Size::new(1280.0, 720.0);

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub assets_dir: PathBuf,
    pub window_size: iced::Size,
    pub gallery: GalleryConfig,
}

impl AppConfig {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            window_size: DEFAULT_WINDOW_SIZE,
            gallery: GalleryConfig::default(),
        }
    }

    /// Bundled assets next to the crate manifest, unless
    /// `DRIFTWALL_ASSETS_DIR` points elsewhere.
    pub fn from_environment() -> Self {
        let assets_dir = std::env::var_os(ASSETS_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_assets_dir);

        Self::new(assets_dir)
    }

    pub fn manifest(&self) -> AssetManifest {
        AssetManifest::bundled(&self.assets_dir)
    }

    pub fn with_window_size(mut self, window_size: iced::Size) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_gallery(mut self, gallery: GalleryConfig) -> Self {
        self.gallery = gallery;
        self
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
}

/// Initial state plus the task that preloads every asset.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let state = State::new(config.gallery);
    let manifest = config.manifest();

    log::debug!(
        "Preloading {} images and displacement map {}",
        manifest.content.len(),
        manifest.displacement_map.display()
    );

    let task = Task::perform(assets::load(manifest), Message::AssetsLoaded);
    (state, task)
}
