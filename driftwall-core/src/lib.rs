//! # Driftwall Core
//!
//! Windowing-free engine behind the Driftwall gallery: a horizontally
//! wrapping strip of cover-fitted images that scrolls with the mouse wheel,
//! zooms the hovered slot and distorts the whole strip in proportion to scroll
//! speed.
//!
//! ## Architecture
//!
//! - [`loader`]: concurrent, order-preserving image preloading
//! - [`geometry`]: sizes, rectangles and the cover fit
//! - [`metrics`]: slot and strip dimensions derived from the viewport
//! - [`layout`]: strip construction ([`layout::Thumbnail`])
//! - [`scroll`]: wheel target, easing, decay and wraparound
//! - [`tween`]: keyed, replaceable scalar tweens for hover feedback
//! - [`filter`]: displacement filter placement and strength
//! - [`gallery`]: the owned state struct tying the pieces to one frame tick
//!
//! Rendering lives in the `driftwall-gallery` crate.

pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod geometry;
pub mod layout;
pub mod loader;
pub mod metrics;
pub mod scroll;
pub mod tween;

pub use config::GalleryConfig;
pub use error::LoadError;
pub use filter::DisplacementFilter;
pub use gallery::{Gallery, TweenKey};
pub use geometry::{Fit, Rect, Size};
pub use layout::Thumbnail;
pub use loader::{LoadTracker, LoadedImage, load_image, load_images};
pub use metrics::ViewportMetrics;
pub use scroll::ScrollState;
pub use tween::{Easing, Tween, TweenSet};
