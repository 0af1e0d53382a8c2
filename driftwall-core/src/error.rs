//! Loader errors

use std::path::PathBuf;

use thiserror::Error;

/// Reasons an image set fails to load.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The path list was empty.
    #[error("no images were requested")]
    Empty,
    /// Reading the file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The bytes are not a supported image.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The image decoded to an empty raster.
    #[error("{path} has zero width or height")]
    ZeroSized { path: PathBuf },
    /// Loads finished without filling every slot.
    #[error("image load stream ended with {remaining} images outstanding")]
    Incomplete { remaining: usize },
    /// The blocking decode task panicked or was cancelled.
    #[error("decode task for {path} did not complete: {source}")]
    Task {
        path: PathBuf,
        #[source]
        source: tokio::task::JoinError,
    },
}
