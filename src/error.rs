/// Error types for the gallery
///
/// Nothing here is fatal to the application: loading failures degrade to an
/// empty or partial gallery and styling failures degrade to the default theme.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GalleryError>;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to list directory {path}: {source}")]
    Scan {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("image {path} has zero width or height")]
    EmptyImage { path: PathBuf },

    #[error("image index {index} is out of range for a gallery of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid stylesheet {path}: {source}")]
    Stylesheet {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid configuration file {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
