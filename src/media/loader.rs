/// Image directory loader
///
/// Scans a single directory level for supported image files and decodes
/// every match up front. Decoding happens once at startup on the UI thread.

use image::ImageReader;
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::thumbnail::{render_thumbnail, ThumbnailBox};
use crate::config::Config;
use crate::error::{GalleryError, Result};
use crate::state::data::GalleryImage;
use crate::state::gallery::Gallery;

/// A file that was found but could not be turned into a gallery image
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: GalleryError,
}

/// Result of loading an image directory
#[derive(Debug, Default)]
pub struct LoadReport {
    pub images: Vec<GalleryImage>,
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn into_gallery(self) -> Gallery {
        Gallery::new(self.images)
    }
}

/// Check if a path has one of the allowed extensions (case-insensitive)
pub fn is_supported_image(path: &Path, extensions: &[String]) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy();
            extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(&ext))
        }
        None => false,
    }
}

/// List the supported image files directly inside `dir`, sorted by file name.
///
/// Fails only when `dir` itself cannot be read. Unreadable entries inside it
/// are logged and skipped.
pub fn scan_directory(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(GalleryError::Scan {
                    path: dir.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        // Only process files (not directories)
        if !entry.file_type().is_file() {
            continue;
        }

        if is_supported_image(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Decode one image file and render its thumbnail
pub fn decode_image(path: &Path, target: ThumbnailBox) -> Result<GalleryImage> {
    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(image::ImageError::IoError)
        .and_then(|reader| reader.decode())
        .map_err(|source| GalleryError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let empty = || GalleryError::EmptyImage {
        path: path.to_path_buf(),
    };
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(empty());
    }

    let thumbnail = render_thumbnail(&decoded, target).ok_or_else(empty)?;
    let (thumb_width, thumb_height) = thumbnail.dimensions();

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let filename = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    debug!("Decoded {} ({}x{})", filename, width, height);

    Ok(GalleryImage {
        filename,
        path: path.to_path_buf(),
        width,
        height,
        full: Handle::from_rgba(width, height, rgba.into_raw()),
        thumbnail: Handle::from_rgba(thumb_width, thumb_height, thumbnail.into_raw()),
    })
}

/// Load every supported image in `dir`.
///
/// A directory that cannot be listed yields an empty report. Files that fail
/// to decode are recorded in `failures` for the caller to report, and
/// loading carries on.
pub fn load_gallery(dir: &Path, config: &Config) -> LoadReport {
    info!("Scanning image directory: {}", dir.display());

    let paths = match scan_directory(dir, &config.extensions) {
        Ok(paths) => paths,
        Err(e) => {
            warn!("{}; starting with an empty gallery", e);
            return LoadReport::default();
        }
    };

    let mut report = LoadReport::default();
    for path in paths {
        match decode_image(&path, config.thumbnail) {
            Ok(image) => report.images.push(image),
            Err(error) => report.failures.push(LoadFailure { path, error }),
        }
    }

    info!(
        "Loaded {} images ({} skipped)",
        report.images.len(),
        report.failures.len()
    );

    report
}
