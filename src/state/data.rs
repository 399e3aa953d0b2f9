/// Shared data structures for the application state
///
/// These structs represent the decoded images that flow from the
/// loader into the grid and viewer windows.

use iced::widget::image::Handle;
use std::path::PathBuf;

/// A single decoded image in the gallery
#[derive(Debug, Clone)]
pub struct GalleryImage {
    /// Filename only (e.g., "sunset.jpg")
    pub filename: String,
    /// Full path to the source file
    pub path: PathBuf,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
    /// Full-size RGBA pixels, ready for the viewer
    pub full: Handle,
    /// Cover-fit preview for the grid
    pub thumbnail: Handle,
}
