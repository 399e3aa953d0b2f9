/// Image decoding module
///
/// This module handles:
/// - Scanning the image directory and decoding files
/// - Computing center-crop viewports and rendering thumbnails
/// - Loading the window icon

pub mod icon;
pub mod loader;
pub mod thumbnail;
