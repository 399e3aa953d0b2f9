/// State management module
///
/// This module handles all application state, including:
/// - Decoded image data (data.rs)
/// - The ordered, immutable gallery (gallery.rs)
/// - Full-image viewer navigation (viewer.rs)

pub mod data;
pub mod gallery;
pub mod viewer;
