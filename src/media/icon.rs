use iced::window;
use std::path::Path;
use tracing::warn;

/// Load the window icon. A missing or unreadable icon leaves windows
/// without one.
pub fn load_icon(path: &Path) -> Option<window::Icon> {
    let rgba = match image::open(path) {
        Ok(decoded) => decoded.to_rgba8(),
        Err(e) => {
            warn!("Window icon unavailable ({}): {}", path.display(), e);
            return None;
        }
    };

    let (width, height) = rgba.dimensions();
    match window::icon::from_rgba(rgba.into_raw(), width, height) {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!("Invalid window icon {}: {}", path.display(), e);
            None
        }
    }
}
