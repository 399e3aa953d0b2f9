/// Application configuration
///
/// Every value has a built-in default. An optional `gallery.toml` in the
/// resource directory may override any subset of them.

use iced::{window, Size};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{GalleryError, Result};
use crate::media::thumbnail::ThumbnailBox;

/// Name of the application-relative resource directory
pub const RESOURCE_DIR_NAME: &str = "resources";

/// Optional configuration override file inside the resource directory
pub const CONFIG_FILE_NAME: &str = "gallery.toml";

/// Upper bound on grid columns
pub const MAX_COLUMNS: usize = 64;

/// Upper bound on either side of the thumbnail box, in pixels
pub const MAX_THUMBNAIL_SIDE: u32 = 4096;

/// Window geometry and title
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub maximized: bool,
}

impl WindowConfig {
    /// Toolkit settings for opening a window of this kind
    pub fn settings(&self, icon: Option<window::Icon>) -> window::Settings {
        window::Settings {
            size: Size::new(self.width, self.height),
            icon,
            ..window::Settings::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Image directory, relative to the resource directory
    pub image_dir: PathBuf,
    /// Stylesheet resource, relative to the resource directory
    pub stylesheet: PathBuf,
    /// Window icon, relative to the resource directory
    pub icon: PathBuf,
    /// Lowercase file extensions accepted by the loader
    pub extensions: Vec<String>,
    /// Number of thumbnail columns in the grid
    pub columns: usize,
    /// Fixed box every thumbnail is cover-fit into
    pub thumbnail: ThumbnailBox,
    /// Height the full image is fit to in the viewer
    pub full_image_height: f32,
    pub gallery_window: WindowConfig,
    pub viewer_window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("images"),
            stylesheet: PathBuf::from("style.toml"),
            icon: PathBuf::from("icon.png"),
            extensions: vec!["png".to_string(), "jpg".to_string()],
            columns: 6,
            thumbnail: ThumbnailBox::default(),
            full_image_height: 600.0,
            gallery_window: WindowConfig {
                title: "Rich Internet Image Gallery".to_string(),
                width: 800.0,
                height: 600.0,
                maximized: true,
            },
            viewer_window: WindowConfig {
                title: "Full Image Viewer".to_string(),
                width: 850.0,
                height: 600.0,
                maximized: true,
            },
        }
    }
}

impl Config {
    /// Load the configuration from `resource_dir`, falling back to defaults.
    ///
    /// A missing override file is normal. An unreadable or invalid one is
    /// logged and ignored.
    pub fn load(resource_dir: &Path) -> Self {
        let path = resource_dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!("No {} found, using default configuration", path.display());
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => {
                debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring configuration file: {}", e);
                Self::default()
            }
        }
    }

    /// Parse and validate a configuration file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|source| GalleryError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the layout or thumbnail math degenerate
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.columns > MAX_COLUMNS {
            return Err(GalleryError::InvalidConfig(format!(
                "columns must be between 1 and {}, got {}",
                MAX_COLUMNS, self.columns
            )));
        }
        let side_ok = |side: u32| (1..=MAX_THUMBNAIL_SIDE).contains(&side);
        if !side_ok(self.thumbnail.width) || !side_ok(self.thumbnail.height) {
            return Err(GalleryError::InvalidConfig(format!(
                "thumbnail box {}x{} must be between 1 and {} on each side",
                self.thumbnail.width, self.thumbnail.height, MAX_THUMBNAIL_SIDE
            )));
        }
        if !self.full_image_height.is_finite() || self.full_image_height <= 0.0 {
            return Err(GalleryError::InvalidConfig(
                "full_image_height must be a positive, finite number".to_string(),
            ));
        }
        for geometry in [&self.gallery_window, &self.viewer_window] {
            let finite = geometry.width.is_finite() && geometry.height.is_finite();
            if !finite || geometry.width <= 0.0 || geometry.height <= 0.0 {
                return Err(GalleryError::InvalidConfig(format!(
                    "window \"{}\" has an invalid size {}x{}",
                    geometry.title, geometry.width, geometry.height
                )));
            }
        }
        Ok(())
    }
}

/// Locate the resource directory.
///
/// Prefers a `resources/` directory next to the executable, then the one
/// shipped in the crate source tree.
pub fn resource_dir() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(RESOURCE_DIR_NAME)));

    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(RESOURCE_DIR_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_layout() {
        let config = Config::default();
        assert_eq!(config.columns, 6);
        assert_eq!(config.thumbnail, ThumbnailBox { width: 195, height: 100 });
        assert_eq!(config.gallery_window.title, "Rich Internet Image Gallery");
        assert_eq!(config.viewer_window.title, "Full Image Viewer");
        assert_eq!((config.gallery_window.width, config.gallery_window.height), (800.0, 600.0));
        assert_eq!((config.viewer_window.width, config.viewer_window.height), (850.0, 600.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "columns = 4\n\n[thumbnail]\nwidth = 120\nheight = 80\n",
        )
        .unwrap();

        let config = Config::load(dir.path());
        assert_eq!(config.columns, 4);
        assert_eq!(config.thumbnail, ThumbnailBox { width: 120, height: 80 });
        assert_eq!(config.extensions, vec!["png", "jpg"]);
    }

    #[test]
    fn test_zero_columns_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "columns = 0\n").unwrap();

        assert!(matches!(
            Config::load_from_path(&path),
            Err(GalleryError::InvalidConfig(_))
        ));
        // load() degrades to defaults instead of failing
        assert_eq!(Config::load(dir.path()).columns, 6);
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "columns = \"six\"\n").unwrap();

        assert!(matches!(
            Config::load_from_path(&path),
            Err(GalleryError::Config { .. })
        ));
    }

    #[test]
    fn test_oversized_values_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        for body in [
            "columns = 4000000000000\n",
            "columns = 65\n",
            "[thumbnail]\nwidth = 100000\nheight = 100\n",
            "full_image_height = inf\n",
        ] {
            fs::write(&path, body).unwrap();
            assert!(
                matches!(Config::load_from_path(&path), Err(GalleryError::InvalidConfig(_))),
                "accepted {:?}",
                body
            );
            assert_eq!(Config::load(dir.path()), Config::default());
        }
    }

    #[test]
    fn test_upper_bounds_are_inclusive() {
        let config = Config {
            columns: MAX_COLUMNS,
            thumbnail: ThumbnailBox {
                width: MAX_THUMBNAIL_SIDE,
                height: MAX_THUMBNAIL_SIDE,
            },
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
