/// Stylesheet loading and styling for every window
///
/// The stylesheet is a TOML resource describing a palette plus a few
/// button classes. Every window resolves it when it opens. A missing or
/// broken stylesheet is cosmetic only: the window falls back to the
/// toolkit's default look.

use iced::widget::button;
use iced::{theme::Palette, Background, Border, Color, Shadow, Theme};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{GalleryError, Result};

/// RGB triple as written in the stylesheet
type Rgb = [u8; 3];

fn color([r, g, b]: Rgb) -> Color {
    Color::from_rgb8(r, g, b)
}

fn default_name() -> String {
    "Gallery".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PaletteSheet {
    pub background: Rgb,
    pub text: Rgb,
    pub primary: Rgb,
    pub success: Rgb,
    pub danger: Rgb,
}

/// One button class (thumbnail, navigation arrow, back)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ButtonClass {
    pub background: Rgb,
    pub hovered: Rgb,
    pub text: Rgb,
    pub border: Rgb,
    #[serde(default)]
    pub border_width: f32,
    #[serde(default)]
    pub radius: f32,
}

impl ButtonClass {
    fn style(&self, status: button::Status) -> button::Style {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => self.hovered,
            button::Status::Active | button::Status::Disabled => self.background,
        };

        button::Style {
            background: Some(Background::Color(color(background))),
            text_color: color(self.text),
            border: Border {
                color: color(self.border),
                width: self.border_width,
                radius: self.radius.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stylesheet {
    #[serde(default = "default_name")]
    pub name: String,
    pub palette: PaletteSheet,
    pub thumbnail_button: ButtonClass,
    pub nav_button: ButtonClass,
    pub back_button: ButtonClass,
}

impl Stylesheet {
    fn theme(&self) -> Theme {
        let p = &self.palette;
        Theme::custom(
            self.name.clone(),
            Palette {
                background: color(p.background),
                text: color(p.text),
                primary: color(p.primary),
                success: color(p.success),
                danger: color(p.danger),
            },
        )
    }
}

/// Parse a stylesheet resource
pub fn load_stylesheet(path: &Path) -> Result<Stylesheet> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| GalleryError::Stylesheet {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolved styling for one window
#[derive(Debug, Clone)]
pub struct Styling {
    theme: Theme,
    sheet: Option<Stylesheet>,
}

impl Default for Styling {
    fn default() -> Self {
        Self::unstyled()
    }
}

impl Styling {
    pub fn unstyled() -> Self {
        Self {
            theme: Theme::default(),
            sheet: None,
        }
    }

    pub fn from_sheet(sheet: Stylesheet) -> Self {
        Self {
            theme: sheet.theme(),
            sheet: Some(sheet),
        }
    }

    pub fn is_styled(&self) -> bool {
        self.sheet.is_some()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn thumbnail_button(&self) -> impl Fn(&Theme, button::Status) -> button::Style {
        class_or(self.sheet.as_ref().map(|s| s.thumbnail_button), button::secondary)
    }

    pub fn nav_button(&self) -> impl Fn(&Theme, button::Status) -> button::Style {
        class_or(self.sheet.as_ref().map(|s| s.nav_button), button::primary)
    }

    pub fn back_button(&self) -> impl Fn(&Theme, button::Status) -> button::Style {
        class_or(self.sheet.as_ref().map(|s| s.back_button), button::secondary)
    }
}

fn class_or(
    class: Option<ButtonClass>,
    fallback: fn(&Theme, button::Status) -> button::Style,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| match &class {
        Some(class) => class.style(status),
        None => fallback(theme, status),
    }
}

/// Attach the stylesheet at `path` to a window.
///
/// `surface` only names the window in diagnostics.
pub fn apply(path: &Path, surface: &str) -> Styling {
    match load_stylesheet(path) {
        Ok(sheet) => {
            debug!("Applied stylesheet {} to {}", path.display(), surface);
            Styling::from_sheet(sheet)
        }
        Err(GalleryError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("Stylesheet not found: {} ({} is unstyled)", path.display(), surface);
            Styling::unstyled()
        }
        Err(e) => {
            warn!("{} ({} is unstyled)", e, surface);
            Styling::unstyled()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const SHEET: &str = r#"
name = "Test"

[palette]
background = [10, 10, 10]
text = [250, 250, 250]
primary = [0, 120, 200]
success = [0, 200, 0]
danger = [200, 0, 0]

[thumbnail_button]
background = [20, 20, 20]
hovered = [60, 60, 60]
text = [255, 255, 255]
border = [0, 0, 0]
border_width = 2.0
radius = 4.0

[nav_button]
background = [0, 0, 0]
hovered = [30, 30, 30]
text = [255, 255, 255]
border = [0, 0, 0]

[back_button]
background = [1, 2, 3]
hovered = [4, 5, 6]
text = [255, 255, 255]
border = [0, 0, 0]
"#;

    #[test]
    fn test_parse_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        fs::write(&path, SHEET).unwrap();

        let sheet = load_stylesheet(&path).unwrap();
        assert_eq!(sheet.name, "Test");
        assert_eq!(sheet.thumbnail_button.border_width, 2.0);
        assert_eq!(sheet.nav_button.radius, 0.0);
    }

    #[test]
    fn test_button_class_tracks_hover() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        fs::write(&path, SHEET).unwrap();

        let styling = apply(&path, "test window");
        assert!(styling.is_styled());

        let style = styling.thumbnail_button();
        let active = style(&Theme::Dark, button::Status::Active);
        let hovered = style(&Theme::Dark, button::Status::Hovered);
        assert_eq!(active.background, Some(Background::Color(Color::from_rgb8(20, 20, 20))));
        assert_eq!(hovered.background, Some(Background::Color(Color::from_rgb8(60, 60, 60))));
        assert_eq!(active.border.width, 2.0);
    }

    #[test]
    fn test_missing_stylesheet_is_unstyled() {
        let dir = tempfile::tempdir().unwrap();
        let styling = apply(&dir.path().join("missing.toml"), "test window");
        assert!(!styling.is_styled());

        // Falls back to the toolkit's own button look
        let theme = Theme::Dark;
        let fallback = styling.nav_button()(&theme, button::Status::Active);
        assert_eq!(fallback.background, button::primary(&theme, button::Status::Active).background);
    }

    #[test]
    fn test_invalid_stylesheet_is_unstyled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        fs::write(&path, "[palette]\nbackground = \"black\"\n").unwrap();

        assert!(matches!(
            load_stylesheet(&path),
            Err(GalleryError::Stylesheet { .. })
        ));
        assert!(!apply(&path, "test window").is_styled());
    }

    #[test]
    fn test_bundled_stylesheet_parses() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/style.toml");
        assert!(load_stylesheet(&path).is_ok());
    }
}
