use image::{imageops::FilterType, DynamicImage, RgbaImage};
use serde::Deserialize;

/// Fixed box a thumbnail is rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ThumbnailBox {
    pub width: u32,
    pub height: u32,
}

impl Default for ThumbnailBox {
    fn default() -> Self {
        Self {
            width: 195,
            height: 100,
        }
    }
}

/// Region of the source image that is shown in a thumbnail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Center-crop viewport that cover-fits an image into the target box.
    ///
    /// The visible region keeps the target's aspect ratio and is as large as
    /// the image allows, so scaling it to the target fills the box with no
    /// letterboxing. Returns `None` when any dimension is zero.
    pub fn cover(image_width: u32, image_height: u32, target: ThumbnailBox) -> Option<Self> {
        if image_width == 0 || image_height == 0 || target.width == 0 || target.height == 0 {
            return None;
        }

        let (iw, ih) = (f64::from(image_width), f64::from(image_height));
        let (tw, th) = (f64::from(target.width), f64::from(target.height));

        let scale = (tw / iw).max(th / ih);
        // min() absorbs float error on the axis that fits exactly
        let width = (tw / scale).min(iw);
        let height = (th / scale).min(ih);

        Some(Self {
            x: (iw - width) / 2.0,
            y: (ih - height) / 2.0,
            width,
            height,
        })
    }

    /// Whole-pixel crop rectangle `(x, y, width, height)` inside the image
    pub fn pixel_bounds(&self, image_width: u32, image_height: u32) -> (u32, u32, u32, u32) {
        let x = (self.x.floor() as u32).min(image_width.saturating_sub(1));
        let y = (self.y.floor() as u32).min(image_height.saturating_sub(1));
        let width = (self.width.round() as u32).clamp(1, image_width.saturating_sub(x).max(1));
        let height = (self.height.round() as u32).clamp(1, image_height.saturating_sub(y).max(1));
        (x, y, width, height)
    }
}

/// Render a cover-fit thumbnail of exactly `target` size.
///
/// Returns `None` for zero-dimension input.
pub fn render_thumbnail(image: &DynamicImage, target: ThumbnailBox) -> Option<RgbaImage> {
    let viewport = Viewport::cover(image.width(), image.height(), target)?;
    let (x, y, width, height) = viewport.pixel_bounds(image.width(), image.height());

    let thumbnail = image
        .crop_imm(x, y, width, height)
        .resize_exact(target.width, target.height, FilterType::Lanczos3);

    Some(thumbnail.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: ThumbnailBox = ThumbnailBox {
        width: 195,
        height: 100,
    };

    fn assert_inside(v: &Viewport, iw: u32, ih: u32) {
        assert!(v.x >= 0.0 && v.y >= 0.0, "{:?}", v);
        assert!(v.x + v.width <= f64::from(iw), "{:?}", v);
        assert!(v.y + v.height <= f64::from(ih), "{:?}", v);
    }

    #[test]
    fn test_wide_image_crops_sides() {
        // scale = max(195/390, 100/100) = 1.0
        let v = Viewport::cover(390, 100, BOX).unwrap();
        assert_eq!(v.width, 195.0);
        assert_eq!(v.height, 100.0);
        assert_eq!(v.x, 97.5);
        assert_eq!(v.y, 0.0);
        assert_inside(&v, 390, 100);
    }

    #[test]
    fn test_large_image_scales_down() {
        // scale = max(195/780, 100/200) = 0.5
        let v = Viewport::cover(780, 200, BOX).unwrap();
        assert_eq!(v.width, 390.0);
        assert_eq!(v.height, 200.0);
        assert_eq!(v.x, 195.0);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_small_image_scales_up() {
        // scale = max(195/195, 100/50) = 2.0
        let v = Viewport::cover(195, 50, BOX).unwrap();
        assert_eq!(v.width, 97.5);
        assert_eq!(v.height, 50.0);
        assert_eq!(v.x, 48.75);
        assert_eq!(v.y, 0.0);
        assert_inside(&v, 195, 50);
    }

    #[test]
    fn test_tall_image_crops_top_and_bottom() {
        let v = Viewport::cover(100, 400, BOX).unwrap();
        assert_eq!(v.x, 0.0);
        assert!(v.y > 0.0);
        assert!((v.width / v.height - 1.95).abs() < 1e-9);
        assert_inside(&v, 100, 400);
    }

    #[test]
    fn test_viewport_always_inside_image() {
        for &(w, h) in &[(1, 1), (1, 1000), (1000, 1), (195, 100), (333, 777), (4000, 3000)] {
            let v = Viewport::cover(w, h, BOX).unwrap();
            assert_inside(&v, w, h);

            let (x, y, pw, ph) = v.pixel_bounds(w, h);
            assert!(x + pw <= w && y + ph <= h);
            assert!(pw >= 1 && ph >= 1);
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(Viewport::cover(0, 100, BOX).is_none());
        assert!(Viewport::cover(100, 0, BOX).is_none());
        assert!(Viewport::cover(100, 100, ThumbnailBox { width: 0, height: 10 }).is_none());
    }

    #[test]
    fn test_render_thumbnail_has_target_size() {
        let source = DynamicImage::new_rgb8(390, 100);
        let thumbnail = render_thumbnail(&source, BOX).unwrap();
        assert_eq!(thumbnail.dimensions(), (195, 100));

        let tall = DynamicImage::new_rgb8(30, 300);
        assert_eq!(render_thumbnail(&tall, BOX).unwrap().dimensions(), (195, 100));
    }

    #[test]
    fn test_render_thumbnail_keeps_center() {
        // Left third red, middle third green, right third blue
        let source = image::RgbImage::from_fn(300, 100, |x, _| match x / 100 {
            0 => image::Rgb([255, 0, 0]),
            1 => image::Rgb([0, 255, 0]),
            _ => image::Rgb([0, 0, 255]),
        });
        let target = ThumbnailBox {
            width: 10,
            height: 10,
        };
        let thumbnail = render_thumbnail(&DynamicImage::ImageRgb8(source), target).unwrap();
        let center = thumbnail.get_pixel(5, 5);
        assert!(center[1] > 200 && center[0] < 50 && center[2] < 50);
    }
}
