use super::data::GalleryImage;

/// The ordered, immutable set of images shown by the application.
///
/// Filled once at startup; there are no add or remove operations. Indices
/// handed out by the grid stay valid for the lifetime of the gallery.
#[derive(Clone, Default)]
pub struct Gallery {
    images: Vec<GalleryImage>,
}

impl Gallery {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryImage> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryImage> {
        self.images.iter()
    }
}

// Decoded pixel buffers are too large to print
impl std::fmt::Debug for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("len", &self.images.len())
            .field(
                "files",
                &self.iter().map(|i| &i.filename).collect::<Vec<_>>(),
            )
            .finish()
    }
}
