use crate::registry::GalleryIndex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("no gallery at index {index} (registry holds {len})")]
    UnknownGallery { index: GalleryIndex, len: usize },
    #[error("slide {slide} out of range for gallery {gallery} ({len} slides)")]
    SlideOutOfRange {
        gallery: GalleryIndex,
        slide: usize,
        len: usize,
    },
    #[error("a gallery needs at least one media item")]
    EmptyGallery,
}
