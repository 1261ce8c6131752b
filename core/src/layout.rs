//! Rendering plan for a registered gallery. The DOM builder walks this
//! instead of re-deriving per-slide decisions from the items.

use crate::gallery::GalleryInstance;
use crate::item::MediaKind;
use crate::registry::GalleryIndex;

pub const CONTAINER_CLASS: &str = "vetrom-gallery-container";
pub const STRIP_CLASS: &str = "vetrom-gallery-image-wrapper";
pub const SLIDE_CLASS: &str = "vetrom-gallery-slide";
pub const CONTROL_CLASS: &str = "vetrom-gallery-control";
pub const PREV_CLASS: &str = "prev";
pub const NEXT_CLASS: &str = "next";
pub const INDEX_ATTRIBUTE: &str = "data-vetrom-gallery-index";

pub const LIGHTBOX_OVERLAY_CLASS: &str = "vetrom-lightbox-overlay";
pub const LIGHTBOX_CONTENT_CLASS: &str = "vetrom-lightbox-content";
pub const LIGHTBOX_IMAGE_CLASS: &str = "vetrom-lightbox-image";
pub const LIGHTBOX_UNSUPPORTED_CLASS: &str = "vetrom-lightbox-unsupported";
pub const LIGHTBOX_CLOSE_CLASS: &str = "vetrom-lightbox-close";
pub const LIGHTBOX_CONTROL_CLASS: &str = "vetrom-lightbox-control";
pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideLayout {
    pub position: usize,
    pub kind: MediaKind,
    /// Videos get native playback controls.
    pub native_controls: bool,
    pub opens_lightbox: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryLayout {
    pub gallery: GalleryIndex,
    pub slides: Vec<SlideLayout>,
    pub initial_transform: String,
}

impl GalleryLayout {
    pub fn plan<M>(gallery: &GalleryInstance<M>) -> Self {
        let slides = gallery
            .items()
            .iter()
            .enumerate()
            .map(|(position, item)| SlideLayout {
                position,
                kind: item.kind(),
                native_controls: item.kind() == MediaKind::Video,
                opens_lightbox: gallery.click_command(position).is_some(),
            })
            .collect();
        Self {
            gallery: gallery.index(),
            slides,
            initial_transform: gallery.view().transform(),
        }
    }

    pub fn control_class(direction: &str) -> String {
        format!("{CONTROL_CLASS} {direction}")
    }

    pub fn lightbox_control_class(direction: &str) -> String {
        format!("{LIGHTBOX_CONTROL_CLASS} {direction}")
    }
}
