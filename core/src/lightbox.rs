use crate::item::{GalleryItem, MediaKind};
use crate::registry::GalleryIndex;

pub const DEFAULT_UNSUPPORTED_MESSAGE: &str =
    "Videos are not supported in the lightbox. You need to get out of the lightbox to see the videos.";

/// The single shared lightbox. At most one gallery is open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        gallery: GalleryIndex,
        slide: usize,
    },
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }

    pub fn open_gallery(&self) -> Option<GalleryIndex> {
        match self {
            LightboxState::Open { gallery, .. } => Some(*gallery),
            LightboxState::Closed => None,
        }
    }

    pub fn open_slide(&self) -> Option<usize> {
        match self {
            LightboxState::Open { slide, .. } => Some(*slide),
            LightboxState::Closed => None,
        }
    }
}

/// What the overlay shows for the addressed item. Videos never play here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LightboxContent {
    Image { src: String },
    Unsupported,
}

impl LightboxContent {
    pub fn for_item<M>(item: &GalleryItem<M>) -> Self {
        match item.kind() {
            MediaKind::Image => LightboxContent::Image {
                src: item.src().to_string(),
            },
            MediaKind::Video => LightboxContent::Unsupported,
        }
    }
}

/// Keys the lightbox reacts to while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Next,
    Prev,
    Close,
}

impl LightboxKey {
    /// Maps `KeyboardEvent.key`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(LightboxKey::Next),
            "ArrowLeft" => Some(LightboxKey::Prev),
            "Escape" => Some(LightboxKey::Close),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_state_has_no_indices() {
        let state = LightboxState::default();
        assert!(!state.is_open());
        assert_eq!(state.open_gallery(), None);
        assert_eq!(state.open_slide(), None);
    }

    #[test]
    fn open_state_reports_indices() {
        let state = LightboxState::Open {
            gallery: GalleryIndex(2),
            slide: 4,
        };
        assert!(state.is_open());
        assert_eq!(state.open_gallery(), Some(GalleryIndex(2)));
        assert_eq!(state.open_slide(), Some(4));
    }

    #[test]
    fn key_mapping() {
        assert_eq!(LightboxKey::from_key("ArrowRight"), Some(LightboxKey::Next));
        assert_eq!(LightboxKey::from_key("ArrowLeft"), Some(LightboxKey::Prev));
        assert_eq!(LightboxKey::from_key("Escape"), Some(LightboxKey::Close));
        assert_eq!(LightboxKey::from_key("Enter"), None);
        assert_eq!(LightboxKey::from_key("arrowright"), None);
    }
}
