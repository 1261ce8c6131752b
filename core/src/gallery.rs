use crate::command::Command;
use crate::error::GalleryError;
use crate::item::{GalleryItem, MediaKind};
use crate::registry::GalleryIndex;

/// What a carousel position looks like once applied to the slide strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideView {
    pub active: usize,
    /// Horizontal strip offset in percent of one slide.
    pub offset_percent: i64,
    /// Video slides that must be paused: every video except the active one.
    pub pause: Vec<usize>,
}

impl SlideView {
    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent)
    }
}

/// One carousel built from one marked container.
#[derive(Clone, Debug)]
pub struct GalleryInstance<M> {
    index: GalleryIndex,
    items: Vec<GalleryItem<M>>,
    current_slide: usize,
}

impl<M> GalleryInstance<M> {
    pub(crate) fn new(index: GalleryIndex, items: Vec<GalleryItem<M>>) -> Result<Self, GalleryError> {
        if items.is_empty() {
            return Err(GalleryError::EmptyGallery);
        }
        Ok(Self {
            index,
            items,
            current_slide: 0,
        })
    }

    pub fn index(&self) -> GalleryIndex {
        self.index
    }

    pub fn items(&self) -> &[GalleryItem<M>] {
        &self.items
    }

    pub fn item(&self, slide: usize) -> Option<&GalleryItem<M>> {
        self.items.get(slide)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn check_slide(&self, slide: usize) -> Result<(), GalleryError> {
        if slide < self.items.len() {
            Ok(())
        } else {
            Err(GalleryError::SlideOutOfRange {
                gallery: self.index,
                slide,
                len: self.items.len(),
            })
        }
    }

    pub fn next(&mut self) -> SlideView {
        self.current_slide = wrap_forward(self.current_slide, self.items.len());
        self.view()
    }

    pub fn prev(&mut self) -> SlideView {
        self.current_slide = wrap_back(self.current_slide, self.items.len());
        self.view()
    }

    pub fn go_to(&mut self, slide: usize) -> Result<SlideView, GalleryError> {
        self.check_slide(slide)?;
        self.current_slide = slide;
        Ok(self.view())
    }

    pub fn view(&self) -> SlideView {
        let active = self.current_slide;
        let pause = self
            .items
            .iter()
            .enumerate()
            .filter(|(slide, item)| *slide != active && item.kind() == MediaKind::Video)
            .map(|(slide, _)| slide)
            .collect();
        SlideView {
            active,
            offset_percent: -(active as i64) * 100,
            pause,
        }
    }

    /// Command issued by a click on a slide. Video slides leave the click to
    /// the native player controls.
    pub fn click_command(&self, slide: usize) -> Option<Command> {
        match self.items.get(slide)?.kind() {
            MediaKind::Image => Some(Command::OpenLightbox {
                gallery: self.index,
                slide,
            }),
            MediaKind::Video => None,
        }
    }
}

pub(crate) fn wrap_forward(slide: usize, len: usize) -> usize {
    (slide + 1) % len
}

pub(crate) fn wrap_back(slide: usize, len: usize) -> usize {
    (slide + len - 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::MediaElement;

    #[derive(Clone, Debug, PartialEq)]
    struct Stub(MediaKind);

    impl MediaElement for Stub {
        fn kind(&self) -> MediaKind {
            self.0
        }

        fn own_src(&self) -> String {
            String::new()
        }

        fn nested_source_src(&self) -> Option<String> {
            None
        }

        fn deep_copy(&self) -> Self {
            self.clone()
        }
    }

    fn gallery(kinds: &[MediaKind]) -> GalleryInstance<Stub> {
        let items = kinds.iter().map(|kind| GalleryItem::from_element(&Stub(*kind))).collect();
        GalleryInstance::new(GalleryIndex(0), items).expect("non-empty")
    }

    #[test]
    fn empty_gallery_is_rejected() {
        let result = GalleryInstance::<Stub>::new(GalleryIndex(0), Vec::new());
        assert!(matches!(result, Err(GalleryError::EmptyGallery)));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut g = gallery(&[MediaKind::Image; 3]);
        assert_eq!(g.prev().active, 2);
        assert_eq!(g.next().active, 0);
        assert_eq!(g.next().active, 1);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut g = gallery(&[MediaKind::Image]);
        assert_eq!(g.next().active, 0);
        assert_eq!(g.prev().active, 0);
    }

    #[test]
    fn view_pauses_inactive_videos_only() {
        let mut g = gallery(&[MediaKind::Video, MediaKind::Image, MediaKind::Video, MediaKind::Video]);
        let view = g.go_to(2).expect("in range");
        assert_eq!(view.pause, vec![0, 3]);
        assert_eq!(view.offset_percent, -200);
        assert_eq!(view.transform(), "translateX(-200%)");
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut g = gallery(&[MediaKind::Image; 2]);
        g.next();
        let err = g.go_to(2).expect_err("out of range");
        assert_eq!(
            err,
            GalleryError::SlideOutOfRange {
                gallery: GalleryIndex(0),
                slide: 2,
                len: 2
            }
        );
        assert_eq!(g.current_slide(), 1);
    }

    #[test]
    fn first_view_has_zero_offset() {
        let g = gallery(&[MediaKind::Image; 2]);
        assert_eq!(g.view().transform(), "translateX(0%)");
    }

    #[test]
    fn only_image_slides_open_the_lightbox() {
        let g = gallery(&[MediaKind::Image, MediaKind::Video]);
        assert_eq!(
            g.click_command(0),
            Some(Command::OpenLightbox {
                gallery: GalleryIndex(0),
                slide: 0
            })
        );
        assert_eq!(g.click_command(1), None);
        assert_eq!(g.click_command(5), None);
    }
}
