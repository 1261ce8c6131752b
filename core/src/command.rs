use crate::gallery::SlideView;
use crate::lightbox::{LightboxContent, LightboxKey};
use crate::registry::GalleryIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    /// Resynchronize after the lightbox closes.
    GoTo(usize),
}

/// Every transition the widget can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Carousel {
        gallery: GalleryIndex,
        action: CarouselAction,
    },
    OpenLightbox {
        gallery: GalleryIndex,
        slide: usize,
    },
    LightboxNext,
    LightboxPrev,
    CloseLightbox,
}

impl From<LightboxKey> for Command {
    fn from(key: LightboxKey) -> Self {
        match key {
            LightboxKey::Next => Command::LightboxNext,
            LightboxKey::Prev => Command::LightboxPrev,
            LightboxKey::Close => Command::CloseLightbox,
        }
    }
}

/// Visual consequences of a dispatched command, applied by the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    SlideChanged {
        gallery: GalleryIndex,
        view: SlideView,
    },
    LightboxShow(LightboxContent),
    /// Overlay visible, page scrolling suppressed.
    LightboxOpened,
    /// Overlay hidden, page scrolling restored.
    LightboxClosed,
}

pub trait EffectSink {
    fn apply(&mut self, effect: Effect);
}

impl EffectSink for Vec<Effect> {
    fn apply(&mut self, effect: Effect) {
        self.push(effect);
    }
}

/// Target of a `contextmenu` event, as far as suppression cares.
#[derive(Clone, Copy, Debug)]
pub struct ContextMenuTarget<'a> {
    pub tag: &'a str,
    pub inside_slide: bool,
    pub is_lightbox_image: bool,
}

impl ContextMenuTarget<'_> {
    /// Deterrence only: gallery media and the lightbox image lose the menu.
    pub fn suppress(&self) -> bool {
        let is_media = self.tag.eq_ignore_ascii_case("img") || self.tag.eq_ignore_ascii_case("video");
        is_media && (self.inside_slide || self.is_lightbox_image)
    }
}
