use crate::command::{CarouselAction, Command, Effect, EffectSink};
use crate::error::GalleryError;
use crate::gallery::{wrap_back, wrap_forward, GalleryInstance};
use crate::item::GalleryItem;
use crate::lightbox::{LightboxContent, LightboxState};
use crate::registry::{GalleryIndex, Registry};

/// Page-wide context: the gallery registry plus the shared lightbox.
///
/// Commands that name a gallery or slide are validated before anything
/// changes; a rejected command leaves the widget untouched and emits no
/// effects. Lightbox navigation while closed is a no-op.
#[derive(Clone, Debug)]
pub struct GalleryWidget<M> {
    registry: Registry<M>,
    lightbox: LightboxState,
}

impl<M> GalleryWidget<M> {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            lightbox: LightboxState::Closed,
        }
    }

    pub fn register(&mut self, items: Vec<GalleryItem<M>>) -> Result<GalleryIndex, GalleryError> {
        self.registry.register(items)
    }

    pub fn registry(&self) -> &Registry<M> {
        &self.registry
    }

    pub fn gallery(&self, index: GalleryIndex) -> Result<&GalleryInstance<M>, GalleryError> {
        self.registry.get(index)
    }

    pub fn lightbox(&self) -> LightboxState {
        self.lightbox
    }

    pub fn dispatch(&mut self, command: Command, sink: &mut impl EffectSink) -> Result<(), GalleryError> {
        match command {
            Command::Carousel { gallery, action } => {
                let instance = self.registry.get_mut(gallery)?;
                let view = match action {
                    CarouselAction::Next => instance.next(),
                    CarouselAction::Prev => instance.prev(),
                    CarouselAction::GoTo(slide) => instance.go_to(slide)?,
                };
                sink.apply(Effect::SlideChanged { gallery, view });
            }
            Command::OpenLightbox { gallery, slide } => {
                let content = self.content_at(gallery, slide)?;
                self.lightbox = LightboxState::Open { gallery, slide };
                sink.apply(Effect::LightboxShow(content));
                sink.apply(Effect::LightboxOpened);
            }
            Command::LightboxNext => self.step_lightbox(wrap_forward, sink)?,
            Command::LightboxPrev => self.step_lightbox(wrap_back, sink)?,
            Command::CloseLightbox => {
                let LightboxState::Open { gallery, slide } = self.lightbox else {
                    return Ok(());
                };
                let view = self.registry.get_mut(gallery)?.go_to(slide)?;
                self.lightbox = LightboxState::Closed;
                sink.apply(Effect::SlideChanged { gallery, view });
                sink.apply(Effect::LightboxClosed);
            }
        }
        Ok(())
    }

    /// Convenience for callers that only want the effect list.
    pub fn dispatch_collect(&mut self, command: Command) -> Result<Vec<Effect>, GalleryError> {
        let mut effects = Vec::new();
        self.dispatch(command, &mut effects)?;
        Ok(effects)
    }

    fn content_at(&self, gallery: GalleryIndex, slide: usize) -> Result<LightboxContent, GalleryError> {
        let instance = self.registry.get(gallery)?;
        instance.check_slide(slide)?;
        Ok(LightboxContent::for_item(&instance.items()[slide]))
    }

    fn step_lightbox(
        &mut self,
        step: fn(usize, usize) -> usize,
        sink: &mut impl EffectSink,
    ) -> Result<(), GalleryError> {
        let LightboxState::Open { gallery, slide } = self.lightbox else {
            return Ok(());
        };
        let len = self.registry.get(gallery)?.len();
        let slide = step(slide, len);
        let content = self.content_at(gallery, slide)?;
        self.lightbox = LightboxState::Open { gallery, slide };
        sink.apply(Effect::LightboxShow(content));
        Ok(())
    }
}

impl<M> Default for GalleryWidget<M> {
    fn default() -> Self {
        Self::new()
    }
}
