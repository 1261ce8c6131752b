use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{Document, Event, HtmlElement, HtmlMediaElement, Window};

use vetrom_gallery_core::{
    Command, Effect, EffectSink, GalleryConfig, GalleryIndex, GalleryWidget, LightboxState,
    MarkerPattern, SlideView, ThemeResolver,
};

use crate::builder::{self, DomMedia};
use crate::lightbox::{is_same_node, LightboxView};
use crate::{input, style, theme};

/// DOM handles of one built gallery, index-aligned with the registry.
pub(crate) struct MountedGallery {
    pub(crate) root: HtmlElement,
    pub(crate) strip: HtmlElement,
    /// One entry per slide; `Some` for video slides.
    pub(crate) videos: Vec<Option<HtmlMediaElement>>,
}

impl MountedGallery {
    fn apply(&self, view: &SlideView) -> Result<(), JsValue> {
        self.strip.style().set_property("transform", &view.transform())?;
        for slide in &view.pause {
            if let Some(Some(video)) = self.videos.get(*slide) {
                video.pause()?;
            }
        }
        Ok(())
    }
}

/// Everything one page needs: the widget model, the DOM it drives, and the
/// listeners keeping it alive.
pub struct WidgetRuntime {
    pub(crate) config: GalleryConfig,
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) widget: RefCell<GalleryWidget<DomMedia>>,
    pub(crate) mounts: RefCell<Vec<MountedGallery>>,
    pub(crate) lightbox: LightboxView,
    theme: RefCell<ThemeResolver>,
    listeners: RefCell<Vec<EventListener>>,
}

struct DomEffects<'a> {
    mounts: &'a [MountedGallery],
    lightbox: &'a LightboxView,
}

impl EffectSink for DomEffects<'_> {
    fn apply(&mut self, effect: Effect) {
        let result = match &effect {
            Effect::SlideChanged { gallery, view } => match self.mounts.get(gallery.0) {
                Some(mount) => mount.apply(view),
                None => Err(JsValue::from_str("gallery has no mounted view")),
            },
            Effect::LightboxShow(content) => self.lightbox.show(content),
            Effect::LightboxOpened => self.lightbox.set_open(true),
            Effect::LightboxClosed => self.lightbox.set_open(false),
        };
        if let Err(err) = result {
            gloo::console::warn!("vetrom gallery: failed to apply effect", format!("{effect:?}"), err);
        }
    }
}

impl WidgetRuntime {
    /// Injects styles, resolves the theme, creates the lightbox and builds
    /// every marked container in `document`.
    pub fn mount(window: &Window, document: &Document, config: GalleryConfig) -> Result<Rc<Self>, JsValue> {
        let pattern = match config.marker_pattern() {
            Ok(pattern) => pattern,
            Err(err) => {
                gloo::console::warn!(format!("vetrom gallery: {err}; using default marker"));
                MarkerPattern::default()
            }
        };
        style::ensure_stylesheet(document, &config.default_background)?;

        let mut resolver = ThemeResolver::new(config.default_background.clone());
        theme::refresh(&mut resolver, window, document)?;

        let lightbox = LightboxView::create(document, &config.unsupported_message)?;
        let runtime = Rc::new(Self {
            config,
            window: window.clone(),
            document: document.clone(),
            widget: RefCell::new(GalleryWidget::new()),
            mounts: RefCell::new(Vec::new()),
            lightbox,
            theme: RefCell::new(resolver),
            listeners: RefCell::new(Vec::new()),
        });

        runtime.attach_lightbox_listeners();
        input::attach_document_listeners(&runtime);
        runtime.watch_theme()?;
        let built = builder::scan_and_build(&runtime, &pattern)?;
        if runtime.config.debug {
            gloo::console::log!("vetrom gallery ready", built as u32, pattern.to_string());
        }
        Ok(runtime)
    }

    /// Runs one command and applies its effects. Rejected commands are
    /// logged and leave the page untouched.
    pub fn dispatch(&self, command: Command) {
        let mounts = self.mounts.borrow();
        let mut effects = DomEffects {
            mounts: &mounts,
            lightbox: &self.lightbox,
        };
        let result = self.widget.borrow_mut().dispatch(command, &mut effects);
        if let Err(err) = result {
            gloo::console::warn!(format!("vetrom gallery: {err}"), format!("{command:?}"));
        } else if self.config.debug {
            gloo::console::log!("vetrom gallery", format!("{command:?}"));
        }
    }

    pub fn gallery_count(&self) -> usize {
        self.widget.borrow().registry().len()
    }

    pub fn current_slide(&self, gallery: GalleryIndex) -> Option<usize> {
        self.widget
            .borrow()
            .gallery(gallery)
            .ok()
            .map(|g| g.current_slide())
    }

    pub fn lightbox_state(&self) -> LightboxState {
        self.widget.borrow().lightbox()
    }

    pub fn container(&self, gallery: GalleryIndex) -> Option<HtmlElement> {
        self.mounts.borrow().get(gallery.0).map(|mount| mount.root.clone())
    }

    pub fn overlay(&self) -> HtmlElement {
        self.lightbox.overlay.clone()
    }

    pub fn overlay_visible(&self) -> bool {
        self.lightbox.is_visible()
    }

    pub fn lightbox_image_src(&self) -> String {
        self.lightbox.image().src()
    }

    /// Re-derives the theme variables from the current page colors.
    pub fn refresh_theme(&self) {
        let result = theme::refresh(&mut self.theme.borrow_mut(), &self.window, &self.document);
        if let Err(err) = result {
            gloo::console::warn!("vetrom gallery: theme refresh failed", err);
        }
    }

    pub(crate) fn keep(&self, listener: EventListener) {
        self.listeners.borrow_mut().push(listener);
    }

    fn watch_theme(self: &Rc<Self>) -> Result<(), JsValue> {
        let weak = Rc::downgrade(self);
        let listener = theme::watch_color_scheme(&self.window, move || {
            if let Some(runtime) = weak.upgrade() {
                runtime.refresh_theme();
            }
        })?;
        if let Some(listener) = listener {
            self.keep(listener);
        }
        Ok(())
    }

    fn attach_lightbox_listeners(self: &Rc<Self>) {
        let close = on_click(&self.lightbox.close, Rc::downgrade(self), |runtime, _event| {
            runtime.dispatch(Command::CloseLightbox);
        });
        let prev = on_click(&self.lightbox.prev, Rc::downgrade(self), |runtime, event| {
            event.stop_propagation();
            runtime.dispatch(Command::LightboxPrev);
        });
        let next = on_click(&self.lightbox.next, Rc::downgrade(self), |runtime, event| {
            event.stop_propagation();
            runtime.dispatch(Command::LightboxNext);
        });
        let overlay_element = self.lightbox.overlay.clone();
        let background = on_click(&self.lightbox.overlay, Rc::downgrade(self), move |runtime, event| {
            let on_background = event
                .target()
                .map(|target| is_same_node(&target, &overlay_element))
                .unwrap_or(false);
            if on_background {
                runtime.dispatch(Command::CloseLightbox);
            }
        });
        for listener in [close, prev, next, background] {
            self.keep(listener);
        }
    }
}

/// Click listener that reaches the runtime through a weak handle.
pub(crate) fn on_click<F>(target: &HtmlElement, runtime: Weak<WidgetRuntime>, mut handler: F) -> EventListener
where
    F: FnMut(&WidgetRuntime, &Event) + 'static,
{
    EventListener::new(target, "click", move |event: &Event| {
        if let Some(runtime) = runtime.upgrade() {
            handler(&*runtime, event);
        }
    })
}
