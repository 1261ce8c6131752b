use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, HtmlMediaElement, HtmlSourceElement, NodeList,
};

use vetrom_gallery_core::layout::{
    CONTAINER_CLASS, INDEX_ATTRIBUTE, NEXT_CLASS, PREV_CLASS, SLIDE_CLASS, STRIP_CLASS,
};
use vetrom_gallery_core::{
    extract_items, CarouselAction, Command, GalleryItem, GalleryLayout, MarkerPattern,
    MediaElement, MediaKind,
};

use crate::lightbox::{create_button, create_html};
use crate::runtime::{on_click, MountedGallery, WidgetRuntime};
use crate::style::{SVG_NEXT, SVG_PREV};

pub(crate) const MEDIA_SELECTOR: &str = "img, video";

/// An `<img>` or `<video>` element found in a marked container.
#[derive(Clone, Debug)]
pub struct DomMedia(pub Element);

impl MediaElement for DomMedia {
    fn kind(&self) -> MediaKind {
        MediaKind::from_tag(&self.0.tag_name()).unwrap_or(MediaKind::Image)
    }

    fn own_src(&self) -> String {
        if let Some(image) = self.0.dyn_ref::<HtmlImageElement>() {
            return image.src();
        }
        if let Some(media) = self.0.dyn_ref::<HtmlMediaElement>() {
            return media.src();
        }
        self.0.get_attribute("src").unwrap_or_default()
    }

    fn nested_source_src(&self) -> Option<String> {
        let source = self.0.query_selector("source").ok().flatten()?;
        let source = source.dyn_into::<HtmlSourceElement>().ok()?;
        Some(source.src())
    }

    fn deep_copy(&self) -> Self {
        clone_element(&self.0).map(DomMedia).unwrap_or_else(|_| self.clone())
    }
}

fn clone_element(element: &Element) -> Result<Element, JsValue> {
    Ok(element.clone_node_with_deep(true)?.dyn_into::<Element>()?)
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn collect_media(container: &Element) -> Result<Vec<DomMedia>, JsValue> {
    let list = container.query_selector_all(MEDIA_SELECTOR)?;
    Ok(elements(&list).into_iter().map(DomMedia).collect())
}

/// Marked containers in document order that still need building.
pub(crate) fn find_containers(document: &Document, pattern: &MarkerPattern) -> Result<Vec<Element>, JsValue> {
    let divs = document.query_selector_all("div")?;
    Ok(elements(&divs)
        .into_iter()
        .filter(|div| div.is_connected() && !div.has_attribute(INDEX_ATTRIBUTE))
        .filter(|div| pattern.find_in_class_list(&div.class_name()).is_some())
        .collect())
}

/// Builds every marked container; returns how many galleries were registered.
pub(crate) fn scan_and_build(runtime: &Rc<WidgetRuntime>, pattern: &MarkerPattern) -> Result<usize, JsValue> {
    let mut built = 0;
    for container in find_containers(&runtime.document, pattern)? {
        // A marked div nested in an earlier one is gone by now.
        if !container.is_connected() {
            continue;
        }
        let media = collect_media(&container)?;
        if media.is_empty() {
            continue;
        }
        let index = runtime
            .widget
            .borrow_mut()
            .register(extract_items(&media))
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

        let mounted = {
            let widget = runtime.widget.borrow();
            let gallery = widget
                .gallery(index)
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            render_gallery(runtime, &GalleryLayout::plan(gallery), gallery.items())?
        };
        let parent = container
            .parent_node()
            .ok_or_else(|| JsValue::from_str("marked container has no parent"))?;
        parent.replace_child(&mounted.root, &container)?;
        runtime.mounts.borrow_mut().push(mounted);
        built += 1;
    }
    Ok(built)
}

fn render_gallery(
    runtime: &Rc<WidgetRuntime>,
    layout: &GalleryLayout,
    items: &[GalleryItem<DomMedia>],
) -> Result<MountedGallery, JsValue> {
    let document = &runtime.document;
    let gallery = layout.gallery;

    let root = create_html(document, "div", CONTAINER_CLASS)?;
    root.set_attribute(INDEX_ATTRIBUTE, &gallery.to_string())?;

    let strip = create_html(document, "div", STRIP_CLASS)?;
    strip.style().set_property("transform", &layout.initial_transform)?;

    let mut videos = Vec::with_capacity(layout.slides.len());
    for (slide, item) in layout.slides.iter().zip(items) {
        let slide_element = create_html(document, "div", SLIDE_CLASS)?;
        let media = clone_element(&item.markup().0)?;
        if slide.native_controls {
            media.set_attribute("controls", "")?;
            videos.push(media.dyn_ref::<HtmlMediaElement>().cloned());
        } else {
            videos.push(None);
        }
        slide_element.append_child(&media)?;

        if slide.opens_lightbox {
            let command = Command::OpenLightbox {
                gallery,
                slide: slide.position,
            };
            runtime.keep(on_click(&slide_element, Rc::downgrade(runtime), move |runtime, _event| {
                runtime.dispatch(command);
            }));
        }
        strip.append_child(&slide_element)?;
    }

    let prev = control_button(runtime, PREV_CLASS, SVG_PREV, "Previous slide", Command::Carousel {
        gallery,
        action: CarouselAction::Prev,
    })?;
    let next = control_button(runtime, NEXT_CLASS, SVG_NEXT, "Next slide", Command::Carousel {
        gallery,
        action: CarouselAction::Next,
    })?;

    root.append_child(&strip)?;
    root.append_child(&prev)?;
    root.append_child(&next)?;
    Ok(MountedGallery { root, strip, videos })
}

fn control_button(
    runtime: &Rc<WidgetRuntime>,
    direction: &str,
    icon: &str,
    label: &str,
    command: Command,
) -> Result<HtmlElement, JsValue> {
    let button = create_button(&runtime.document, &GalleryLayout::control_class(direction), icon, label)?;
    runtime.keep(on_click(&button, Rc::downgrade(runtime), move |runtime, event| {
        event.stop_propagation();
        runtime.dispatch(command);
    }));
    Ok(button)
}
