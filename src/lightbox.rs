use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlImageElement};

use vetrom_gallery_core::layout::{
    ACTIVE_CLASS, LIGHTBOX_CLOSE_CLASS, LIGHTBOX_CONTENT_CLASS, LIGHTBOX_IMAGE_CLASS,
    LIGHTBOX_OVERLAY_CLASS, LIGHTBOX_UNSUPPORTED_CLASS, NEXT_CLASS, PREV_CLASS,
};
use vetrom_gallery_core::{GalleryLayout, LightboxContent};

use crate::style::{SVG_NEXT, SVG_PREV};

pub(crate) fn create_html(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element(tag)?.dyn_into::<HtmlElement>()?;
    element.set_class_name(class);
    Ok(element)
}

pub(crate) fn create_button(document: &Document, class: &str, icon: &str, label: &str) -> Result<HtmlElement, JsValue> {
    let button = create_html(document, "button", class)?;
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", label)?;
    button.set_inner_html(icon);
    Ok(button)
}

pub(crate) fn is_same_node(target: &EventTarget, element: &Element) -> bool {
    let target: &JsValue = target.as_ref();
    let element: &JsValue = element.as_ref();
    target == element
}

/// The single overlay shared by every gallery on the page.
pub(crate) struct LightboxView {
    pub(crate) overlay: HtmlElement,
    content: HtmlElement,
    image: HtmlImageElement,
    unsupported: HtmlElement,
    pub(crate) close: HtmlElement,
    pub(crate) prev: HtmlElement,
    pub(crate) next: HtmlElement,
    body: HtmlElement,
}

impl LightboxView {
    pub(crate) fn create(document: &Document, unsupported_message: &str) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("lightbox needs a document body"))?;

        let overlay = create_html(document, "div", LIGHTBOX_OVERLAY_CLASS)?;
        overlay.set_attribute("role", "dialog")?;
        overlay.set_attribute("aria-modal", "true")?;

        let content = create_html(document, "div", LIGHTBOX_CONTENT_CLASS)?;
        overlay.append_child(&content)?;

        let image = create_html(document, "img", LIGHTBOX_IMAGE_CLASS)?.dyn_into::<HtmlImageElement>()?;
        image.set_alt("");

        let unsupported = create_html(document, "div", LIGHTBOX_UNSUPPORTED_CLASS)?;
        unsupported.set_text_content(Some(unsupported_message));

        let close = create_html(document, "span", LIGHTBOX_CLOSE_CLASS)?;
        close.set_attribute("role", "button")?;
        close.set_attribute("aria-label", "Close")?;
        close.set_inner_html("&times;");
        overlay.append_child(&close)?;

        let prev = create_button(
            document,
            &GalleryLayout::lightbox_control_class(PREV_CLASS),
            SVG_PREV,
            "Previous image",
        )?;
        overlay.append_child(&prev)?;
        let next = create_button(
            document,
            &GalleryLayout::lightbox_control_class(NEXT_CLASS),
            SVG_NEXT,
            "Next image",
        )?;
        overlay.append_child(&next)?;

        body.append_child(&overlay)?;
        Ok(Self {
            overlay,
            content,
            image,
            unsupported,
            close,
            prev,
            next,
            body,
        })
    }

    pub(crate) fn show(&self, content: &LightboxContent) -> Result<(), JsValue> {
        self.content.set_inner_html("");
        match content {
            LightboxContent::Image { src } => {
                self.image.set_src(src);
                self.content.append_child(&self.image)?;
            }
            LightboxContent::Unsupported => {
                self.content.append_child(&self.unsupported)?;
            }
        }
        Ok(())
    }

    pub(crate) fn set_open(&self, open: bool) -> Result<(), JsValue> {
        let classes = self.overlay.class_list();
        let body_style = self.body.style();
        if open {
            classes.add_1(ACTIVE_CLASS)?;
            body_style.set_property("overflow", "hidden")?;
        } else {
            classes.remove_1(ACTIVE_CLASS)?;
            body_style.set_property("overflow", "")?;
        }
        Ok(())
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.overlay.class_list().contains(ACTIVE_CLASS)
    }

    pub(crate) fn image(&self) -> &HtmlImageElement {
        &self.image
    }
}
