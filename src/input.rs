use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

use vetrom_gallery_core::layout::{LIGHTBOX_IMAGE_CLASS, SLIDE_CLASS};
use vetrom_gallery_core::{Command, ContextMenuTarget, LightboxKey};

use crate::runtime::WidgetRuntime;

fn context_menu_suppressed(target: &Element) -> bool {
    let tag = target.tag_name();
    let inside_slide = target
        .closest(&format!(".{SLIDE_CLASS}"))
        .ok()
        .flatten()
        .is_some();
    ContextMenuTarget {
        tag: &tag,
        inside_slide,
        is_lightbox_image: target.class_list().contains(LIGHTBOX_IMAGE_CLASS),
    }
    .suppress()
}

/// Arrow keys and escape while the lightbox is open, plus context menu
/// suppression on gallery media.
pub(crate) fn attach_document_listeners(runtime: &Rc<WidgetRuntime>) {
    let document = runtime.document.clone();

    let weak = Rc::downgrade(runtime);
    let keydown = EventListener::new(&document, "keydown", move |event: &Event| {
        let Some(runtime) = weak.upgrade() else {
            return;
        };
        if !runtime.lightbox_state().is_open() {
            return;
        }
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Some(key) = LightboxKey::from_key(&event.key()) {
            runtime.dispatch(Command::from(key));
        }
    });

    // gloo listeners are passive by default, which drops prevent_default.
    let contextmenu = EventListener::new_with_options(
        &document,
        "contextmenu",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(target) = event.target().and_then(|target| target.dyn_into::<Element>().ok()) else {
                return;
            };
            if context_menu_suppressed(&target) {
                event.prevent_default();
            }
        },
    );

    runtime.keep(keydown);
    runtime.keep(contextmenu);
}
