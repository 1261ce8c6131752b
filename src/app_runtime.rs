use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Event;

use vetrom_gallery_core::GalleryConfig;

use crate::boot;
use crate::runtime::WidgetRuntime;

thread_local! {
    /// Holds the mounted runtime for the page lifetime; listeners only keep
    /// weak references.
    static RUNTIME: RefCell<Option<Rc<WidgetRuntime>>> = RefCell::new(None);
    static INSTALLED: Cell<bool> = Cell::new(false);
}

fn mount_page(config: GalleryConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    match WidgetRuntime::mount(&window, &document, config) {
        Ok(runtime) => RUNTIME.with(|slot| {
            *slot.borrow_mut() = Some(runtime);
        }),
        Err(err) => gloo::console::error!("vetrom gallery failed to start", err),
    }
}

/// Mounts once per page, waiting for `DOMContentLoaded` if the document is
/// still loading.
pub(crate) fn install() {
    let already_installed = INSTALLED.with(|flag| flag.replace(true));
    if already_installed {
        return;
    }
    let config = boot::load_config();
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_event: &Event| {
            mount_page(config);
        })
        .forget();
    } else {
        mount_page(config);
    }
}
