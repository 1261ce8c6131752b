use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement, Window};

use vetrom_gallery_core::theme::{VAR_BACKGROUND, VAR_TEXT};
use vetrom_gallery_core::{ThemeInputs, ThemeResolver, ThemeUpdate};

pub(crate) const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn computed_property(window: &Window, element: &web_sys::Element, name: &str) -> Result<String, JsValue> {
    let Some(style) = window.get_computed_style(element)? else {
        return Ok(String::new());
    };
    Ok(style.get_property_value(name)?.trim().to_string())
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

pub(crate) fn read_inputs(window: &Window, document: &Document) -> Result<ThemeInputs, JsValue> {
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;
    let body_background = match document.body() {
        Some(body) => computed_property(window, &body, "background-color")?,
        None => String::new(),
    };
    Ok(ThemeInputs {
        root_background: non_empty(computed_property(window, &root, VAR_BACKGROUND)?),
        root_text: non_empty(computed_property(window, &root, VAR_TEXT)?),
        body_background,
    })
}

pub(crate) fn apply(document: &Document, update: &ThemeUpdate) -> Result<(), JsValue> {
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("document has no root element"))?
        .dyn_into::<HtmlElement>()?;
    let style = root.style();
    for (name, value) in update.properties() {
        style.set_property(name, &value)?;
    }
    Ok(())
}

/// Reads the page, resolves, and publishes the custom properties.
pub(crate) fn refresh(resolver: &mut ThemeResolver, window: &Window, document: &Document) -> Result<ThemeUpdate, JsValue> {
    let inputs = read_inputs(window, document)?;
    let update = resolver.resolve(&inputs);
    apply(document, &update)?;
    Ok(update)
}

/// Calls `on_change` whenever the OS light/dark preference flips.
pub(crate) fn watch_color_scheme<F>(window: &Window, mut on_change: F) -> Result<Option<EventListener>, JsValue>
where
    F: FnMut() + 'static,
{
    let Some(query) = window.match_media(COLOR_SCHEME_QUERY)? else {
        return Ok(None);
    };
    Ok(Some(EventListener::new(&query, "change", move |_event: &Event| {
        on_change();
    })))
}
