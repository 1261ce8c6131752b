use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

pub(crate) const STYLE_ELEMENT_ID: &str = "vetrom-gallery-style";

pub(crate) const SVG_PREV: &str =
    r#"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M16 22L4 12L16 2L18 4L8 12L18 20L16 22Z"/></svg>"#;
pub(crate) const SVG_NEXT: &str =
    r#"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M8 22L20 12L8 2L6 4L16 12L6 20L8 22Z"/></svg>"#;

const MEDIA_NO_DRAG: &str = "
    -webkit-user-drag: none;
    user-drag: none;
    -webkit-user-select: none;
    -moz-user-select: none;
    user-select: none;";

const ROUND_CONTROL: &str = "
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    border: none;
    padding: 10px;
    cursor: pointer;
    user-select: none;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--vetrom-accent);
    transition: background 0.2s;";

/// The `:root` defaults carry the configured background so the theme pass
/// reads it back as the unset sentinel.
fn stylesheet(default_background: &str) -> String {
    format!(
        r#"
:root {{
    --vetrom-bg: {default_background};
    --vetrom-text: #000000;
    --vetrom-accent: rgba(0, 0, 0, 0.5);
    --vetrom-text-rgb: 0, 0, 0;
    --vetrom-lightbox-icon-color: #ffffff;
}}
.vetrom-gallery-container {{
    position: relative;
    max-width: 100%;
    padding-bottom: 50.625%;
    height: 0;
    overflow: hidden;
    border-radius: 8px;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
    margin: 20px auto;
}}
.vetrom-gallery-image-wrapper {{
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    display: flex;
    transition: transform 0.3s ease-in-out;
    cursor: pointer;
}}
.vetrom-gallery-slide {{
    flex: 0 0 100%;
    width: 100%;
    height: 100%;
    box-sizing: border-box;
    user-select: none;
    display: flex;
    align-items: center;
    justify-content: center;
    background-color: var(--vetrom-bg);
}}
.vetrom-gallery-slide img,
.vetrom-gallery-slide video {{
    display: block;
    width: 100%;
    height: 100%;
    border-radius: 8px;
    object-fit: contain;{MEDIA_NO_DRAG}
}}
.vetrom-gallery-slide video {{
    cursor: default;
}}
.vetrom-gallery-control {{{ROUND_CONTROL}
    color: var(--vetrom-text);
    z-index: 10;
    width: 40px;
    height: 40px;
}}
.vetrom-gallery-control svg {{
    width: 32px;
    height: 32px;
}}
.vetrom-gallery-control:hover,
.vetrom-lightbox-control:hover {{
    background: rgba(var(--vetrom-text-rgb), 0.7);
}}
.vetrom-gallery-control.prev {{ left: 10px; }}
.vetrom-gallery-control.next {{ right: 10px; }}
.vetrom-lightbox-overlay {{
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background: rgba(0, 0, 0, 0.9);
    z-index: 9999;
    display: none;
    align-items: center;
    justify-content: center;
    transition: opacity 0.3s;
    opacity: 0;
}}
.vetrom-lightbox-overlay.active {{
    display: flex;
    opacity: 1;
}}
.vetrom-lightbox-content {{
    position: relative;
    max-width: calc(100vw - 40px);
    max-height: calc(100vh - 40px);
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
}}
.vetrom-lightbox-image {{
    max-width: 100%;
    max-height: 100%;
    width: auto;
    height: auto;
    display: block;
    object-fit: contain;{MEDIA_NO_DRAG}
}}
.vetrom-lightbox-unsupported {{
    color: var(--vetrom-lightbox-icon-color);
    font-size: 1.5em;
    padding: 20px;
    background: rgba(0, 0, 0, 0.7);
    border-radius: 8px;
    text-align: center;
    max-width: 80%;
}}
.vetrom-lightbox-close {{
    position: absolute;
    top: 20px;
    right: 30px;
    color: var(--vetrom-lightbox-icon-color);
    font-size: 40px;
    font-weight: bold;
    transition: 0.2s;
    cursor: pointer;
    z-index: 10000;
    user-select: none;
    background: var(--vetrom-accent);
    border-radius: 50%;
    width: 50px;
    height: 50px;
    display: flex;
    align-items: center;
    justify-content: center;
    line-height: 1;
}}
.vetrom-lightbox-close:hover,
.vetrom-lightbox-close:focus {{
    color: #ccc;
}}
.vetrom-lightbox-control {{{ROUND_CONTROL}
    color: var(--vetrom-lightbox-icon-color);
    z-index: 10000;
    width: 50px;
    height: 50px;
}}
.vetrom-lightbox-control svg {{
    width: 40px;
    height: 40px;
}}
.vetrom-lightbox-control.prev {{ left: 20px; }}
.vetrom-lightbox-control.next {{ right: 20px; }}
"#
    )
}

/// Adds the widget stylesheet to `<head>`, or rewrites the one a previous
/// mount added when its default background differs. Returns whether the
/// document changed.
pub(crate) fn ensure_stylesheet(document: &Document, default_background: &str) -> Result<bool, JsValue> {
    let css = stylesheet(default_background);
    if let Some(existing) = document.get_element_by_id(STYLE_ELEMENT_ID) {
        if existing.text_content().as_deref() == Some(css.as_str()) {
            return Ok(false);
        }
        existing.set_text_content(Some(&css));
        return Ok(true);
    }
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&css));
    let parent: Element = match document.head() {
        Some(head) => head.into(),
        None => document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?,
    };
    parent.append_child(&style)?;
    Ok(true)
}
