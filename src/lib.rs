//! Turns `<div class="vetrom-gallery">` containers of images and videos
//! into carousels that share one full-screen lightbox.
//!
//! The model lives in [`vetrom_gallery_core`]; this crate drives the DOM.

#[cfg(target_arch = "wasm32")]
mod app_runtime;
mod boot;
mod builder;
mod input;
mod lightbox;
mod runtime;
mod style;
mod theme;

pub use builder::DomMedia;
pub use runtime::WidgetRuntime;
pub use vetrom_gallery_core as model;

/// Parses a host configuration string the same way the page global is read.
pub fn parse_config(json: &str) -> Result<model::GalleryConfig, serde_json::Error> {
    boot::parse_config(json)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app_runtime::install();
}
