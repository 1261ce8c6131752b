pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod gallery;
pub mod item;
pub mod layout;
pub mod lightbox;
pub mod marker;
pub mod registry;
pub mod theme;
pub mod widget;

pub use color::{parse_color, relative_luminance, Rgb};
pub use command::{CarouselAction, Command, ContextMenuTarget, Effect, EffectSink};
pub use config::{GalleryConfig, DEFAULT_BACKGROUND_SENTINEL};
pub use error::GalleryError;
pub use gallery::{GalleryInstance, SlideView};
pub use item::{extract_items, resolve_src, GalleryItem, MediaElement, MediaKind};
pub use layout::{GalleryLayout, SlideLayout};
pub use lightbox::{LightboxContent, LightboxKey, LightboxState, DEFAULT_UNSUPPORTED_MESSAGE};
pub use marker::{MarkerError, MarkerMatch, MarkerPattern, DEFAULT_MARKER};
pub use registry::{GalleryIndex, Registry};
pub use theme::{ThemeInputs, ThemeResolver, ThemeUpdate, ThemeVariables};
pub use widget::GalleryWidget;
