use serde::{Deserialize, Serialize};

use crate::lightbox::DEFAULT_UNSUPPORTED_MESSAGE;
use crate::marker::{MarkerError, MarkerPattern, DEFAULT_MARKER};

/// Default `--vetrom-bg`; any other root value counts as an author override.
pub const DEFAULT_BACKGROUND_SENTINEL: &str = "#ffffff";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    pub marker: String,
    pub default_background: String,
    pub unsupported_message: String,
    pub debug: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            default_background: DEFAULT_BACKGROUND_SENTINEL.to_string(),
            unsupported_message: DEFAULT_UNSUPPORTED_MESSAGE.to_string(),
            debug: false,
        }
    }
}

impl GalleryConfig {
    pub fn marker_pattern(&self) -> Result<MarkerPattern, MarkerError> {
        MarkerPattern::parse(self.marker.trim())
    }
}
