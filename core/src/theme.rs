//! Control colors derived from the host page background.
//!
//! Authors may pin `--vetrom-bg` (and optionally `--vetrom-text`) on the
//! document root; in that case only the RGB triple of the text color is
//! published. Otherwise the body background decides between white-on-dark
//! and black-on-light controls.

use crate::color::{parse_color, relative_luminance, Rgb};

pub const VAR_BACKGROUND: &str = "--vetrom-bg";
pub const VAR_TEXT: &str = "--vetrom-text";
pub const VAR_TEXT_RGB: &str = "--vetrom-text-rgb";
pub const VAR_ACCENT: &str = "--vetrom-accent";

pub const DARK_LUMINANCE_THRESHOLD: f64 = 0.5;
pub const ACCENT_ALPHA: f64 = 0.5;

/// What the resolver reads from the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeInputs {
    /// Computed `--vetrom-bg` on the document root.
    pub root_background: Option<String>,
    /// Computed `--vetrom-text` on the document root.
    pub root_text: Option<String>,
    /// Computed `background-color` of `<body>`.
    pub body_background: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeVariables {
    pub background: String,
    pub text: String,
    pub text_rgb: Rgb,
    pub accent: String,
}

impl ThemeVariables {
    pub fn for_background(background: &str) -> Self {
        let is_dark = relative_luminance(parse_color(background)) < DARK_LUMINANCE_THRESHOLD;
        let contrast = if is_dark { Rgb::WHITE } else { Rgb::BLACK };
        Self {
            background: background.trim().to_string(),
            text: contrast.hex(),
            text_rgb: contrast,
            accent: contrast.with_alpha(ACCENT_ALPHA),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.text_rgb == Rgb::WHITE
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeUpdate {
    AuthorControlled { text_rgb: Option<Rgb> },
    Derived(ThemeVariables),
}

impl ThemeUpdate {
    /// Custom properties to write on the document root, in write order.
    pub fn properties(&self) -> Vec<(&'static str, String)> {
        match self {
            ThemeUpdate::AuthorControlled { text_rgb } => text_rgb
                .iter()
                .map(|rgb| (VAR_TEXT_RGB, rgb.triple()))
                .collect(),
            ThemeUpdate::Derived(vars) => vec![
                (VAR_BACKGROUND, vars.background.clone()),
                (VAR_TEXT, vars.text.clone()),
                (VAR_TEXT_RGB, vars.text_rgb.triple()),
                (VAR_ACCENT, vars.accent.clone()),
            ],
        }
    }
}

/// Remembers the background it last published so a later re-run does not
/// mistake its own output for an author override.
#[derive(Clone, Debug)]
pub struct ThemeResolver {
    default_background: String,
    published_background: Option<String>,
}

impl ThemeResolver {
    pub fn new(default_background: impl Into<String>) -> Self {
        Self {
            default_background: default_background.into(),
            published_background: None,
        }
    }

    pub fn default_background(&self) -> &str {
        &self.default_background
    }

    pub fn is_author_override(&self, root_background: &str) -> bool {
        let value = root_background.trim();
        if value.is_empty() || same_color_text(value, &self.default_background) {
            return false;
        }
        match self.published_background.as_deref() {
            Some(published) => !same_color_text(value, published),
            None => true,
        }
    }

    pub fn resolve(&mut self, inputs: &ThemeInputs) -> ThemeUpdate {
        let root_background = inputs.root_background.as_deref().unwrap_or("");
        if self.is_author_override(root_background) {
            let text_rgb = inputs
                .root_text
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(parse_color);
            return ThemeUpdate::AuthorControlled { text_rgb };
        }
        let vars = ThemeVariables::for_background(&inputs.body_background);
        self.published_background = Some(vars.background.clone());
        ThemeUpdate::Derived(vars)
    }
}

fn same_color_text(a: &str, b: &str) -> bool {
    let strip = |value: &str| -> String {
        value
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| ch.to_ascii_lowercase())
            .collect()
    };
    strip(a) == strip(b)
}
