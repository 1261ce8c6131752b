#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Matches the upper-case `tagName` reported by the DOM.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("img") {
            Some(MediaKind::Image)
        } else if tag.eq_ignore_ascii_case("video") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

/// A media node found inside a marked container.
pub trait MediaElement {
    fn kind(&self) -> MediaKind;
    /// The element's own resolved `src`.
    fn own_src(&self) -> String;
    /// `src` of the first nested `<source>`, if there is one.
    fn nested_source_src(&self) -> Option<String>;
    /// Deep copy kept for re-cloning into the rebuilt slide.
    fn deep_copy(&self) -> Self
    where
        Self: Sized;
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem<M> {
    src: String,
    kind: MediaKind,
    markup: M,
}

impl<M: MediaElement> GalleryItem<M> {
    pub fn from_element(element: &M) -> Self {
        let kind = element.kind();
        Self {
            src: resolve_src(element),
            kind,
            markup: element.deep_copy(),
        }
    }
}

impl<M> GalleryItem<M> {
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn markup(&self) -> &M {
        &self.markup
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Images use their own `src`; videos prefer a non-empty nested `<source>`.
pub fn resolve_src<M: MediaElement>(element: &M) -> String {
    match element.kind() {
        MediaKind::Image => element.own_src(),
        MediaKind::Video => element
            .nested_source_src()
            .filter(|src| !src.trim().is_empty())
            .unwrap_or_else(|| element.own_src()),
    }
}

/// Builds one item per media element, preserving document order.
pub fn extract_items<M: MediaElement>(elements: &[M]) -> Vec<GalleryItem<M>> {
    elements.iter().map(GalleryItem::from_element).collect()
}
