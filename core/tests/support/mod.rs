#![allow(dead_code)]

use vetrom_gallery_core::{extract_items, GalleryIndex, GalleryWidget, MediaElement, MediaKind};

#[derive(Clone, Debug, PartialEq)]
pub struct FakeMedia {
    pub kind: MediaKind,
    pub src: String,
    pub source: Option<String>,
}

impl FakeMedia {
    pub fn image(src: &str) -> Self {
        Self {
            kind: MediaKind::Image,
            src: src.to_string(),
            source: None,
        }
    }

    pub fn video(src: &str, source: Option<&str>) -> Self {
        Self {
            kind: MediaKind::Video,
            src: src.to_string(),
            source: source.map(str::to_string),
        }
    }
}

impl MediaElement for FakeMedia {
    fn kind(&self) -> MediaKind {
        self.kind
    }

    fn own_src(&self) -> String {
        self.src.clone()
    }

    fn nested_source_src(&self) -> Option<String> {
        self.source.clone()
    }

    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

pub fn images(count: usize) -> Vec<FakeMedia> {
    (0..count).map(|i| FakeMedia::image(&format!("img-{i}.jpg"))).collect()
}

/// Registers one gallery per media list, skipping empty ones the way the
/// page scan does.
pub fn build_widget(galleries: &[Vec<FakeMedia>]) -> (GalleryWidget<FakeMedia>, Vec<GalleryIndex>) {
    let mut widget = GalleryWidget::new();
    let mut indices = Vec::new();
    for media in galleries {
        if media.is_empty() {
            continue;
        }
        let index = widget
            .register(extract_items(media))
            .expect("non-empty gallery registers");
        indices.push(index);
    }
    (widget, indices)
}
