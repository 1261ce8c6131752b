use std::fmt;

use crate::error::GalleryError;
use crate::gallery::GalleryInstance;
use crate::item::GalleryItem;

/// Position of a gallery in the registry; stable for the page lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GalleryIndex(pub usize);

impl fmt::Display for GalleryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Append-only list of galleries in creation order.
#[derive(Clone, Debug)]
pub struct Registry<M> {
    galleries: Vec<GalleryInstance<M>>,
}

impl<M> Registry<M> {
    pub fn new() -> Self {
        Self {
            galleries: Vec::new(),
        }
    }

    pub fn register(&mut self, items: Vec<GalleryItem<M>>) -> Result<GalleryIndex, GalleryError> {
        let index = GalleryIndex(self.galleries.len());
        self.galleries.push(GalleryInstance::new(index, items)?);
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }

    pub fn get(&self, index: GalleryIndex) -> Result<&GalleryInstance<M>, GalleryError> {
        let len = self.galleries.len();
        self.galleries
            .get(index.0)
            .ok_or(GalleryError::UnknownGallery { index, len })
    }

    pub fn get_mut(&mut self, index: GalleryIndex) -> Result<&mut GalleryInstance<M>, GalleryError> {
        let len = self.galleries.len();
        self.galleries
            .get_mut(index.0)
            .ok_or(GalleryError::UnknownGallery { index, len })
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryInstance<M>> {
        self.galleries.iter()
    }
}

impl<M> Default for Registry<M> {
    fn default() -> Self {
        Self::new()
    }
}
