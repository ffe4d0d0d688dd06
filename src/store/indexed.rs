use std::sync::Arc;

use tracing::debug;

use super::PhotoStore;
use crate::index::TagIndex;
use crate::models::Photo;

/// Photo store that keeps an inverted index consistent with the collection
///
/// `add` extends one posting per carried tag; `delete` removes the photo
/// from each of its tags' postings and prunes any posting that empties, so
/// the index never retains an empty posting and its size stays bounded by
/// the active tag count.
///
/// Duplicate paths on `add` are accepted without rejection. Because
/// postings are idempotent per path, the second photo's tags only extend
/// postings not already holding that path; a later `delete` of the path
/// removes the first occurrence and its postings. This looseness is
/// deliberate and exercised by tests.
#[derive(Clone, Debug, Default)]
pub struct IndexedStore {
    photos: Vec<Arc<Photo>>,
    index: TagIndex,
}

impl IndexedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Photos carrying `tag`, in first-posted order
    ///
    /// Unknown tags yield an empty slice rather than an absence the caller
    /// has to branch on.
    pub fn photos_for_tag(&self, tag: &str) -> &[Arc<Photo>] {
        self.index
            .postings(tag)
            .map(|posting| posting.photos())
            .unwrap_or(&[])
    }

    /// The inverted index over the managed photos
    pub fn index(&self) -> &TagIndex {
        &self.index
    }
}

impl PhotoStore for IndexedStore {
    fn add(&mut self, photo: Photo) {
        let photo = Arc::new(photo);
        for tag in photo.tags() {
            self.index.insert(tag, Arc::clone(&photo));
        }
        debug!(path = photo.path(), tags = photo.tags().len(), "indexed photo");
        self.photos.push(photo);
    }

    fn delete(&mut self, path: &str) {
        let Some(pos) = self.photos.iter().position(|p| p.path() == path) else {
            return;
        };
        let photo = self.photos.remove(pos);
        for tag in photo.tags() {
            self.index.remove(tag, path);
        }
        debug!(path, "removed photo and its postings");
    }

    fn photos(&self) -> &[Arc<Photo>] {
        &self.photos
    }

    fn tag_index(&self) -> Option<&TagIndex> {
        Some(&self.index)
    }
}
