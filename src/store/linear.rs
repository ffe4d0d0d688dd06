use std::sync::Arc;

use tracing::debug;

use super::PhotoStore;
use crate::models::Photo;

/// Flat append-only store with linear find/delete and no tag index
///
/// The correctness and cost baseline the indexed store is measured
/// against: albums bound to it answer every condition by scanning the
/// whole collection.
#[derive(Clone, Debug, Default)]
pub struct LinearStore {
    photos: Vec<Arc<Photo>>,
}

impl LinearStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhotoStore for LinearStore {
    fn add(&mut self, photo: Photo) {
        debug!(path = photo.path(), "adding photo");
        self.photos.push(Arc::new(photo));
    }

    fn delete(&mut self, path: &str) {
        if let Some(pos) = self.photos.iter().position(|p| p.path() == path) {
            self.photos.remove(pos);
            debug!(path, "deleted photo");
        }
    }

    fn photos(&self) -> &[Arc<Photo>] {
        &self.photos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = LinearStore::new();
        store.add(Photo::new("a.jpg", ["x"]));
        store.add(Photo::new("b.jpg", ["y"]));

        let paths: Vec<&str> = store.photos().iter().map(|p| p.path()).collect();
        assert_eq!(paths, vec!["a.jpg", "b.jpg"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_unknown_path_is_noop() {
        let mut store = LinearStore::new();
        store.add(Photo::new("a.jpg", ["x"]));
        store.delete("missing.jpg");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_find_and_contains() {
        let mut store = LinearStore::new();
        store.add(Photo::new("a.jpg", ["x"]));

        assert!(store.contains("a.jpg"));
        assert!(!store.contains("b.jpg"));
        assert_eq!(store.find("a.jpg").unwrap().tags(), &["x"]);
    }

    #[test]
    fn test_no_tag_index_capability() {
        let store = LinearStore::new();
        assert!(store.tag_index().is_none());
    }
}
