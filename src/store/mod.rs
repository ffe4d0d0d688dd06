//! Photo stores: the scan baseline and the index-maintaining manager
//!
//! Both stores expose the same add/delete/photos surface through
//! [`PhotoStore`]. A store that maintains an inverted index advertises it
//! through [`PhotoStore::tag_index`]; the album evaluator selects its
//! algorithm from that capability instead of inspecting concrete types.

pub mod indexed;
pub mod linear;

pub use indexed::IndexedStore;
pub use linear::LinearStore;

use std::sync::Arc;

use crate::index::TagIndex;
use crate::models::Photo;

/// A managed collection of photos that albums can query
pub trait PhotoStore {
    /// Add a photo to the collection
    ///
    /// Always succeeds. Duplicate paths are accepted as-is; the store
    /// performs no uniqueness check on add.
    fn add(&mut self, photo: Photo);

    /// Remove the photo with the given path
    ///
    /// Unknown paths are a no-op, making deletion idempotent.
    fn delete(&mut self, path: &str);

    /// All managed photos, in insertion order
    fn photos(&self) -> &[Arc<Photo>];

    /// The inverted index, when this store maintains one
    fn tag_index(&self) -> Option<&TagIndex> {
        None
    }

    /// Number of managed photos
    fn len(&self) -> usize {
        self.photos().len()
    }

    fn is_empty(&self) -> bool {
        self.photos().is_empty()
    }

    /// Find a photo by path (linear scan over the collection)
    fn find(&self, path: &str) -> Option<&Arc<Photo>> {
        self.photos().iter().find(|p| p.path() == path)
    }

    fn contains(&self, path: &str) -> bool {
        self.find(path).is_some()
    }
}
