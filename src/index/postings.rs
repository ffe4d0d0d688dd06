use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::Photo;

/// Photos carrying one tag, in first-posted order
#[derive(Clone, Debug, Default)]
pub struct PostingList {
    photos: Vec<Arc<Photo>>,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a photo to this posting list
    ///
    /// Re-posting a path already present is a no-op; returns whether the
    /// photo was actually added.
    pub fn add(&mut self, photo: Arc<Photo>) -> bool {
        if self.contains(photo.path()) {
            return false;
        }
        self.photos.push(photo);
        true
    }

    /// Remove the photo with the given path; returns whether it was present
    pub fn remove(&mut self, path: &str) -> bool {
        let before = self.photos.len();
        self.photos.retain(|p| p.path() != path);
        self.photos.len() != before
    }

    pub fn contains(&self, path: &str) -> bool {
        self.photos.iter().any(|p| p.path() == path)
    }

    /// The posted photos, in first-posted order
    pub fn photos(&self) -> &[Arc<Photo>] {
        &self.photos
    }

    /// Number of photos posted under this tag
    pub fn photo_frequency(&self) -> usize {
        self.photos.len()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Inverted index mapping each active tag to its posting list
///
/// Keys are ordered byte-wise (case-sensitive, no normalization), so
/// [`TagIndex::tags`] walks tags lexicographically. A tag is present iff at
/// least one managed photo currently carries it: removal prunes any posting
/// that empties, so the index size stays bounded by the active tag count.
#[derive(Clone, Debug, Default)]
pub struct TagIndex {
    postings: BTreeMap<String, PostingList>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a photo under a tag, creating the posting list on first use
    ///
    /// Idempotent per photo path: inserting an already-posted photo leaves
    /// the posting unchanged.
    pub fn insert(&mut self, tag: &str, photo: Arc<Photo>) {
        self.postings.entry(tag.to_string()).or_default().add(photo);
    }

    /// Look up the posting list for a tag
    ///
    /// A miss is a defined "no photos" result, not an error, and allocates
    /// nothing.
    pub fn postings(&self, tag: &str) -> Option<&PostingList> {
        self.postings.get(tag)
    }

    /// Remove a photo from a tag's posting list
    ///
    /// Deletes the tag entry entirely when its posting empties.
    pub fn remove(&mut self, tag: &str, path: &str) {
        if let Some(posting) = self.postings.get_mut(tag) {
            posting.remove(path);
            if posting.is_empty() {
                self.postings.remove(tag);
            }
        }
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.postings.contains_key(tag)
    }

    /// Number of active tags
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Active tags in lexicographic order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Tags and their posting lists in lexicographic tag order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingList)> {
        self.postings.iter().map(|(tag, posting)| (tag.as_str(), posting))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(path: &str, tags: &[&str]) -> Arc<Photo> {
        Arc::new(Photo::new(path, tags.iter().copied()))
    }

    #[test]
    fn test_insert_creates_and_extends() {
        let mut index = TagIndex::new();
        index.insert("animal", photo("a.jpg", &["animal"]));
        index.insert("animal", photo("b.jpg", &["animal"]));

        let posting = index.postings("animal").unwrap();
        assert_eq!(posting.len(), 2);
        assert_eq!(posting.photos()[0].path(), "a.jpg");
        assert_eq!(posting.photos()[1].path(), "b.jpg");
    }

    #[test]
    fn test_insert_is_idempotent_per_path() {
        let mut index = TagIndex::new();
        index.insert("animal", photo("a.jpg", &["animal"]));
        index.insert("animal", photo("a.jpg", &["animal"]));

        assert_eq!(index.postings("animal").unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_tag_lookup_is_none() {
        let index = TagIndex::new();
        assert!(index.postings("nonexistent").is_none());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_remove_prunes_empty_posting() {
        let mut index = TagIndex::new();
        index.insert("x", photo("a.jpg", &["x"]));
        assert!(index.contains_tag("x"));

        index.remove("x", "a.jpg");
        assert!(!index.contains_tag("x"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_remove_keeps_nonempty_posting() {
        let mut index = TagIndex::new();
        index.insert("x", photo("a.jpg", &["x"]));
        index.insert("x", photo("b.jpg", &["x"]));

        index.remove("x", "a.jpg");
        let posting = index.postings("x").unwrap();
        assert_eq!(posting.len(), 1);
        assert_eq!(posting.photos()[0].path(), "b.jpg");
    }

    #[test]
    fn test_remove_unknown_tag_is_noop() {
        let mut index = TagIndex::new();
        index.insert("x", photo("a.jpg", &["x"]));
        index.remove("y", "a.jpg");
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_tags_are_lexicographic_and_case_sensitive() {
        let mut index = TagIndex::new();
        index.insert("water", photo("a.jpg", &["water"]));
        index.insert("Animal", photo("a.jpg", &["Animal"]));
        index.insert("animal", photo("a.jpg", &["animal"]));

        let tags: Vec<&str> = index.tags().collect();
        assert_eq!(tags, vec!["Animal", "animal", "water"]);
    }
}
