//! Concrete invariant checks for the inverted index

use crate::error::{PhotodexError, Result};
use crate::store::{IndexedStore, PhotoStore};

/// Every managed photo is reachable from each of the tags it carries
pub fn check_postings_complete(store: &IndexedStore) -> Result<()> {
    for photo in store.photos() {
        for tag in photo.tags() {
            let posted = store
                .photos_for_tag(tag)
                .iter()
                .any(|posted| posted.path() == photo.path());
            if !posted {
                return Err(PhotodexError::MissingPosting {
                    tag: tag.clone(),
                    path: photo.path().to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Every posted photo carries the tag it is posted under and is still
/// managed by the store
pub fn check_postings_minimal(store: &IndexedStore) -> Result<()> {
    for (tag, posting) in store.index().iter() {
        for photo in posting.photos() {
            if !photo.has_tag(tag) {
                return Err(PhotodexError::StalePosting {
                    tag: tag.to_string(),
                    path: photo.path().to_string(),
                });
            }
            if !store.contains(photo.path()) {
                return Err(PhotodexError::DanglingPosting {
                    tag: tag.to_string(),
                    path: photo.path().to_string(),
                });
            }
        }
    }
    Ok(())
}

/// No tag entry survives with an empty posting list
pub fn check_no_empty_postings(store: &IndexedStore) -> Result<()> {
    for (tag, posting) in store.index().iter() {
        if posting.is_empty() {
            return Err(PhotodexError::EmptyPosting {
                tag: tag.to_string(),
            });
        }
    }
    Ok(())
}

/// Run the full invariant suite against a store
pub fn check_all(store: &IndexedStore) -> Result<()> {
    check_postings_complete(store)?;
    check_postings_minimal(store)?;
    check_no_empty_postings(store)
}
