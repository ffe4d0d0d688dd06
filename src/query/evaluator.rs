use std::sync::Arc;

use tracing::debug;

use super::Condition;
use crate::config::SetConfig;
use crate::index::{PhotoSet, TagIndex};
use crate::models::Photo;
use crate::store::PhotoStore;

/// Outcome of one album evaluation
///
/// Carries the matching photos together with the number of comparisons
/// charged to produce them, so the indexed and baseline strategies can be
/// compared on the same query.
#[derive(Clone, Debug, Default)]
pub struct Evaluation {
    /// Matching photos; ordering is strategy-dependent, see [`Album::evaluate`]
    pub photos: Vec<Arc<Photo>>,
    /// Comparisons charged: one per tag-equality or set-membership check
    pub comparisons: u64,
}

impl Evaluation {
    /// Paths of the matching photos, in result order
    pub fn paths(&self) -> Vec<&str> {
        self.photos.iter().map(|p| p.path()).collect()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// A named query bound to a photo store
///
/// The condition string is parsed once at construction. The album owns no
/// result state: [`Album::evaluate`] recomputes from scratch and returns
/// the photos together with the comparison count, so one album serves
/// independent queries back to back and never races on shared counters.
pub struct Album<'a> {
    name: String,
    condition: Condition,
    store: &'a dyn PhotoStore,
    set_config: SetConfig,
}

impl<'a> Album<'a> {
    pub fn new(name: impl Into<String>, condition: &str, store: &'a dyn PhotoStore) -> Self {
        Self {
            name: name.into(),
            condition: Condition::parse(condition),
            store,
            set_config: SetConfig::default(),
        }
    }

    /// Override the sizing of the probe set built for AND/OR evaluation
    pub fn with_set_config(mut self, set_config: SetConfig) -> Self {
        self.set_config = set_config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Resolve the album's condition against the bound store
    ///
    /// Uses the store's inverted index when it advertises one, otherwise
    /// scans the whole collection. The baseline path preserves photo
    /// insertion order; the indexed path follows postings order for single
    /// tags (and the larger posting's order for AND), while OR results
    /// come out in probe-set table order, which is not guaranteed stable.
    pub fn evaluate(&self) -> Evaluation {
        let evaluation = match self.store.tag_index() {
            Some(index) => self.evaluate_indexed(index),
            None => self.evaluate_scan(),
        };
        debug!(
            album = %self.name,
            condition = %self.condition,
            matches = evaluation.photos.len(),
            comparisons = evaluation.comparisons,
            "evaluated album"
        );
        evaluation
    }

    fn evaluate_indexed(&self, index: &TagIndex) -> Evaluation {
        match &self.condition {
            Condition::All => Evaluation {
                photos: self.store.photos().to_vec(),
                comparisons: 0,
            },
            Condition::Single(tag) => {
                // One charged comparison for the index probe
                let photos = index
                    .postings(tag)
                    .map(|posting| posting.photos().to_vec())
                    .unwrap_or_default();
                Evaluation {
                    photos,
                    comparisons: 1,
                }
            }
            Condition::And(left, right) => self.indexed_and(index, left, right),
            Condition::Or(left, right) => self.indexed_or(index, left, right),
        }
    }

    /// Intersection via the probe set, built from the smaller posting
    ///
    /// One comparison per postings fetch and one per membership probe, so
    /// the probe cost is the larger posting's length. An absent operand
    /// empties the result before the other operand is ever fetched.
    fn indexed_and(&self, index: &TagIndex, left: &str, right: &str) -> Evaluation {
        let mut comparisons = 1;
        let Some(first) = index.postings(left) else {
            return Evaluation {
                photos: Vec::new(),
                comparisons,
            };
        };
        comparisons += 1;
        let Some(second) = index.postings(right) else {
            return Evaluation {
                photos: Vec::new(),
                comparisons,
            };
        };

        let (smaller, larger) = if first.len() <= second.len() {
            (first, second)
        } else {
            (second, first)
        };

        let mut probe_set = PhotoSet::with_config(&self.set_config);
        for photo in smaller.photos() {
            probe_set.insert(Arc::clone(photo));
        }

        let mut photos = Vec::new();
        for photo in larger.photos() {
            comparisons += 1;
            if probe_set.contains(photo.path()) {
                photos.push(Arc::clone(photo));
            }
        }
        Evaluation {
            photos,
            comparisons,
        }
    }

    /// Union via the probe set
    ///
    /// One comparison per postings fetch. Inserts from the first posting
    /// establish the base set and are free; each insert from the second
    /// posting charges one. This asymmetry is part of the counting
    /// contract and must match the baseline's for comparability.
    fn indexed_or(&self, index: &TagIndex, left: &str, right: &str) -> Evaluation {
        let mut comparisons = 2;
        let mut union = PhotoSet::with_config(&self.set_config);

        if let Some(first) = index.postings(left) {
            for photo in first.photos() {
                union.insert(Arc::clone(photo));
            }
        }
        if let Some(second) = index.postings(right) {
            for photo in second.photos() {
                comparisons += 1;
                union.insert(Arc::clone(photo));
            }
        }
        Evaluation {
            photos: union.into_photos(),
            comparisons,
        }
    }

    fn evaluate_scan(&self) -> Evaluation {
        let all = self.store.photos();
        let mut comparisons = 0;
        let mut photos = Vec::new();

        match &self.condition {
            Condition::All => {
                return Evaluation {
                    photos: all.to_vec(),
                    comparisons: 0,
                }
            }
            Condition::Single(tag) => {
                for photo in all {
                    if scan_for_tag(photo, tag, &mut comparisons) {
                        photos.push(Arc::clone(photo));
                    }
                }
            }
            Condition::And(left, right) => {
                for photo in all {
                    // The second operand is only scanned once the first
                    // matched
                    if scan_for_tag(photo, left, &mut comparisons)
                        && scan_for_tag(photo, right, &mut comparisons)
                    {
                        photos.push(Arc::clone(photo));
                    }
                }
            }
            Condition::Or(left, right) => {
                for photo in all {
                    for tag in photo.tags() {
                        comparisons += 1;
                        if tag == left || tag == right {
                            photos.push(Arc::clone(photo));
                            break;
                        }
                    }
                }
            }
        }
        Evaluation {
            photos,
            comparisons,
        }
    }
}

/// Scan one photo's tag list for `tag`, charging one comparison per tag
/// examined until a match or exhaustion
fn scan_for_tag(photo: &Photo, tag: &str, comparisons: &mut u64) -> bool {
    for candidate in photo.tags() {
        *comparisons += 1;
        if candidate == tag {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{IndexedStore, LinearStore};

    fn sample_indexed() -> IndexedStore {
        let mut store = IndexedStore::new();
        store.add(Photo::new("a.jpg", ["animal", "grass"]));
        store.add(Photo::new("b.jpg", ["animal", "water"]));
        store
    }

    #[test]
    fn test_single_tag_indexed_charges_one() {
        let store = sample_indexed();
        let album = Album::new("animals", "animal", &store);

        let eval = album.evaluate();
        assert_eq!(eval.paths(), vec!["a.jpg", "b.jpg"]);
        assert_eq!(eval.comparisons, 1);
    }

    #[test]
    fn test_empty_condition_matches_all_for_free() {
        let store = sample_indexed();
        let album = Album::new("everything", "   ", &store);

        let eval = album.evaluate();
        assert_eq!(eval.len(), 2);
        assert_eq!(eval.comparisons, 0);
    }

    #[test]
    fn test_and_missing_first_operand_skips_second_fetch() {
        let store = sample_indexed();
        let album = Album::new("none", "nonexistent AND animal", &store);

        let eval = album.evaluate();
        assert!(eval.is_empty());
        assert_eq!(eval.comparisons, 1);
    }

    #[test]
    fn test_baseline_single_tag_counts_every_tag_examined() {
        let mut store = LinearStore::new();
        store.add(Photo::new("a.jpg", ["animal", "grass"]));
        store.add(Photo::new("b.jpg", ["water", "animal"]));
        let album = Album::new("animals", "animal", &store);

        let eval = album.evaluate();
        assert_eq!(eval.paths(), vec!["a.jpg", "b.jpg"]);
        // a.jpg: "animal" matches first (1); b.jpg: "water" then "animal" (2)
        assert_eq!(eval.comparisons, 3);
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let store = sample_indexed();
        let album = Album::new("animals", "animal AND grass", &store);

        let first = album.evaluate();
        let second = album.evaluate();
        assert_eq!(first.paths(), second.paths());
        assert_eq!(first.comparisons, second.comparisons);
    }
}
