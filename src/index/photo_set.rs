use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::config::SetConfig;
use crate::models::Photo;

/// Open-addressing set of photos keyed by path identity
///
/// Backs the AND/OR combination of postings lists: hash on the path,
/// resolve collisions by linear probing, double the table once occupancy
/// passes the configured load bound. Each instance exclusively owns its
/// slots and lives for a single query.
///
/// Export order follows table order, which depends on hashing and
/// capacity; callers needing a stable order must sort.
#[derive(Debug)]
pub struct PhotoSet {
    table: Vec<Option<Arc<Photo>>>,
    len: usize,
    max_load_percent: u8,
}

impl PhotoSet {
    pub fn new() -> Self {
        Self::with_config(&SetConfig::default())
    }

    pub fn with_config(config: &SetConfig) -> Self {
        Self {
            table: vec![None; config.initial_capacity.max(1)],
            len: 0,
            // A full table would make probe loops diverge
            max_load_percent: config.max_load_percent.clamp(10, 90),
        }
    }

    /// Insert a photo; returns whether it was newly added
    pub fn insert(&mut self, photo: Arc<Photo>) -> bool {
        if self.contains(photo.path()) {
            return false;
        }
        if (self.len + 1) * 100 > self.table.len() * self.max_load_percent as usize {
            self.grow();
        }

        let mut slot = self.slot_for(photo.path());
        while self.table[slot].is_some() {
            slot = (slot + 1) % self.table.len();
        }
        self.table[slot] = Some(photo);
        self.len += 1;
        true
    }

    /// Whether a photo with the given path is in the set
    pub fn contains(&self, path: &str) -> bool {
        let mut slot = self.slot_for(path);
        while let Some(occupant) = &self.table[slot] {
            if occupant.path() == path {
                return true;
            }
            slot = (slot + 1) % self.table.len();
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Export the members in table order
    pub fn into_photos(self) -> Vec<Arc<Photo>> {
        self.table.into_iter().flatten().collect()
    }

    fn slot_for(&self, path: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        (hasher.finish() as usize) % self.table.len()
    }

    fn grow(&mut self) {
        let doubled = self.table.len() * 2;
        let old = std::mem::replace(&mut self.table, vec![None; doubled]);
        self.len = 0;
        for photo in old.into_iter().flatten() {
            self.insert(photo);
        }
    }
}

impl Default for PhotoSet {
    fn default() -> Self {
        Self::new()
    }
}
