use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A photograph identified by its file path, carrying a fixed list of tags
///
/// Identity is the path alone: two photos with the same path compare equal
/// even when their tag lists differ. Tags are fixed at construction and
/// keep their insertion order; retagging a photo means deleting it and
/// adding a replacement.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Photo {
    path: String,
    tags: Vec<String>,
}

impl Photo {
    /// Create a new photo from a path and its tags
    pub fn new<P, I, T>(path: P, tags: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            path: path.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// The file path identifying this photo
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The tags this photo carries, in insertion order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether this photo carries the given tag (exact, case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Photo {}

impl Hash for Photo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl fmt::Display for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}
