use thiserror::Error;

/// Main error type for photodex operations
///
/// Not-found conditions (deleting an unknown path, querying an unknown tag)
/// are defined empty/no-op results, not errors. The variants here describe
/// structural damage to the inverted index that the maintenance protocol
/// rules out; the invariant checks in [`crate::testing`] report them so test
/// suites can fail hard on any occurrence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhotodexError {
    #[error("tag '{tag}' has an empty posting list but is still present in the index")]
    EmptyPosting { tag: String },

    #[error("photo '{path}' is missing from the posting list for its tag '{tag}'")]
    MissingPosting { tag: String, path: String },

    #[error("photo '{path}' is posted under tag '{tag}' it does not carry")]
    StalePosting { tag: String, path: String },

    #[error("photo '{path}' posted under tag '{tag}' is not managed by the store")]
    DanglingPosting { tag: String, path: String },
}

impl PhotodexError {
    /// The tag the violation was detected under.
    pub fn tag(&self) -> &str {
        match self {
            PhotodexError::EmptyPosting { tag }
            | PhotodexError::MissingPosting { tag, .. }
            | PhotodexError::StalePosting { tag, .. }
            | PhotodexError::DanglingPosting { tag, .. } => tag,
        }
    }
}

/// Result type alias for photodex operations
pub type Result<T> = std::result::Result<T, PhotodexError>;
