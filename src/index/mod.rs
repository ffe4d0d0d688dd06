//! Inverted index primitives: postings lists, the tag index, and the
//! open-addressing set used to combine postings at query time.

pub mod photo_set;
pub mod postings;

pub use photo_set::PhotoSet;
pub use postings::{PostingList, TagIndex};
