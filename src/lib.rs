//! photodex: a tag-indexed photograph query engine
//!
//! Photographs carry tags; albums resolve flat boolean tag conditions
//! (`tag`, `tag1 AND tag2`, `tag1 OR tag2`) against a photo store. The
//! [`IndexedStore`] maintains an inverted index (tag to posting list) kept
//! consistent under add/delete, so conditions resolve from postings instead
//! of a full scan; the [`LinearStore`] baseline answers the same queries by
//! scanning and serves as the correctness and cost reference. Every
//! [`Album::evaluate`] call reports the number of comparisons it charged,
//! making the cost of the two strategies directly comparable.
//!
//! # Example
//!
//! ```
//! use photodex::{Album, IndexedStore, Photo, PhotoStore};
//!
//! let mut store = IndexedStore::new();
//! store.add(Photo::new("a.jpg", ["animal", "grass"]));
//! store.add(Photo::new("b.jpg", ["animal", "water"]));
//!
//! let album = Album::new("grazing", "animal AND grass", &store);
//! let eval = album.evaluate();
//! assert_eq!(eval.paths(), vec!["a.jpg"]);
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod query;
pub mod store;
pub mod testing;

pub use config::SetConfig;
pub use error::{PhotodexError, Result};
pub use index::{PhotoSet, PostingList, TagIndex};
pub use models::Photo;
pub use query::{Album, Condition, Evaluation};
pub use store::{IndexedStore, LinearStore, PhotoStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
