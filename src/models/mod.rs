//! Core data models

pub mod photo;

pub use photo::Photo;
