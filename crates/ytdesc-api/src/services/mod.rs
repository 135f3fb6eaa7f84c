//! Business logic services.

pub mod link_extraction;

pub use link_extraction::LinkExtractor;
