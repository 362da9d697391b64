//! Book metadata extraction from saved product pages

pub mod book_extractor;

pub use book_extractor::BookExtractor;
