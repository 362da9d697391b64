//! # book-packer
//!
//! Extracts book metadata (author, title, price, shipping weight, ISBN-10)
//! from saved product pages and packs the books into shipping boxes that
//! never exceed a weight limit.
//!
//! Packing is a deterministic greedy heuristic, not an optimal solver: books
//! are ranked heaviest first, then each box is filled by scanning the ranked
//! list for every book that still fits.
//!
//! ## Quick Start
//!
//! ```rust
//! use book_packer::core::{Book, GreedyPacker};
//!
//! let books = vec![
//!     Book::with_weight("Foo", 10.0),
//!     Book::with_weight("Bar", 1.0),
//!     Book::with_weight("Baz", 5.0),
//! ];
//!
//! let boxes = GreedyPacker::default().pack(&books)?;
//! assert_eq!(boxes.len(), 2);
//! assert_eq!(boxes[1].total_weight, 6.0);
//! # Ok::<(), book_packer::core::PackingError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`core`] - Book and container types, ranking and packing
//! - [`extract`] - Product page parsing
//! - [`export`] - JSON and Markdown output
//! - [`config`] - TOML configuration and validation
//! - [`cli`] - Command-line interface

/// Command-line interface and argument parsing
pub mod cli;
/// Configuration management and validation
pub mod config;
/// Core types, ranking and packing
pub mod core;
/// Output of packing results
pub mod export;
/// Book extraction from product pages
pub mod extract;
/// Path validation for user-supplied locations
pub mod security;

pub use crate::core::errors::{BookPackerError, PackerResult};
pub use crate::core::{rank, Book, Container, GreedyPacker, PackingError};
