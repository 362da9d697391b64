//! Security utilities for book-packer

pub mod path_validation;

pub use path_validation::{validate_existing_dir, validate_path};
