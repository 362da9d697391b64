use async_trait::async_trait;
use std::path::Path;

use crate::core::errors::{ExportError, ExtractionError, PackerResult};
use crate::core::types::{Book, Container, PackingSummary};

/// Anything with a shipping weight
pub trait Weighted {
    fn weight(&self) -> f64;
}

/// An item the greedy packer can place into a container.
///
/// The placed flag is the packer's exit condition, so an item must enter
/// `pack` unplaced and is flipped exactly once.
pub trait Packable: Weighted {
    fn is_placed(&self) -> bool;

    fn mark_placed(&mut self);
}

/// Source of books for the packing pipeline
#[async_trait]
pub trait BookSource {
    /// Extract one book from an HTML document
    fn extract(&self, html: &str) -> Result<Book, ExtractionError>;

    /// Extract every book found under `dir`
    async fn extract_dir(&self, dir: &Path) -> PackerResult<Vec<Book>>;
}

/// Renders a packing result for output
pub trait ShipmentExporter {
    /// Render containers as JSON
    fn export_to_json(&self, containers: &[Container<Book>]) -> Result<String, ExportError>;

    /// Render containers as a Markdown report
    fn export_to_markdown(&self, containers: &[Container<Book>]) -> Result<String, ExportError>;

    /// Totals across all containers
    fn generate_summary(&self, containers: &[Container<Book>]) -> PackingSummary;
}
