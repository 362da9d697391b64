use chrono::Utc;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::core::constants::export::DEFAULT_JSON_INDENT;
use crate::core::errors::ExportError;
use crate::core::{Book, Container, ExportFormat, PackingSummary, ShipmentExporter};

/// Service for exporting a packing result to JSON or Markdown.
///
/// The JSON layout is the one shipping tools consume: an array of boxes,
/// each with `id`, `totalWeight` and the full book records in packing order.
///
/// # Examples
///
/// ```rust
/// use book_packer::core::{Book, GreedyPacker, ShipmentExporter};
/// use book_packer::export::ExportService;
///
/// let books = vec![Book::with_weight("Foo", 10.0), Book::with_weight("Bar", 1.0)];
/// let boxes = GreedyPacker::default().pack(&books)?;
///
/// let json = ExportService::new().export_to_json(&boxes)?;
/// assert!(json.contains("\"totalWeight\": 10.0"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ExportService {
    indent: usize,
}

impl ExportService {
    /// Create an ExportService with the default 4-space JSON indentation
    pub fn new() -> Self {
        Self {
            indent: DEFAULT_JSON_INDENT,
        }
    }

    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    /// Render `containers` in the requested format
    pub fn export(
        &self,
        containers: &[Container<Book>],
        format: ExportFormat,
    ) -> Result<String, ExportError> {
        match format {
            ExportFormat::Json => self.export_to_json(containers),
            ExportFormat::Markdown => self.export_to_markdown(containers),
        }
    }

    /// Write rendered output to `path`, replacing any existing file.
    ///
    /// The file handle lives only for this call and is flushed and closed
    /// before returning, including on error.
    pub async fn write_output(&self, path: &Path, content: &str) -> Result<(), ExportError> {
        let write_error = |source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut file = fs::File::create(path).await.map_err(write_error)?;
        file.write_all(content.as_bytes()).await.map_err(write_error)?;
        file.flush().await.map_err(write_error)?;
        Ok(())
    }

    fn add_markdown_container(&self, lines: &mut Vec<String>, container: &Container<Book>) {
        lines.push(format!(
            "## Box {} ({} lbs, {} book{})",
            container.id,
            format_weight(container.total_weight),
            container.len(),
            if container.len() == 1 { "" } else { "s" }
        ));
        lines.push(String::new());
        lines.push("| # | Title | Author | Price | Weight (lbs) | ISBN-10 |".to_string());
        lines.push("|---|-------|--------|-------|--------------|---------|".to_string());

        for (position, book) in container.contents.iter().enumerate() {
            lines.push(format!(
                "| {} | {} | {} | {} | {} | {} |",
                position + 1,
                escape_cell(&book.title),
                escape_cell(&book.author),
                escape_cell(&book.price),
                format_weight(book.weight),
                escape_cell(&book.isbn_10),
            ));
        }

        lines.push(String::new());
    }
}

impl ShipmentExporter for ExportService {
    fn export_to_json(&self, containers: &[Container<Book>]) -> Result<String, ExportError> {
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

        containers
            .serialize(&mut serializer)
            .map_err(|source| ExportError::Serialization {
                format: ExportFormat::Json.to_string(),
                source,
            })?;

        Ok(String::from_utf8(buffer)?)
    }

    fn export_to_markdown(&self, containers: &[Container<Book>]) -> Result<String, ExportError> {
        let mut lines = Vec::new();
        let summary = self.generate_summary(containers);

        lines.push("# Shipment Packing Report".to_string());
        lines.push(String::new());
        lines.push(format!(
            "Generated: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        lines.push(String::new());

        lines.push("## Summary".to_string());
        lines.push(format!("- **Boxes**: {}", summary.container_count));
        lines.push(format!("- **Books**: {}", summary.item_count));
        lines.push(format!(
            "- **Total Weight**: {} lbs",
            format_weight(summary.total_weight)
        ));
        if summary.container_count > 0 {
            lines.push(format!(
                "- **Heaviest Box**: {} lbs",
                format_weight(summary.heaviest_container)
            ));
        }
        lines.push(String::new());

        if containers.is_empty() {
            lines.push("No books to pack.".to_string());
            lines.push(String::new());
        }

        for container in containers {
            self.add_markdown_container(&mut lines, container);
        }

        Ok(lines.join("\n"))
    }

    fn generate_summary(&self, containers: &[Container<Book>]) -> PackingSummary {
        PackingSummary::from_containers(containers)
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

fn format_weight(weight: f64) -> String {
    // Two decimals hides accumulated float noise like 7.800000000000001
    let rounded = format!("{weight:.2}");
    rounded
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
