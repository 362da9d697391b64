use async_trait::async_trait;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::core::constants::{detail_labels, fields, files, selectors};
use crate::core::errors::{ExtractionError, FileError, PackerResult};
use crate::core::traits::BookSource;
use crate::core::types::Book;

// "Shipping Weight: 1.2 pounds (View shipping rates and policies)"
const WEIGHT_PATTERN: &str = r"^Shipping Weight:\s*([^(]*?)\s*pounds";

/// Pulls book metadata out of product pages.
///
/// The page layout is fixed: title, author and price sit in marked-up
/// elements, while shipping weight and ISBN-10 are unmarked list items in
/// the product details bucket and have to be found by their text prefix.
///
/// # Examples
///
/// ```rust,no_run
/// use book_packer::extract::BookExtractor;
/// use book_packer::core::BookSource;
///
/// let extractor = BookExtractor::new()?;
/// let html = std::fs::read_to_string("data/book1.html")?;
/// let book = extractor.extract(&html)?;
/// println!("{} weighs {} pounds", book.title, book.weight);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct BookExtractor {
    title: Selector,
    author: Selector,
    price: Selector,
    rent_price: Selector,
    details: Selector,
    weight_pattern: Regex,
    fallback_price: String,
}

impl BookExtractor {
    /// Create an extractor for the standard product page layout
    pub fn new() -> Result<Self, ExtractionError> {
        Ok(Self {
            title: parse_selector(selectors::TITLE)?,
            author: parse_selector(selectors::AUTHOR)?,
            price: parse_selector(selectors::PRICE)?,
            rent_price: parse_selector(selectors::RENT_PRICE)?,
            details: parse_selector(selectors::PRODUCT_DETAILS)?,
            weight_pattern: Regex::new(WEIGHT_PATTERN).map_err(|source| {
                ExtractionError::InvalidPattern {
                    pattern: WEIGHT_PATTERN.to_string(),
                    source,
                }
            })?,
            fallback_price: files::DEFAULT_FALLBACK_PRICE.to_string(),
        })
    }

    /// Price recorded when a page carries neither a list nor a rental price
    pub fn with_fallback_price(mut self, price: impl Into<String>) -> Self {
        self.fallback_price = price.into();
        self
    }

    /// Read and extract a single page
    pub async fn extract_file(&self, path: &Path) -> PackerResult<Book> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| FileError::read_error(path.to_path_buf(), e))?;
        // Saved pages are not always clean UTF-8
        let html = String::from_utf8_lossy(&bytes);

        let book = self.extract(&html).map_err(|e| e.in_file(path))?;
        debug!(path = %path.display(), title = %book.title, weight = book.weight, "Extracted book");
        Ok(book)
    }

    fn select_text(&self, document: &Html, selector: &Selector) -> Option<String> {
        document.select(selector).next().map(element_text)
    }

    fn extract_price(&self, document: &Html) -> String {
        if let Some(price) = self.select_text(document, &self.price) {
            return price;
        }
        if let Some(price) = self.select_text(document, &self.rent_price) {
            return price;
        }
        warn!(fallback = %self.fallback_price, "No price found on page, using fallback");
        self.fallback_price.clone()
    }

    fn parse_weight(&self, text: &str) -> Result<f64, ExtractionError> {
        let captures = self.weight_pattern.captures(text).ok_or_else(|| {
            ExtractionError::InvalidWeight {
                text: text.to_string(),
                reason: format!("expected '<number> {}'", detail_labels::WEIGHT_UNIT),
            }
        })?;
        let number = captures.get(1).map_or("", |m| m.as_str()).trim();

        let weight: f64 = number.parse().map_err(|e: std::num::ParseFloatError| {
            ExtractionError::InvalidWeight {
                text: text.to_string(),
                reason: e.to_string(),
            }
        })?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(ExtractionError::InvalidWeight {
                text: text.to_string(),
                reason: "weight must be a non-negative number".to_string(),
            });
        }
        Ok(weight)
    }

    fn parse_isbn(&self, text: &str) -> Result<String, ExtractionError> {
        text.split_once(':')
            .map(|(_, isbn)| isbn.trim().to_string())
            .filter(|isbn| !isbn.is_empty())
            .ok_or_else(|| ExtractionError::MalformedField {
                field: fields::ISBN_10.to_string(),
                text: text.to_string(),
            })
    }
}

#[async_trait]
impl BookSource for BookExtractor {
    fn extract(&self, html: &str) -> Result<Book, ExtractionError> {
        let document = Html::parse_document(html);

        let title = self
            .select_text(&document, &self.title)
            .ok_or_else(|| missing(fields::TITLE, selectors::TITLE))?;
        let author = self
            .select_text(&document, &self.author)
            .ok_or_else(|| missing(fields::AUTHOR, selectors::AUTHOR))?;
        let price = self.extract_price(&document);

        // Detail items have no markup of their own; the last match wins
        let mut weight = None;
        let mut isbn_10 = None;
        for item in document.select(&self.details) {
            let text = element_text(item);
            if text.starts_with(detail_labels::SHIPPING_WEIGHT) {
                weight = Some(self.parse_weight(&text)?);
            }
            if text.starts_with(detail_labels::ISBN_10) {
                isbn_10 = Some(self.parse_isbn(&text)?);
            }
        }

        let weight = weight.ok_or_else(|| missing(fields::WEIGHT, selectors::PRODUCT_DETAILS))?;
        let isbn_10 = isbn_10.ok_or_else(|| missing(fields::ISBN_10, selectors::PRODUCT_DETAILS))?;

        Ok(Book::new(author, title, price, weight, isbn_10))
    }

    /// Extract every regular file in `dir`, in file-name order
    async fn extract_dir(&self, dir: &Path) -> PackerResult<Vec<Book>> {
        let mut entries = fs::read_dir(dir)
            .await
            .map_err(|e| directory_error(dir, "read_dir", e))?;

        let mut paths: Vec<PathBuf> = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| directory_error(dir, "next_entry", e))?
        {
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| directory_error(dir, "file_type", e))?;
            if file_type.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();

        let mut books = Vec::with_capacity(paths.len());
        for path in &paths {
            books.push(self.extract_file(path).await?);
        }
        debug!(dir = %dir.display(), count = books.len(), "Extracted books from directory");
        Ok(books)
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn missing(field: &str, selector: &str) -> ExtractionError {
    ExtractionError::MissingField {
        field: field.to_string(),
        selector: selector.to_string(),
    }
}

fn directory_error(dir: &Path, operation: &str, source: std::io::Error) -> FileError {
    FileError::DirectoryError {
        path: dir.to_path_buf(),
        operation: operation.to_string(),
        source,
    }
}
