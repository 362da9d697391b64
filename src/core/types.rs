use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::ExportError;
use crate::core::traits::{Packable, Weighted};

/// A book extracted from a product page.
///
/// `packed` starts out false and is set exactly once, when the packer moves
/// the book into a [`Container`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub author: String,
    pub title: String,
    pub price: String,
    /// Shipping weight in pounds
    pub weight: f64,
    pub isbn_10: String,
    #[serde(default)]
    pub packed: bool,
}

impl Book {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        price: impl Into<String>,
        weight: f64,
        isbn_10: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            price: price.into(),
            weight,
            isbn_10: isbn_10.into(),
            packed: false,
        }
    }

    /// Book with only an author and weight set, handy for packing-only use
    pub fn with_weight(author: impl Into<String>, weight: f64) -> Self {
        Self::new(author, "", "0", weight, "")
    }
}

impl Weighted for Book {
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl Packable for Book {
    fn is_placed(&self) -> bool {
        self.packed
    }

    fn mark_placed(&mut self) {
        self.packed = true;
    }
}

/// One shipping box.
///
/// `total_weight` is a running sum updated on every [`Container::append`],
/// so it always equals the in-order sum of the contents' weights.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Container<T> {
    /// 1-based, assigned in creation order
    pub id: usize,
    #[serde(rename = "totalWeight")]
    pub total_weight: f64,
    pub contents: Vec<T>,
}

impl<T: Weighted> Container<T> {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            total_weight: 0.0,
            contents: Vec::new(),
        }
    }

    /// Adds an item and accumulates its weight
    pub fn append(&mut self, item: T) {
        self.total_weight += item.weight();
        self.contents.push(item);
    }

    /// Whether `item` fits without pushing the total over `capacity`
    pub fn fits(&self, item: &T, capacity: f64) -> bool {
        item.weight() + self.total_weight <= capacity
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Totals across a packing result, used by reports and logging
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PackingSummary {
    pub container_count: usize,
    pub item_count: usize,
    pub total_weight: f64,
    pub heaviest_container: f64,
}

impl PackingSummary {
    pub fn from_containers<T: Weighted>(containers: &[Container<T>]) -> Self {
        containers.iter().fold(Self::default(), |mut acc, container| {
            acc.container_count += 1;
            acc.item_count += container.len();
            acc.total_weight += container.total_weight;
            acc.heaviest_container = acc.heaviest_container.max(container.total_weight);
            acc
        })
    }
}

/// Output formats for a packing result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Box list as JSON, the format downstream shipping tools read
    #[default]
    Json,
    /// Human-readable packing report
    Markdown,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(ExportError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}
