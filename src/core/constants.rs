//! Constants shared across book-packer.
//!
//! The product page format is described here, in one place.

/// Packing defaults
pub mod packing {
    /// Maximum total weight of one shipping box, in pounds
    pub const DEFAULT_CAPACITY: f64 = 10.0;
}

/// CSS selectors for the product page layout
pub mod selectors {
    pub const TITLE: &str = "#btAsinTitle";
    pub const AUTHOR: &str = ".buying span a";
    pub const PRICE: &str = "#actualPriceValue";
    /// Rental listings mark both the sale and rental price as `rentPrice`; the first is the sale price
    pub const RENT_PRICE: &str = ".buyNewOffers .rentPrice";
    pub const PRODUCT_DETAILS: &str = "td.bucket ul li";
}

/// Labels that prefix unmarked product detail list items
pub mod detail_labels {
    pub const SHIPPING_WEIGHT: &str = "Shipping Weight:";
    pub const ISBN_10: &str = "ISBN-10";
    pub const WEIGHT_UNIT: &str = "pounds";
}

/// Field names used in error messages and reports
pub mod fields {
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const WEIGHT: &str = "weight";
    pub const ISBN_10: &str = "isbn_10";
}

/// File and directory defaults
pub mod files {
    pub const DEFAULT_DATA_DIR: &str = "data";
    pub const DEFAULT_OUTPUT_FILE: &str = "data.json";
    pub const CONFIG_FILE_NAME: &str = ".book-packer.toml";
    pub const GLOBAL_CONFIG_FILE_NAME: &str = "config.toml";
    pub const DEFAULT_FALLBACK_PRICE: &str = "0";
}

/// Serialization defaults
pub mod export {
    pub const DEFAULT_JSON_INDENT: usize = 4;
}
