pub mod constants;
pub mod errors;
pub mod packing;
pub mod ranking;
pub mod traits;
pub mod types;

pub use errors::{
    BookPackerError, ConfigError, ExportError, ExtractionError, FileError, PackerResult,
    PackingError,
};
pub use packing::{pack, validate, GreedyPacker};
pub use ranking::rank;
pub use traits::*;
pub use types::*;
