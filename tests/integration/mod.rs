pub mod packing_tests;
pub mod pipeline_tests;

// Shared helpers and page builders
#[path = "../common/mod.rs"]
pub mod common;
