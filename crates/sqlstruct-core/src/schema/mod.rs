//! Schema model and extraction

mod extractor;
mod model;

pub use extractor::{Extraction, SchemaExtractor};
pub use model::{Column, Table};
