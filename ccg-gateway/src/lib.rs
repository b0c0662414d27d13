//! Catalog loading: the only part of the engine that performs I/O.

pub mod error;
pub mod gateway;
pub mod source;

pub use error::LoadError;
pub use gateway::{CatalogGateway, LoadedCatalog, decode_catalog};
pub use source::{CatalogSource, FileSource, HttpSource, InlineSource, Source};
