//! Instrument module
//!
//! Asset classes, instruments and the symbol catalog used to classify them

mod catalog;
mod types;

pub use catalog::InstrumentCatalog;
pub use types::{AssetClass, Instrument};
