//! Journal module
//!
//! Trade records for the manual trading journal

mod record;

pub use record::TradeRecord;
