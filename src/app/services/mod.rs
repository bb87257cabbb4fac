//! Services layer - pure operations over the domain records.
//!
//! - Display formatting (currency, dates)
//! - Search predicate
//! - CSV export
//! - Statistics aggregation
//! - Record id generation
//! - Built-in sample dataset

pub mod export;
pub mod format;
pub mod ids;
pub mod sample_data;
pub mod search;
pub mod stats;
