//! Data reading and representation.
//!
//! This module handles reading two-column sample files into parallel
//! columns and computing values derived from them.

mod dataset;
mod metrics;
mod reader;

pub use dataset::{ColumnStats, Dataset, Sample};
pub use metrics::color_lifetime;
pub use reader::DataReader;
