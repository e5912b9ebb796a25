//! Defines the materialized categorical dataset
//! and the grouping statistics computed on it.

mod dataset_struct;
mod reader;
mod filter;
mod breakdown;


pub use dataset_struct::{Dataset, Rows};
pub use reader::DatasetReader;
pub use filter::Filter;
pub use breakdown::{Breakdown, Histogram, entropy};
