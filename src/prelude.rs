//! Exports the builders, the dataset and the scheduling substrate.
//!
pub use crate::dataset::{
    Dataset,
    DatasetReader,
    Filter,
};


pub use crate::pool::{
    WorkerPool,
    Future,
};


pub use crate::tree::{
    // Builders
    SequentialBuilder,
    ParallelBuilder,


    // Tree
    TreeNode,
};


pub use crate::error::TreeError;
