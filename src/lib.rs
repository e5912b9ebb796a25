#![warn(missing_docs)]

//!
//! A crate that grows categorical decision trees
//! by entropy minimization (ID3).
//!
//! The tree is grown one feature-depth at a time.
//! At each depth, every unexpanded node is split on the remaining column
//! whose value grouping has the smallest normalized entropy of the target;
//! ties go to the smallest column index.
//!
//! Two builders are provided.
//!
//! - [`SequentialBuilder`]
//!     Grows the tree on the calling thread.
//!
//! - [`ParallelBuilder`]
//!     Runs one [`Aggregator`] per node on an aggregator pool.
//!     Each aggregator evaluates the candidate columns as [`EvalUnit`]s
//!     on a second, distinct eval pool.
//!     A level barrier separates consecutive depths,
//!     so both builders produce the same tree.

pub mod error;
pub mod dataset;
pub mod pool;
pub mod tree;
pub mod prelude;

mod logger;


pub use error::{Result, TreeError};

pub use dataset::{
    Dataset,
    DatasetReader,
    Filter,
    Breakdown,
    Histogram,
    entropy,
};

pub use pool::{WorkerPool, Future};

pub use tree::{
    TreeNode,
    Evaluation,
    EvalUnit,
    Aggregator,
    SequentialBuilder,
    ParallelBuilder,
    schema_width,
    remaining_features,
    evaluate,
    ENTROPY_CEILING,
    DEFAULT_RENDER_DEPTH,
};
