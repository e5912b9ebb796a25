//! Categorical decision trees grown one feature-depth at a time,
//! either on the calling thread or on two worker pools.

mod node;
mod schema;
mod growth;
mod eval_unit;
mod aggregator;
mod sequential;
mod parallel;


pub use node::{TreeNode, DEFAULT_RENDER_DEPTH};
pub use schema::{schema_width, remaining_features};
pub use growth::{Evaluation, ENTROPY_CEILING};
pub use eval_unit::{EvalUnit, evaluate};
pub use aggregator::Aggregator;
pub use sequential::SequentialBuilder;
pub use parallel::ParallelBuilder;
