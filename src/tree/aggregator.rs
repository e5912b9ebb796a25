use std::sync::Arc;
use std::time::Duration;

use crate::dataset::{Dataset, Filter};
use crate::error::Result;
use crate::pool::{Future, WorkerPool};
use super::eval_unit::EvalUnit;
use super::growth::{Evaluation, Selection, expand};
use super::node::TreeNode;
use super::schema::remaining_features;


/// Per-node coordinator of the parallel builder.
///
/// An `Aggregator` fans out one [`EvalUnit`] per remaining column
/// to the eval pool, waits on them in ascending column order,
/// keeps the minimum entropy, and returns the children
/// of its node.
///
/// An `Aggregator` blocks on the eval pool,
/// so it must never run on that pool itself.
pub struct Aggregator {
    dataset: Arc<Dataset>,
    eval_pool: Arc<WorkerPool>,
    path: Arc<[Filter]>,
    n_features: usize,
    stall_timeout: Option<Duration>,
}


impl Aggregator {
    /// Construct an aggregator for the node at `path`.
    pub fn new(
        dataset: Arc<Dataset>,
        eval_pool: Arc<WorkerPool>,
        path: &[Filter],
        n_features: usize,
    ) -> Self
    {
        Self {
            dataset,
            eval_pool,
            path: Arc::from(path),
            n_features,
            stall_timeout: None,
        }
    }


    /// Bound every wait of this aggregator by `limit`.
    #[inline]
    pub fn stall_timeout(mut self, limit: Option<Duration>) -> Self {
        self.stall_timeout = limit;
        self
    }


    /// Execute this aggregator and return the children of its node.
    /// The children are ordered by ascending value
    /// of the winning column.
    pub fn run(self) -> Result<Vec<TreeNode>> {
        let columns = remaining_features(&self.path, self.n_features);
        let futures = columns.into_iter()
            .map(|column| {
                let unit = EvalUnit::new(
                    Arc::clone(&self.dataset), Arc::clone(&self.path), column
                );
                self.eval_pool.submit(move || unit.run())
            })
            .collect::<Vec<Future<Evaluation>>>();

        let mut selection = Selection::new();
        for future in futures {
            selection.offer(future.wait_for(self.stall_timeout)?);
        }

        Ok(expand(&self.path, selection.into_best()))
    }
}
