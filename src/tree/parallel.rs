use std::sync::Arc;
use std::time::Duration;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::logger::GrowthLogger;
use crate::pool::WorkerPool;
use super::aggregator::Aggregator;
use super::growth::Levels;
use super::node::TreeNode;
use super::schema::schema_width;


/// Grows a decision tree level by level on two worker pools.
///
/// Per level, one [`Aggregator`] per frontier node runs
/// on `aggregator_pool`, and each aggregator runs its
/// per-column evaluations on `eval_pool`.
/// Every aggregator of a level finishes
/// before any unit of the next level is submitted.
///
/// The two pools must be distinct.
/// An aggregator blocks until its evaluations complete;
/// if both kinds of unit share one pool,
/// blocked aggregators can occupy every worker
/// while their evaluations wait in the queue.
/// With a single shared worker this always happens.
/// With more shared workers it depends on timing:
/// a blocked aggregator's wait does not run queued units,
/// but an idle worker may steal an evaluation first,
/// so a shared pool can complete one run and stall the next.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use minitrees::{DatasetReader, ParallelBuilder, WorkerPool};
///
/// let dataset = DatasetReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .read()
///     .unwrap();
/// let eval_pool = WorkerPool::named(4, "eval").unwrap();
/// let aggregator_pool = WorkerPool::named(2, "aggregator").unwrap();
///
/// let tree = ParallelBuilder::new(
///         Arc::new(dataset), Arc::new(eval_pool), Arc::new(aggregator_pool)
///     )
///     .build()
///     .unwrap();
/// println!("{}", tree.render(2));
/// ```
pub struct ParallelBuilder {
    dataset: Arc<Dataset>,
    eval_pool: Arc<WorkerPool>,
    aggregator_pool: Arc<WorkerPool>,
    levels: Levels,
    n_features: Option<usize>,
    stall_timeout: Option<Duration>,
    verbose: bool,
}


impl ParallelBuilder {
    /// Construct a builder holding only the root.
    pub fn new(
        dataset: Arc<Dataset>,
        eval_pool: Arc<WorkerPool>,
        aggregator_pool: Arc<WorkerPool>,
    ) -> Self
    {
        Self {
            dataset,
            eval_pool,
            aggregator_pool,
            levels: Levels::new(),
            n_features: None,
            stall_timeout: None,
            verbose: false,
        }
    }


    /// Bound every wait of the build by `limit`.
    /// A unit that does not complete in time fails the build
    /// with [`TreeError::Stalled`](crate::TreeError::Stalled).
    /// By default, waits are unbounded.
    pub fn stall_timeout(mut self, limit: Duration) -> Self {
        self.stall_timeout = Some(limit);
        self
    }


    /// Print the progress per level.
    /// Default is `false`.
    pub fn verbose(mut self, flag: bool) -> Self {
        self.verbose = flag;
        self
    }


    /// Returns the number of feature columns.
    /// The width is read once from the dataset.
    pub fn n_features(&mut self) -> Result<usize> {
        if let Some(n_features) = self.n_features {
            return Ok(n_features);
        }
        let n_features = schema_width(&self.dataset)? - 1;
        self.n_features = Some(n_features);
        Ok(n_features)
    }


    /// Returns the nodes at the current unexpanded depth.
    #[inline]
    pub fn frontier(&self) -> &[TreeNode] {
        self.levels.frontier()
    }


    /// Grow the tree by one feature-depth
    /// and returns the size of the new frontier.
    ///
    /// Submits one aggregator per frontier node, waits on all of them,
    /// and concatenates their children in submission order.
    pub fn grow_one_level(&mut self) -> Result<usize> {
        let n_features = self.n_features()?;

        let futures = self.levels.frontier()
            .iter()
            .map(|node| {
                let aggregator = Aggregator::new(
                    Arc::clone(&self.dataset),
                    Arc::clone(&self.eval_pool),
                    node.features(),
                    n_features,
                ).stall_timeout(self.stall_timeout);
                self.aggregator_pool.submit(move || aggregator.run())
            })
            .collect::<Vec<_>>();

        // Level barrier
        let expansions = futures.into_iter()
            .map(|future| future.wait_for(self.stall_timeout)?)
            .collect::<Result<Vec<_>>>()?;

        Ok(self.levels.push(expansions))
    }


    /// Grow the tree once per feature and return the root.
    /// This method consumes `self`.
    pub fn build(mut self) -> Result<TreeNode> {
        let n_features = self.n_features()?;

        let mut logger = GrowthLogger::new(self.verbose);
        logger.start(vec![
            ("Builder", String::from("Parallel")),
            ("# of rows", format!("{}", self.dataset.n_rows())),
            ("# of features", format!("{n_features}")),
            ("Eval workers", format!("{}", self.eval_pool.n_workers())),
            ("Aggregator workers", format!("{}", self.aggregator_pool.n_workers())),
        ]);

        for depth in 0..n_features {
            let frontier = self.frontier().len();
            let children = self.grow_one_level()?;
            logger.level(depth, frontier, children);
        }

        let root = self.levels.into_root();
        logger.finish(root.n_nodes(), root.n_leaves());
        Ok(root)
    }
}
