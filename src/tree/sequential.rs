use crate::dataset::Dataset;
use crate::error::Result;
use crate::logger::GrowthLogger;
use super::eval_unit::evaluate;
use super::growth::{Levels, Selection, expand};
use super::node::TreeNode;
use super::schema::{schema_width, remaining_features};


/// Grows a decision tree on the calling thread.
///
/// # Example
/// ```no_run
/// use minitrees::{DatasetReader, SequentialBuilder};
///
/// let dataset = DatasetReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .read()
///     .unwrap();
/// let tree = SequentialBuilder::new(&dataset)
///     .build()
///     .unwrap();
/// println!("{}", tree.render(2));
/// ```
pub struct SequentialBuilder<'a> {
    dataset: &'a Dataset,
    levels: Levels,
    n_features: Option<usize>,
    verbose: bool,
}


impl<'a> SequentialBuilder<'a> {
    /// Construct a builder holding only the root.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            levels: Levels::new(),
            n_features: None,
            verbose: false,
        }
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
        let n_features = schema_width(self.dataset)? - 1;
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
    /// For each frontier node, in order,
    /// every remaining column is evaluated in ascending order
    /// and the first column with the minimum entropy
    /// (strictly below `1.0`) splits the node.
    pub fn grow_one_level(&mut self) -> Result<usize> {
        let n_features = self.n_features()?;
        let dataset = self.dataset;

        let expansions = self.levels.frontier()
            .iter()
            .map(|node| {
                let path = node.features();
                let mut selection = Selection::new();
                for column in remaining_features(path, n_features) {
                    selection.offer(evaluate(dataset, path, column));
                }
                expand(path, selection.into_best())
            })
            .collect::<Vec<_>>();

        Ok(self.levels.push(expansions))
    }


    /// Grow the tree once per feature and return the root.
    /// This method consumes `self`.
    pub fn build(mut self) -> Result<TreeNode> {
        let n_features = self.n_features()?;

        let mut logger = GrowthLogger::new(self.verbose);
        logger.start(vec![
            ("Builder", String::from("Sequential")),
            ("# of rows", format!("{}", self.dataset.n_rows())),
            ("# of features", format!("{n_features}")),
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
