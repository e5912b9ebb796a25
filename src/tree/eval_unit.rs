use std::sync::Arc;

use crate::dataset::{Dataset, Filter, entropy};
use super::growth::Evaluation;


/// Computes the breakdown and its entropy
/// for one candidate `column` over the rows matching `path`.
#[inline]
pub fn evaluate(dataset: &Dataset, path: &[Filter], column: usize) -> Evaluation {
    let breakdown = dataset.breakdown(path, column);
    let entropy = entropy(&breakdown);
    Evaluation { column, breakdown, entropy }
}


/// A unit of work evaluating one (node path, candidate column) pair.
/// Running it has no side effect;
/// the result is handed back through the unit's future.
#[derive(Debug, Clone)]
pub struct EvalUnit {
    dataset: Arc<Dataset>,
    path: Arc<[Filter]>,
    column: usize,
}


impl EvalUnit {
    /// Construct a new unit.
    #[inline]
    pub fn new(dataset: Arc<Dataset>, path: Arc<[Filter]>, column: usize) -> Self {
        Self { dataset, path, column }
    }


    /// Returns the candidate column.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }


    /// Execute this unit.
    #[inline]
    pub fn run(self) -> Evaluation {
        evaluate(&self.dataset, &self.path, self.column)
    }
}
