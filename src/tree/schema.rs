use crate::dataset::{Dataset, Filter};
use crate::error::{Result, TreeError};


/// Returns the number of columns of `dataset`, target included,
/// read from its first unfiltered row.
///
/// Fails with [`TreeError::EmptySource`] if the dataset has no row.
/// Tree growth cannot proceed without this width,
/// so the builders abort on this error.
pub fn schema_width(dataset: &Dataset) -> Result<usize> {
    match dataset.rows(&[]).next() {
        Some(row) if !row.is_empty() => Ok(row.len()),
        _ => Err(TreeError::EmptySource),
    }
}


/// Returns the feature columns (`1..=n_features`)
/// that do not appear in `path`, in ascending order.
///
/// This order decides every entropy tie:
/// the first column reaching the minimum wins.
pub fn remaining_features(path: &[Filter], n_features: usize) -> Vec<usize> {
    let mut exists = vec![false; n_features];
    for filter in path {
        exists[filter.column - 1] = true;
    }

    (1..=n_features)
        .filter(|&column| !exists[column - 1])
        .collect()
}
