//! Defines the grouping statistic `Breakdown` and the entropy score on it.
use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;


/// Class histogram of the rows that share one value
/// of a candidate column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    pub(crate) counts: Vec<usize>,
    pub(crate) total: usize,
}


impl Histogram {
    #[inline]
    pub(crate) fn new(n_class: usize) -> Self {
        Self { counts: vec![0; n_class], total: 0 }
    }


    #[inline]
    pub(crate) fn add(&mut self, class: usize) {
        self.counts[class] += 1;
        self.total += 1;
    }


    /// Returns the number of rows per target class.
    /// The `k`-th entry corresponds to the `k`-th distinct target value
    /// in order of first appearance.
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts[..]
    }


    /// Returns the number of rows in this group.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }


    /// Returns `true` if every target class occurs
    /// equally often, and at least once, in this group.
    #[inline]
    fn is_uniform(&self) -> bool {
        match self.counts.first() {
            Some(&first) => first > 0 && self.counts.iter().all(|&c| c == first),
            None => false,
        }
    }
}


/// The rows matching a path, grouped by the value of one column.
/// Value keys iterate in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub(crate) distribution: BTreeMap<String, Histogram>,
    pub(crate) n_class: usize,
}


impl Breakdown {
    #[inline]
    pub(crate) fn new(n_class: usize) -> Self {
        Self { distribution: BTreeMap::new(), n_class }
    }


    /// Returns the map from a column value to its class histogram.
    #[inline]
    pub fn distribution(&self) -> &BTreeMap<String, Histogram> {
        &self.distribution
    }


    /// Returns the distinct values in ascending order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.distribution.keys().map(String::as_str)
    }


    /// Returns the number of distinct values.
    #[inline]
    pub fn len(&self) -> usize {
        self.distribution.len()
    }


    /// Returns `true` if no row matched the path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distribution.is_empty()
    }


    /// Returns the number of target classes of the whole dataset.
    #[inline]
    pub fn n_class(&self) -> usize {
        self.n_class
    }
}


/// Returns the conditional entropy of the target given the column
/// that produced `breakdown`, normalized to `[0, 1]`.
/// `0` means every group is pure,
/// `1` means every group is uniform over all target classes.
///
/// The score depends only on the multiset of class histograms,
/// so two columns that partition the rows alike
/// score the same bits whatever their value labels are.
pub fn entropy(breakdown: &Breakdown) -> f64 {
    let n_class = breakdown.n_class;
    if n_class <= 1 || breakdown.is_empty() { return 0.0; }

    // The maximum is decided on the counts, not on the floats.
    if breakdown.distribution.values().all(Histogram::is_uniform) {
        return 1.0;
    }

    let total = breakdown.distribution.values()
        .map(|hist| hist.total)
        .sum::<usize>() as f64;
    let normalizer = total * (n_class as f64).ln();

    let mut terms = breakdown.distribution.values()
        .map(weighted_impurity)
        .collect::<Vec<_>>();
    terms.sort_by(f64::total_cmp);

    let score = terms.into_iter().sum::<f64>() / normalizer;
    score.clamp(0.0, 1.0)
}


/// Returns the entropic-impurity of the given histogram
/// scaled by its size,
/// computed as `n * ln(n) - sum(c * ln(c))` over the class counts `c`.
/// Counts are summed in ascending order.
#[inline(always)]
fn weighted_impurity(hist: &Histogram) -> f64 {
    if hist.total == 0 { return 0.0; }

    let mut counts = hist.counts.iter()
        .copied()
        .filter(|&count| count > 0)
        .collect::<Vec<_>>();
    counts.sort_unstable();

    let weighted = counts.into_iter()
        .map(|count| {
            let c = count as f64;
            c * c.ln()
        })
        .sum::<f64>();

    let total = hist.total as f64;
    (total * total.ln() - weighted).max(0.0)
}
