//! Shared pieces of level-by-level growth:
//! the best-feature reduction, child materialization,
//! and the per-level storage that assembles the final tree.
use crate::dataset::{Breakdown, Filter};
use super::node::TreeNode;


/// The maximal normalized entropy.
/// Every search for the best feature starts from this value,
/// so a candidate must score strictly below it to be accepted.
pub const ENTROPY_CEILING: f64 = 1.0;


/// Breakdown and entropy of one candidate column
/// for one node.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub(crate) column: usize,
    pub(crate) breakdown: Breakdown,
    pub(crate) entropy: f64,
}


impl Evaluation {
    /// Returns the 1-based candidate column.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }


    /// Returns the grouping of the node's rows by the candidate column.
    #[inline]
    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }


    /// Returns the normalized entropy of the split.
    #[inline]
    pub fn entropy(&self) -> f64 {
        self.entropy
    }
}


/// Running minimum over the evaluations of one node.
/// Evaluations must be offered in ascending column order;
/// an evaluation replaces the current best only if its entropy
/// is strictly smaller, so the smallest column wins a tie.
pub(crate) struct Selection {
    best_entropy: f64,
    best: Option<Evaluation>,
}


impl Selection {
    #[inline]
    pub(crate) fn new() -> Self {
        Self { best_entropy: ENTROPY_CEILING, best: None }
    }


    #[inline]
    pub(crate) fn offer(&mut self, evaluation: Evaluation) {
        if evaluation.entropy < self.best_entropy {
            self.best_entropy = evaluation.entropy;
            self.best = Some(evaluation);
        }
    }


    #[inline]
    pub(crate) fn into_best(self) -> Option<Evaluation> {
        self.best
    }
}


/// Returns one child per distinct value of the winning breakdown,
/// in ascending value order.
/// Each child's path is `path` plus the filter on the winning column.
/// If nothing won, or the winner has no value, no child is returned
/// and the branch stops growing.
pub(crate) fn expand(path: &[Filter], best: Option<Evaluation>) -> Vec<TreeNode> {
    let Some(best) = best else { return Vec::new(); };

    best.breakdown.values()
        .map(|value| {
            let mut features = path.to_vec();
            features.push(Filter::new(best.column, value));
            TreeNode::with_path(features)
        })
        .collect()
}


/// Nodes of one depth together with the index of each node's parent
/// in the previous depth.
struct Level {
    nodes: Vec<TreeNode>,
    parents: Vec<usize>,
}


/// Storage of a tree under level-by-level growth.
/// The last level is the frontier.
/// Children are linked into their parents when the tree is assembled
/// by [`Levels::into_root`].
pub(crate) struct Levels {
    levels: Vec<Level>,
}


impl Levels {
    /// Returns the storage holding only the root.
    pub(crate) fn new() -> Self {
        let root = Level { nodes: vec![TreeNode::root()], parents: Vec::new() };
        Self { levels: vec![root] }
    }


    /// Returns the nodes at the current unexpanded depth.
    #[inline]
    pub(crate) fn frontier(&self) -> &[TreeNode] {
        // `levels` is never empty; it starts with the root level.
        self.levels.last()
            .map(|level| &level.nodes[..])
            .unwrap_or(&[])
    }


    /// Push the next level.
    /// `expansions[i]` holds the children of the `i`-th frontier node;
    /// they are concatenated in this order.
    pub(crate) fn push(&mut self, expansions: Vec<Vec<TreeNode>>) -> usize {
        assert_eq!(
            expansions.len(), self.frontier().len(),
            "Every frontier node must report its children"
        );
        let mut nodes = Vec::new();
        let mut parents = Vec::new();
        for (parent, children) in expansions.into_iter().enumerate() {
            parents.extend(std::iter::repeat(parent).take(children.len()));
            nodes.extend(children);
        }

        let n_children = nodes.len();
        self.levels.push(Level { nodes, parents });
        n_children
    }


    /// Link every node into its parent, deepest level first,
    /// and return the root.
    pub(crate) fn into_root(mut self) -> TreeNode {
        while self.levels.len() > 1 {
            let Level { nodes, parents } = self.levels.pop()
                .expect("More than one level remains");
            let above = self.levels.last_mut()
                .expect("More than one level remains");
            for (node, parent) in nodes.into_iter().zip(parents) {
                above.nodes[parent].append_child(node);
            }
        }

        self.levels.pop()
            .and_then(|level| level.nodes.into_iter().next())
            .unwrap_or_default()
    }
}
