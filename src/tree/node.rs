//! Defines the node of a categorical decision tree.
use serde::{Serialize, Deserialize};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::dataset::Filter;
use crate::error::Result;


/// Default depth bound used by the `Display` rendering of a tree.
pub const DEFAULT_RENDER_DEPTH: usize = 8;


/// One node of the tree.
/// `features` is the conjunctive path of filters from the root,
/// `children` are the owned child nodes (empty for a leaf).
///
/// A child's path is its parent's path plus exactly one filter
/// on a column that does not appear in the parent's path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub(crate) features: Vec<Filter>,
    pub(crate) children: Vec<TreeNode>,
}


impl TreeNode {
    /// Returns a root node with the empty path.
    #[inline]
    pub fn root() -> Self {
        Self::default()
    }


    /// Returns a childless node with the given path.
    #[inline]
    pub(crate) fn with_path(features: Vec<Filter>) -> Self {
        Self { features, children: Vec::new() }
    }


    /// Append `node` to the tail of the children.
    /// This method does not check that the paths are consistent.
    #[inline]
    pub fn append_child(&mut self, node: TreeNode) {
        self.children.push(node);
    }


    /// Returns `true` if this node has no child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }


    /// Returns the path from the root to this node.
    #[inline]
    pub fn features(&self) -> &[Filter] {
        &self.features[..]
    }


    /// Returns the children of this node.
    #[inline]
    pub fn children(&self) -> &[TreeNode] {
        &self.children[..]
    }


    /// Returns the depth of this node, i.e., the length of its path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.features.len()
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        if self.is_leaf() { return 1; }
        self.children.iter()
            .map(TreeNode::n_leaves)
            .sum::<usize>()
    }


    /// Returns the number of nodes of this sub-tree, `self` included.
    pub fn n_nodes(&self) -> usize {
        1 + self.children.iter()
            .map(TreeNode::n_nodes)
            .sum::<usize>()
    }


    /// Returns the paths of all leaves, in tree order.
    pub fn leaf_paths(&self) -> Vec<&[Filter]> {
        let mut paths = Vec::new();
        self.collect_leaf_paths(&mut paths);
        paths
    }


    fn collect_leaf_paths<'a>(&'a self, paths: &mut Vec<&'a [Filter]>) {
        if self.is_leaf() {
            paths.push(self.features());
            return;
        }
        for child in self.children.iter() {
            child.collect_leaf_paths(paths);
        }
    }


    /// Returns a textual trace of the paths of this sub-tree.
    /// Nodes deeper than `max_depth` levels below `self` are omitted.
    /// The output is meant for diagnostics; its format is not stable.
    pub fn render(&self, max_depth: usize) -> String {
        let mut output = String::new();
        self.render_into("", max_depth, &mut output);
        output
    }


    fn render_into(&self, indent: &str, depth: usize, output: &mut String) {
        let path = if self.features.is_empty() {
            String::from("(root)")
        } else {
            self.features.iter()
                .map(|f| format!("{{column: {}, value: {}}}", f.column, f.value))
                .collect::<Vec<_>>()
                .join(", ")
        };
        output.push_str(&format!("{indent}path: {path}\n"));

        if depth < 1 || self.is_leaf() { return; }

        output.push_str(&format!("{indent}children:\n"));
        let indent = format!("{indent}\t");
        for child in self.children.iter() {
            child.render_into(&indent, depth - 1, output);
        }
    }


    /// Returns this sub-tree in the Graphviz `dot` language.
    pub fn to_dot(&self) -> String {
        let info = self.to_dot_info(0).0;
        format!("graph DecisionTree {{\n{}}}\n", info.concat())
    }


    /// Write [`TreeNode::to_dot`] to the file at `path`.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;
        Ok(())
    }


    fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        let label = match self.features.last() {
            Some(filter) => filter.to_string(),
            None => String::from("root"),
        };
        let shape = if self.is_leaf() { ", shape = box" } else { "" };
        let mut info = vec![
            format!("\tnode_{id} [ label = \"{label}\"{shape} ];\n")
        ];

        let mut next_id = id + 1;
        for child in self.children.iter() {
            let child_id = next_id;
            let (mut child_info, return_id) = child.to_dot_info(child_id);
            info.append(&mut child_info);
            info.push(format!("\tnode_{id} -- node_{child_id};\n"));
            next_id = return_id;
        }

        (info, next_id)
    }
}


impl std::fmt::Display for TreeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(DEFAULT_RENDER_DEPTH))
    }
}
