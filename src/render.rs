//! Terminal rendering of parse trees.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::arena::ParseTree;
use crate::errors::{RenderError, RenderResult};

/// Conversion into the termtree drawing structure.
pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for ParseTree {
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => subtree(self, root),
            None => Tree::new(String::new()),
        }
    }
}

fn subtree(tree: &ParseTree, idx: Index) -> Tree<String> {
    let Some(node) = tree.get_node(idx) else {
        return Tree::new(String::new());
    };

    // Recursively construct the children
    let leaves: Vec<_> = node
        .children
        .iter()
        .map(|&child| subtree(tree, child))
        .collect();

    Tree::new(node.data.to_string()).with_leaves(leaves)
}

/// Draw the tree as an indented branch diagram.
///
/// Refuses trees deeper than `max_depth` instead of emitting an unreadable
/// wall of branches.
#[instrument(level = "debug", skip(tree))]
pub fn render(tree: &ParseTree, max_depth: usize) -> RenderResult<String> {
    let depth = tree.depth();
    if depth > max_depth {
        return Err(RenderError::DepthExceeded {
            depth,
            max: max_depth,
        });
    }
    Ok(tree.to_tree_string().to_string())
}

/// One line per node in reveal order, for stepping through a derivation
/// the way it was built.
#[instrument(level = "debug", skip(tree))]
pub fn reveal_steps(tree: &ParseTree) -> Vec<String> {
    tree.iter_creation_order()
        .enumerate()
        .map(|(step, (_, node))| format!("{:>3}  {}", step + 1, node.data))
        .collect()
}
