use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::grammar::{Word, EPSILON};

/// Grammar symbol carried by a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Non-terminal S
    S,
    /// Terminal 'a'
    A,
    /// Terminal 'b'
    B,
    /// The empty production S → ε
    Epsilon,
}

impl Symbol {
    /// Terminals are the symbols that appear in the derived string; ε counts
    /// as a terminal contributing no characters.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Symbol::S)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::S => write!(f, "S"),
            Symbol::A => write!(f, "a"),
            Symbol::B => write!(f, "b"),
            Symbol::Epsilon => write!(f, "{}", EPSILON),
        }
    }
}

/// Data payload for tree nodes representing one grammar-symbol instance.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Symbol this node stands for
    pub symbol: Symbol,
    /// Position of this terminal within the generated string, None for
    /// non-terminals and ε
    pub input_index: Option<usize>,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.input_index {
            Some(idx) => write!(f, "{} [{}]", self.symbol, idx),
            None => write!(f, "{}", self.symbol),
        }
    }
}

/// Tree node in the arena-based parse tree.
#[derive(Debug)]
pub struct TreeNode {
    /// Symbol data for this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena
    pub children: Vec<Index>,
}

/// Arena-based parse tree for one derivation.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Nodes are recorded in creation order, which doubles as the reveal order a
/// renderer is expected to animate.
#[derive(Debug)]
pub struct ParseTree {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
    /// Node indices in insertion order
    creation_order: Vec<Index>,
}

impl Default for ParseTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            creation_order: Vec::new(),
        }
    }

    /// Insert a node under `parent`; the first node inserted with no parent
    /// becomes the root.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);
        self.creation_order.push(node_idx);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Preorder traversal, children visited left to right.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    /// Nodes in the order they were created (the reveal order).
    #[instrument(level = "trace", skip(self))]
    pub fn iter_creation_order(&self) -> impl Iterator<Item = (Index, &TreeNode)> {
        self.creation_order
            .iter()
            .filter_map(move |&idx| self.arena.get(idx).map(|node| (idx, node)))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects all terminal leaves in creation order.
    ///
    /// For the canonical derivation creation order coincides with the
    /// left-to-right reading of the frontier.
    #[instrument(level = "debug", skip(self))]
    pub fn terminal_leaves(&self) -> Vec<(Index, &TreeNode)> {
        self.iter_creation_order()
            .filter(|(_, node)| node.children.is_empty() && node.data.symbol.is_terminal())
            .collect()
    }

    /// Reconstruct the derived word from the terminal frontier.
    ///
    /// 'a'/'b' leaves contribute their character; an ε leaf contributes
    /// nothing. A frontier consisting of the lone ε leaf reconstructs the
    /// empty word.
    #[instrument(level = "debug", skip(self))]
    pub fn frontier_word(&self) -> Word {
        let mut text = String::new();
        for (_, node) in self.terminal_leaves() {
            match node.data.symbol {
                Symbol::A => text.push('a'),
                Symbol::B => text.push('b'),
                Symbol::Epsilon | Symbol::S => {}
            }
        }
        if text.is_empty() {
            Word::Epsilon
        } else {
            Word::Literal(text)
        }
    }
}

pub struct TreeIterator<'a> {
    tree: &'a ParseTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a ParseTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(symbol: Symbol, input_index: Option<usize>) -> NodeData {
        NodeData {
            symbol,
            input_index,
        }
    }

    #[test]
    fn test_insert_node_first_parentless_node_becomes_root() {
        let mut tree = ParseTree::new();
        let root = tree.insert_node(leaf(Symbol::S, None), None);
        assert_eq!(tree.root(), Some(root));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_children_recorded_on_parent() {
        let mut tree = ParseTree::new();
        let root = tree.insert_node(leaf(Symbol::S, None), None);
        let a = tree.insert_node(leaf(Symbol::A, Some(0)), Some(root));
        let b = tree.insert_node(leaf(Symbol::B, Some(1)), Some(root));

        let root_node = tree.get_node(root).unwrap();
        assert_eq!(root_node.children, vec![a, b]);
        assert_eq!(tree.get_node(a).unwrap().parent, Some(root));
        assert_eq!(tree.get_node(b).unwrap().parent, Some(root));
    }

    #[test]
    fn test_creation_order_is_insertion_order() {
        let mut tree = ParseTree::new();
        let root = tree.insert_node(leaf(Symbol::S, None), None);
        let a = tree.insert_node(leaf(Symbol::A, Some(0)), Some(root));
        let eps = tree.insert_node(leaf(Symbol::Epsilon, None), Some(root));

        let order: Vec<Index> = tree.iter_creation_order().map(|(idx, _)| idx).collect();
        assert_eq!(order, vec![root, a, eps]);
    }

    #[test]
    fn test_frontier_word_epsilon_contributes_nothing() {
        let mut tree = ParseTree::new();
        let root = tree.insert_node(leaf(Symbol::S, None), None);
        tree.insert_node(leaf(Symbol::A, Some(0)), Some(root));
        tree.insert_node(leaf(Symbol::Epsilon, None), Some(root));
        tree.insert_node(leaf(Symbol::B, Some(1)), Some(root));

        assert_eq!(tree.frontier_word(), Word::Literal("ab".to_string()));
    }

    #[test]
    fn test_frontier_word_lone_epsilon_is_empty_word() {
        let mut tree = ParseTree::new();
        let root = tree.insert_node(leaf(Symbol::S, None), None);
        tree.insert_node(leaf(Symbol::Epsilon, None), Some(root));

        assert_eq!(tree.frontier_word(), Word::Epsilon);
    }
}
