use generational_arena::Index;
use tracing::instrument;

use crate::arena::{NodeData, ParseTree, Symbol};
use crate::errors::GrammarResult;
use crate::grammar::Word;

/// Builds the parse tree of the canonical derivation S ⇒ aSb ⇒ … ⇒ a^n b^n.
///
/// Input positions are assigned from an owned, monotonically incrementing
/// counter rather than state threaded through recursion; the build itself is
/// an explicit loop over the S-chain.
pub struct ParseTreeBuilder {
    next_index: usize,
}

impl Default for ParseTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseTreeBuilder {
    pub fn new() -> Self {
        Self { next_index: 0 }
    }

    /// Construct the tree for derivation depth `n`.
    ///
    /// Each level creates its S node, the 'a' child (taking the next input
    /// position), and descends; once the innermost S has produced ε, the 'b'
    /// children are attached innermost-first so input positions keep matching
    /// the generated string left to right. Node count is 3n + 2 for n ≥ 1
    /// and 2 for n = 0.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&mut self, n: usize) -> ParseTree {
        self.next_index = 0;
        let mut tree = ParseTree::new();

        let mut current = tree.insert_node(self.nonterminal(), None);
        let mut enclosing: Vec<Index> = Vec::with_capacity(n);

        for _ in 0..n {
            tree.insert_node(self.terminal(Symbol::A), Some(current));
            let inner = tree.insert_node(self.nonterminal(), Some(current));
            enclosing.push(current);
            current = inner;
        }

        tree.insert_node(
            NodeData {
                symbol: Symbol::Epsilon,
                input_index: None,
            },
            Some(current),
        );

        while let Some(s_idx) = enclosing.pop() {
            tree.insert_node(self.terminal(Symbol::B), Some(s_idx));
        }

        tree
    }

    /// Construct the tree for an accepted word, deriving the depth from it.
    ///
    /// Hand-built literals are validated; anything outside a^n b^n is
    /// rejected, never truncated or guessed at.
    #[instrument(level = "debug", skip(self))]
    pub fn build_for_word(&mut self, word: &Word) -> GrammarResult<ParseTree> {
        let n = word.derivation_depth()?;
        Ok(self.build(n))
    }

    /// Convenience entry for callers holding raw text (e.g. the CLI).
    #[instrument(level = "debug", skip(self))]
    pub fn build_for_string(&mut self, text: &str) -> GrammarResult<ParseTree> {
        let word = Word::parse(text)?;
        self.build_for_word(&word)
    }

    fn nonterminal(&self) -> NodeData {
        NodeData {
            symbol: Symbol::S,
            input_index: None,
        }
    }

    fn terminal(&mut self, symbol: Symbol) -> NodeData {
        let data = NodeData {
            symbol,
            input_index: Some(self.next_index),
        };
        self.next_index += 1;
        data
    }
}
