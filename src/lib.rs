//! Formal-language playground.
//!
//! Two laboratory set-ups live here:
//! - the context-free grammar S → aSb | ε with string generation and
//!   arena-backed parse trees, and
//! - a pumping-lemma simulator hunting the contradiction in the claim
//!   that L = {a^p | p prime} were regular.

pub mod arena;
pub mod builder;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod grammar;
pub mod primes;
pub mod pumping;
pub mod render;
pub mod util;

pub use arena::{ParseTree, Symbol};
pub use builder::ParseTreeBuilder;
pub use grammar::Word;
pub use pumping::Decomposition;
