//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Formal-language playground: a^n b^n derivation trees and a pumping-lemma
/// simulator for prime-length strings
#[derive(Parser, Debug)]
#[command(name = "langlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more: -d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the word a^n b^n
    Generate {
        /// Derivation depth n
        n: usize,
    },

    /// List all words of the language up to a derivation depth
    Language {
        /// Largest derivation depth to enumerate
        max_n: usize,
    },

    /// Draw the parse tree of a derivation
    Tree {
        /// Derivation depth n
        #[arg(conflicts_with = "word")]
        n: Option<usize>,

        /// Derive the depth from an accepted word instead (e.g. "aabb" or "ε")
        #[arg(short, long)]
        word: Option<String>,

        /// List nodes in reveal order instead of drawing the tree
        #[arg(long)]
        steps: bool,
    },

    /// Run one pumping-lemma round against L = {a^p | p prime}
    Pump {
        /// Prime length p of the chosen string a^p
        #[arg(short, long)]
        prime: u64,

        /// Claimed pumping length n
        #[arg(short = 'n', long)]
        length: u64,

        /// Pumping factor k (default from config)
        #[arg(short = 'k', long)]
        factor: Option<u64>,

        /// Fixed RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Bump a non-prime --prime to the next prime instead of failing
        #[arg(long)]
        next_prime: bool,
    },

    /// Primality check
    Prime {
        /// Number to test
        num: u64,

        /// Print the smallest prime greater than NUM instead
        #[arg(long)]
        next: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
