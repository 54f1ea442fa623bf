//! Command dispatch: one handler per subcommand.

use std::io;

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use colored::Colorize;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::builder::ParseTreeBuilder;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{self, Settings};
use crate::grammar;
use crate::primes;
use crate::pumping;
use crate::render;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Generate { n }) => generate_word(*n),
        Some(Commands::Language { max_n }) => list_language(*max_n),
        Some(Commands::Tree { n, word, steps }) => show_tree(*n, word.as_deref(), *steps),
        Some(Commands::Pump {
            prime,
            length,
            factor,
            seed,
            next_prime,
        }) => run_pump(*prime, *length, *factor, *seed, *next_prime),
        Some(Commands::Prime { num, next }) => check_prime(*num, *next),
        Some(Commands::Config { command }) => run_config(command),
        Some(Commands::Completion { shell }) => {
            print_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

#[instrument]
fn generate_word(n: usize) -> CliResult<()> {
    output::info(&grammar::generate(n));
    Ok(())
}

#[instrument]
fn list_language(max_n: usize) -> CliResult<()> {
    let listing = grammar::generate_all(max_n)
        .iter()
        .enumerate()
        .map(|(n, word)| format!("n={:<3} {}", n, word))
        .join("\n");
    output::info(&listing);
    Ok(())
}

#[instrument]
fn show_tree(n: Option<usize>, word: Option<&str>, steps: bool) -> CliResult<()> {
    let settings = Settings::load()?;
    let mut builder = ParseTreeBuilder::new();

    let tree = if let Some(text) = word {
        builder.build_for_string(text)?
    } else if let Some(n) = n {
        builder.build(n)
    } else {
        return Err(CliError::InvalidArgs(
            "specify a derivation depth or --word".to_string(),
        ));
    };
    debug!("tree nodes: {}, depth: {}", tree.len(), tree.depth());

    if steps {
        for line in render::reveal_steps(&tree) {
            output::info(&line);
        }
    } else {
        output::info(&render::render(&tree, settings.max_tree_depth)?);
    }
    output::detail(&format!("yield: {}", tree.frontier_word()));
    Ok(())
}

/// One adversary round: draw a split of a^p, pump it, test the pumped length.
#[instrument]
fn run_pump(
    prime: u64,
    length: u64,
    factor: Option<u64>,
    seed: Option<u64>,
    next_prime: bool,
) -> CliResult<()> {
    let settings = Settings::load()?;
    let k = factor.unwrap_or(settings.default_factor);

    let p = if next_prime && !primes::is_prime(prime) {
        let bumped = primes::next_prime_after(prime);
        output::detail(&format!("{} is not prime, using {}", prime, bumped));
        bumped
    } else {
        prime
    };

    let mut rng: StdRng = match seed.or(settings.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let d = pumping::decompose(p, length, &mut rng)?;
    debug!("decomposition: {:?}", d);

    let x = format!("a^{}", d.x_len()).blue();
    let y = format!("a^{}", d.y_len()).yellow();
    let z = format!("a^{}", d.z_len()).green();
    let pumped = d.pump(k);

    output::header(&format!(
        "Claim: L = {{a^p | p prime}} is regular with pumping length n = {}",
        length
    ));
    output::info(&format!(
        "1. choose w = a^{}, {} is prime and |w| >= n",
        p, p
    ));
    output::info(&format!(
        "2. split w = x y z = {} {} {} with |xy| = {} <= {} and |y| = {} >= 1",
        x,
        y,
        z,
        d.x_len() + d.y_len(),
        length,
        d.y_len()
    ));
    output::info(&format!(
        "3. pump with k = {}: |x y^{} z| = {} + {}*{} + {} = {}",
        k,
        k,
        d.x_len(),
        k,
        d.y_len(),
        d.z_len(),
        pumped
    ));

    if pumping::is_contradiction(pumped) {
        output::info(&format!(
            "4. {} is composite, so a^{} is not in L",
            pumped, pumped
        ));
        output::success("5. contradiction: the pumped word left the language, L is not regular");
    } else {
        output::info(&format!(
            "4. {} is not composite, the pumped word stayed in L",
            pumped
        ));
        output::failure("5. inconclusive for this draw, retry with another seed or factor");
    }
    Ok(())
}

#[instrument]
fn check_prime(num: u64, next: bool) -> CliResult<()> {
    if next {
        output::info(&primes::next_prime_after(num));
    } else if primes::is_prime(num) {
        output::success(&format!("{} is prime", num));
    } else {
        output::failure(&format!("{} is not prime", num));
    }
    Ok(())
}

#[instrument]
fn run_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                let dir = config::global_config_dir().ok_or_else(|| {
                    CliError::InvalidArgs("cannot determine config directory".to_string())
                })?;
                std::fs::create_dir_all(&dir).map_err(|e| CliError::Io(e.to_string()))?;
                dir.join("langlab.toml")
            } else {
                config::local_config_path()
            };
            if path.exists() {
                return Err(CliError::InvalidArgs(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            Settings::write_template(&path)?;
            output::action("Created", &path.display());
        }
        ConfigCommands::Path => {
            if let Some(global) = config::global_config_path() {
                output::info(&format!(
                    "global: {} {}",
                    global.display(),
                    existence_marker(&global)
                ));
            }
            let local = config::local_config_path();
            output::info(&format!(
                "local:  {} {}",
                local.display(),
                existence_marker(&local)
            ));
        }
    }
    Ok(())
}

fn existence_marker(path: &std::path::Path) -> &'static str {
    if path.exists() {
        "(exists)"
    } else {
        "(not created)"
    }
}
