use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("Malformed word {word:?}: {reason}")]
    MalformedWord { word: String, reason: String },
}

pub type GrammarResult<T> = Result<T, GrammarError>;

#[derive(Error, Debug)]
pub enum PumpingError {
    #[error("{0} is not prime")]
    NotPrime(u64),

    #[error("Prime length {p} is smaller than pumping length {n}")]
    PrimeBelowPumpingLength { p: u64, n: u64 },
}

pub type PumpingResult<T> = Result<T, PumpingError>;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Tree depth {depth} exceeds configured maximum {max}")]
    DepthExceeded { depth: usize, max: usize },
}

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Cannot parse config file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Cannot write config file {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("Environment override failed: {0}")]
    Env(String),

    #[error("Cannot render config: {0}")]
    Serialize(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
