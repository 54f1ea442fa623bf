//! Pumping-lemma counter-example simulation for L = {a^p | p prime}.
//!
//! A proof run decomposes a prime-length string into x·y·z with |y| ≥ 1 and
//! |xy| ≤ n, pumps y, and checks whether the resulting length is composite.

use rand::Rng;
use tracing::instrument;

use crate::errors::{PumpingError, PumpingResult};
use crate::primes;

/// One x·y·z split of a^p. Immutable once drawn; pumping computes a derived
/// length without touching the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition {
    x_len: u64,
    y_len: u64,
    z_len: u64,
    p: u64,
    n: u64,
}

impl Decomposition {
    pub fn x_len(&self) -> u64 {
        self.x_len
    }

    pub fn y_len(&self) -> u64 {
        self.y_len
    }

    pub fn z_len(&self) -> u64 {
        self.z_len
    }

    /// Length of the original string (the chosen prime).
    pub fn prime(&self) -> u64 {
        self.p
    }

    /// Pumping length the split was drawn against.
    pub fn pumping_length(&self) -> u64 {
        self.n
    }

    /// Length of x y^k z.
    pub fn pump(&self, k: u64) -> u64 {
        self.x_len + self.y_len * k + self.z_len
    }
}

/// Draw a random valid decomposition of a^p against pumping length `n`.
///
/// Fails when `p` is not prime or `p < n`; the caller validates its inputs,
/// this function never substitutes a different prime. `n = 0` and `p = n`
/// are accepted boundary cases.
#[instrument(level = "debug", skip(rng))]
pub fn decompose(p: u64, n: u64, rng: &mut impl Rng) -> PumpingResult<Decomposition> {
    if !primes::is_prime(p) {
        return Err(PumpingError::NotPrime(p));
    }
    if p < n {
        return Err(PumpingError::PrimeBelowPumpingLength { p, n });
    }

    // The p - 1 clamp keeps z non-empty when p == n; a draw may never consume
    // the whole string as y.
    let max_y = 1.max(n.min(p - 1));
    let y_len = rng.gen_range(1..=max_y);
    let max_x = n.saturating_sub(y_len);
    let x_len = rng.gen_range(0..=max_x);
    let z_len = p - x_len - y_len;

    Ok(Decomposition {
        x_len,
        y_len,
        z_len,
        p,
        n,
    })
}

/// True exactly when the pumped length is composite, i.e. the pumped string
/// left the language and the draw demonstrates the contradiction. Prime
/// lengths and lengths ≤ 1 are inconclusive for that particular draw.
pub fn is_contradiction(pumped_len: u64) -> bool {
    primes::is_composite(pumped_len)
}
