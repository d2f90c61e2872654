//! Synthetic contact data.
//!
//! The store only talks to the [`ContactGenerator`] trait so tests can plug
//! in fixed output, while the app uses [`RandomContactGenerator`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_NAME_POOL: [&str; 5] = ["Arjun", "Aditi", "Aarav", "Anaya", "Advait"];
pub const DEFAULT_PHONE_PREFIX: &str = "+91";

/// Exclusive upper bound of the random 10-digit block.
const NUMBER_SPACE: u64 = 10_000_000_000;

pub trait ContactGenerator {
    fn next_name(&mut self) -> String;
    fn next_number(&mut self) -> String;
}

pub struct RandomContactGenerator<R: Rng = StdRng> {
    rng: R,
    names: Vec<String>,
    prefix: String,
}

impl RandomContactGenerator<StdRng> {
    /// Deterministic generator; the same seed yields the same contacts.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomContactGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            names: DEFAULT_NAME_POOL.iter().map(|n| n.to_string()).collect(),
            prefix: DEFAULT_PHONE_PREFIX.to_string(),
        }
    }

    /// Replaces the name pool. An empty pool is ignored and the current one kept.
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if !names.is_empty() {
            self.names = names;
        }
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl<R: Rng> ContactGenerator for RandomContactGenerator<R> {
    fn next_name(&mut self) -> String {
        let idx = self.rng.gen_range(0..self.names.len());
        self.names[idx].clone()
    }

    fn next_number(&mut self) -> String {
        let digits = self.rng.gen_range(0..NUMBER_SPACE);
        format!("{}{:010}", self.prefix, digits)
    }
}
