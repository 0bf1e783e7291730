// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng, TryRngCore};

/// A seeded random number generator for randomized tests.
///
/// The seed is printed when it is chosen at random, and can be pinned with the
/// `REGLISSE_TEST_SEED` environment variable to replay a failing run.
#[derive(Debug, Clone)]
#[must_use]
pub struct SeededRng(Rc<RefCell<StdRng>>);

impl SeededRng {
    const ENV: &str = "REGLISSE_TEST_SEED";

    /// Creates a new `SeededRng` with the given seed.
    pub fn new(seed: u64) -> Self {
        Self(Rc::new(RefCell::new(StdRng::seed_from_u64(seed))))
    }

    /// Creates a new `SeededRng` from the environment variable, if set.
    ///
    /// # Panics
    ///
    /// Panics if the environment variable is set but is not a valid `u64`.
    #[track_caller]
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let s = std::env::var_os(Self::ENV)?
            .into_string()
            .unwrap_or_else(|_| panic!("{} must be a valid UTF-8 string", Self::ENV));
        Some(Self::new(s.parse().unwrap_or_else(|_| {
            panic!("{} must be a valid u64", Self::ENV)
        })))
    }

    /// Creates a new `SeededRng` with a random seed generated by the OS.
    pub fn from_random() -> Self {
        let seed = rand::rngs::OsRng.unwrap_err().next_u64();
        eprintln!(
            "Seed {seed}: to rerun with this data, export {}={seed}",
            Self::ENV
        );
        Self::new(seed)
    }

    /// Seeds from the environment variable when set, otherwise at random.
    #[track_caller]
    pub fn from_env_or_random() -> Self {
        Self::from_env().unwrap_or_else(Self::from_random)
    }

    /// Generates a value with a shared reference to the generator.
    #[must_use]
    pub fn random<T>(&self) -> T
    where
        rand::distr::StandardUniform: rand::distr::Distribution<T>,
    {
        rand::Rng::random(&mut *self.0.borrow_mut())
    }

    /// Generates a value in `range` with a shared reference to the generator.
    #[track_caller]
    pub fn random_range<T, R>(&self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        rand::Rng::random_range(&mut *self.0.borrow_mut(), range)
    }
}
