// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded sieve of Eratosthenes with caller-owned scratch state.
//!
//! The marking arrays live inside the [`Sieve`] value, so independent sieves
//! never interfere and a single sieve may be re-run with different bounds in
//! sequence. Every run re-marks from scratch; the queries [`Sieve::is_prime`]
//! and [`Sieve::primes`] always describe the most recent run.

/// Reusable sieve state up to a fixed inclusive limit.
///
/// # Example
///
/// ```
/// use jam_template::numtheory::Sieve;
///
/// let mut sieve = Sieve::new(10_000);
/// assert_eq!(sieve.count_primes(13), 6);
/// assert!(sieve.is_prime(13));
/// ```
#[derive(Debug, Clone)]
pub struct Sieve {
    limit: usize,
    is_prime: Vec<bool>,
    primes: Vec<usize>,
}

impl Sieve {
    /// Allocate scratch storage for sieving any `n <= limit`.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            is_prime: vec![false; limit + 1],
            primes: Vec::new(),
        }
    }

    /// The largest `n` this sieve can be run with.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Mark primality for all integers in `[0, n]` and return the number of
    /// primes `<= n`.
    ///
    /// The previous run's marks are overwritten entirely, including marks
    /// above `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n > limit`.
    pub fn count_primes(&mut self, n: usize) -> usize {
        assert!(n <= self.limit, "sieve bound exceeded: {} > {}", n, self.limit);

        self.primes.clear();
        for flag in &mut self.is_prime[..=n] {
            *flag = true;
        }
        for flag in &mut self.is_prime[n + 1..] {
            *flag = false;
        }
        self.is_prime[0] = false;
        if n >= 1 {
            self.is_prime[1] = false;
        }

        for i in 2..=n {
            if self.is_prime[i] {
                self.primes.push(i);
                let mut multiple = 2 * i;
                while multiple <= n {
                    self.is_prime[multiple] = false;
                    multiple += i;
                }
            }
        }
        self.primes.len()
    }

    /// Whether `k` was marked prime by the most recent run.
    ///
    /// Returns `false` for any `k` above that run's bound.
    pub fn is_prime(&self, k: usize) -> bool {
        self.is_prime.get(k).copied().unwrap_or(false)
    }

    /// Primes found by the most recent run, in increasing order.
    pub fn primes(&self) -> &[usize] {
        &self.primes
    }
}
