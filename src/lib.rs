// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reusable scaffold for Google Code Jam style contest problems.
//!
//! Each contest problem is solved by regenerating this template: fill in the
//! [`Template`](problem::Template) stub, point the `jam` binary at the
//! downloaded input file, and submit the timestamped output file it writes
//! next to the input.
//!
//! # Architecture
//!
//! The crate splits into a small set of independent modules:
//!
//! - [`perm`]: lexicographic permutation enumerator, the one piece with real
//!   algorithmic content. A single buffer is mutated in place across yields.
//! - [`numtheory`]: GCD, a bounded sieve of Eratosthenes with caller-owned
//!   state, and modular exponentiation.
//! - [`formatting`]: helpers for rendering answers (fixed-precision
//!   decimals, digit counts).
//! - [`scaffold`]: the input/output loop shared by every problem. Reads a
//!   case count and `T` cases from a file, writes `Case #k: <answer>` lines
//!   to stdout and to a timestamped output file.
//! - [`problem`]: the [`Problem`] trait seam between the scaffold and the
//!   per-problem code, plus the [`Template`] stub to overwrite per problem.
//! - [`stats`]: run counters reported in the end-of-run summary.
//!
//! # Error Model
//!
//! The scaffold is a single-run offline batch tool: any failure (missing
//! input file, malformed token, write error) aborts the whole run. Errors
//! propagate up to the binary, which reports the cause chain and exits
//! nonzero. There is no partial-result recovery.
//!
//! # Example
//!
//! ```
//! use jam_template::Permutations;
//!
//! let mut perms = Permutations::new(3).unwrap();
//! while let Some(p) = perms.advance() {
//!     println!("{:?}", p);
//! }
//! ```

pub mod formatting;
pub mod numtheory;
pub mod perm;
pub mod problem;
pub mod scaffold;
pub mod stats;

// Re-export commonly used types
pub use perm::{PermutationError, Permutations};
pub use problem::{Problem, Template};
pub use scaffold::{run_file, RunReport, ScaffoldError};
