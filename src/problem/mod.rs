// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The per-problem seam.
//!
//! The scaffold is identical from contest to contest; only parsing and
//! solving change. [`Problem`] is the boundary between the two: the scaffold
//! drives it once per case. [`Template`] is the stub that gets overwritten
//! when this repository is regenerated for a new problem.

use std::io::BufRead;

use crate::scaffold::{ScanError, Scanner};

/// One contest problem: how to read a case and how to answer it.
///
/// # Example
///
/// ```
/// use std::io::BufRead;
/// use jam_template::problem::Problem;
/// use jam_template::scaffold::{ScanError, Scanner};
///
/// /// Sums the integers of each case.
/// struct SumProblem;
///
/// impl Problem for SumProblem {
///     type Case = Vec<u64>;
///
///     fn read_case<R: BufRead>(
///         &mut self,
///         scanner: &mut Scanner<R>,
///     ) -> Result<Vec<u64>, ScanError> {
///         let n: usize = scanner.token()?;
///         (0..n).map(|_| scanner.token()).collect()
///     }
///
///     fn solve(&mut self, case: Vec<u64>) -> String {
///         case.iter().sum::<u64>().to_string()
///     }
/// }
/// ```
pub trait Problem {
    /// Parsed input for one test case.
    type Case;

    /// Read one case from the token stream.
    ///
    /// Errors are fatal to the run; there is no resynchronization.
    fn read_case<R: BufRead>(&mut self, scanner: &mut Scanner<R>)
        -> Result<Self::Case, ScanError>;

    /// Answer one case. The returned string is everything after the
    /// `Case #k: ` prefix.
    fn solve(&mut self, case: Self::Case) -> String;

    /// Optional: a name for this problem (for logging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// The stub to fill in per problem.
///
/// Reads the common `N` followed by `N` integers shape; change `read_case`
/// when the problem's input differs. `solve` is where the actual work goes.
#[derive(Debug, Default)]
pub struct Template;

impl Problem for Template {
    type Case = Vec<u64>;

    fn read_case<R: BufRead>(&mut self, scanner: &mut Scanner<R>) -> Result<Vec<u64>, ScanError> {
        let n: usize = scanner.token()?;
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(scanner.token()?);
        }
        Ok(values)
    }

    fn solve(&mut self, _case: Vec<u64>) -> String {
        // write answer
        String::from("1")
    }

    fn name(&self) -> &str {
        "Template"
    }
}
