// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Input/output scaffold shared by every problem.
//!
//! A run is a straight line: open the input file, read the case count `T`,
//! then for each of the `T` cases read the problem-specific input, solve it,
//! and emit `Case #k: <answer>` to stdout and to a timestamped output file
//! next to the input. The output file is what gets submitted; the stdout
//! mirror is for watching the run.
//!
//! Failures are fatal: the first error aborts the run and is reported by the
//! binary with a nonzero exit. File handles are owned by [`run_file`] and
//! dropped on every exit path, success or error.

pub mod scanner;
pub mod writer;

pub use scanner::{ScanError, Scanner};
pub use writer::CaseWriter;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use log::{debug, info};
use thiserror::Error;

use crate::problem::Problem;
use crate::stats::{Counters, Statistics};

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The input or output file could not be opened.
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The case count at the head of the input could not be read.
    #[error("failed to read the case count")]
    CaseCount(#[source] ScanError),

    /// One case's input could not be read.
    #[error("failed to read case {case}")]
    Scan {
        case: usize,
        #[source]
        source: ScanError,
    },

    /// The output file could not be written.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct RunReport {
    /// Number of cases solved.
    pub cases: usize,
    /// Path of the output file that was written.
    pub output: PathBuf,
    /// Wall-clock time for the whole run.
    pub elapsed: Duration,
    /// Run counters.
    pub statistics: Statistics,
}

/// Output file path for an input: `<input>.<YYYYMMDD-HHmmss>.out`.
pub fn output_path(input: &Path, stamp: DateTime<Local>) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(format!(".{}.out", stamp.format("%Y%m%d-%H%M%S")));
    PathBuf::from(name)
}

/// Run `problem` over every case in `input`.
///
/// Reads the case count, then alternates [`Problem::read_case`] and
/// [`Problem::solve`], mirroring each output line to stdout as it is
/// produced. Stops at the first error.
pub fn run_file<P: Problem>(problem: &mut P, input: &Path) -> Result<RunReport, ScaffoldError> {
    let started = Instant::now();

    let in_file = File::open(input).map_err(|source| ScaffoldError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    let mut scanner = Scanner::new(BufReader::new(in_file));

    let output = output_path(input, Local::now());
    let out_file = File::create(&output).map_err(|source| ScaffoldError::Open {
        path: output.clone(),
        source,
    })?;
    let mut case_writer = CaseWriter::new(BufWriter::new(out_file));

    let mut statistics = Statistics::new();

    let cases: usize = scanner.token().map_err(ScaffoldError::CaseCount)?;
    debug!(
        "{}: {} cases from {}",
        problem.name(),
        cases,
        input.display()
    );

    for index in 1..=cases {
        let case = problem
            .read_case(&mut scanner)
            .map_err(|source| ScaffoldError::Scan {
                case: index,
                source,
            })?;
        statistics.increment(Counters::CasesRead);

        let answer = problem.solve(case);
        statistics.increment(Counters::CasesSolved);

        println!("{}", writer::case_line(index, &answer));
        case_writer
            .write_case(index, &answer)
            .map_err(|source| ScaffoldError::Write {
                path: output.clone(),
                source,
            })?;
        statistics.increment(Counters::LinesWritten);
    }

    case_writer
        .finish()
        .map_err(|source| ScaffoldError::Write {
            path: output.clone(),
            source,
        })?;

    let elapsed = started.elapsed();
    info!(
        "{}: solved {} cases in {:.3}s",
        problem.name(),
        cases,
        elapsed.as_secs_f64()
    );

    Ok(RunReport {
        cases,
        output,
        elapsed,
        statistics,
    })
}
