// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run statistics.
//!
//! Counters are kept in the run report and incremented by the scaffold as it
//! works through the cases. Mostly useful for sanity-checking a run (did we
//! really write as many lines as we read cases?).

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The counters maintained during a run.
#[derive(EnumCountMacro, Debug, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Cases parsed from the input file.
    CasesRead,
    /// Cases answered by `solve`.
    CasesSolved,
    /// `Case #k:` lines written to the output file.
    LinesWritten,
}

/// Fixed-size counter array indexed by [`Counters`].
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
