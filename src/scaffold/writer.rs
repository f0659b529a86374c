// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Case-line writer.
//!
//! Output files are newline-joined: a newline is written *before* every case
//! except the first, so the file never ends with a trailing newline.

use std::io::{self, Write};

/// Render one output line. Case indices are 1-based.
pub fn case_line(index: usize, answer: &str) -> String {
    format!("Case #{}: {}", index, answer)
}

/// Writer producing `Case #k: <answer>` lines joined by newlines.
#[derive(Debug)]
pub struct CaseWriter<W: Write> {
    out: W,
    cases_written: usize,
}

impl<W: Write> CaseWriter<W> {
    /// Wrap an output sink.
    pub fn new(out: W) -> Self {
        Self {
            out,
            cases_written: 0,
        }
    }

    /// Append one case line.
    pub fn write_case(&mut self, index: usize, answer: &str) -> io::Result<()> {
        if self.cases_written > 0 {
            self.out.write_all(b"\n")?;
        }
        write!(self.out, "{}", case_line(index, answer))?;
        self.cases_written += 1;
        Ok(())
    }

    /// How many cases have been written so far.
    pub fn cases_written(&self) -> usize {
        self.cases_written
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
