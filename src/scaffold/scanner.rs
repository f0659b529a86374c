// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Whitespace-separated token reader over buffered input.
//!
//! Contest inputs are streams of tokens where line breaks carry no meaning.
//! [`Scanner`] reads a line at a time and hands tokens out one by one,
//! parsing each into whatever type the call site asks for.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use thiserror::Error;

/// Errors from reading or parsing a token. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input ran out of tokens before the expected count was read.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A token could not be parsed into the requested type.
    #[error("malformed token {token:?}: expected {expected}")]
    Malformed {
        /// The offending token text.
        token: String,
        /// Name of the type the token was parsed into.
        expected: &'static str,
    },

    /// The underlying reader failed.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

/// Token reader over any buffered source.
#[derive(Debug)]
pub struct Scanner<R> {
    reader: R,
    line: String,
    tokens: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            tokens: VecDeque::new(),
        }
    }

    /// Read the next token and parse it.
    ///
    /// Lines are consumed lazily, so tokens may span line boundaries freely.
    ///
    /// # Example
    ///
    /// ```
    /// use jam_template::scaffold::Scanner;
    ///
    /// let mut scanner = Scanner::new("2\n10 20\n".as_bytes());
    /// let count: usize = scanner.token().unwrap();
    /// assert_eq!(count, 2);
    /// assert_eq!(scanner.token::<u64>().unwrap(), 10);
    /// ```
    pub fn token<T: FromStr>(&mut self) -> Result<T, ScanError> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return match token.parse() {
                    Ok(value) => Ok(value),
                    Err(_) => Err(ScanError::Malformed {
                        token,
                        expected: std::any::type_name::<T>(),
                    }),
                };
            }
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(ScanError::UnexpectedEof);
            }
            self.tokens
                .extend(self.line.split_whitespace().map(String::from));
        }
    }
}
