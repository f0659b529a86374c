// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Write a throwaway input file under the system temp directory.
///
/// The name is unique per process and call, so tests can run in parallel.
pub fn write_input(tag: &str, contents: &str) -> PathBuf {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "jam-template-{}-{}-{}.in",
        tag,
        std::process::id(),
        id
    ));
    std::fs::write(&path, contents).expect("write test input");
    path
}

/// Best-effort cleanup of files created during a test.
pub fn remove<P: AsRef<std::path::Path>>(paths: &[P]) {
    for path in paths {
        let _ = std::fs::remove_file(path);
    }
}
