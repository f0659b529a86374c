// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The `jam` binary: run the current problem over an input file.
//!
//! Exit code is 0 on success and 1 on any failure, with the cause chain
//! reported on stderr before exiting.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use jam_template::problem::Template;
use jam_template::scaffold;
use jam_template::stats::Counters;

#[derive(Parser, Debug)]
#[command(name = "jam", about = "Run the current contest problem over an input file")]
struct Args {
    /// Input file; the first token is the number of test cases.
    #[arg(default_value = "test.in")]
    input: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut problem = Template;
    let report = scaffold::run_file(&mut problem, &args.input)
        .with_context(|| format!("run failed for {}", args.input.display()))?;

    info!(
        "wrote {} ({} lines)",
        report.output.display(),
        report.statistics.get(Counters::LinesWritten)
    );
    Ok(())
}
