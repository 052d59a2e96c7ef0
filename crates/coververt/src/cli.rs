use core::cell::Cell;

use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use crate::log;
use crate::out::{Colors, Out, warn};
use crate::walk;

/// Promote embedded "other" pictures in FLAC files to front covers.
///
/// The current directory is scanned recursively.
#[derive(Parser)]
pub struct Coververt {
    /// If set, also prints skipped and failed files. These are always
    /// recorded in the log file.
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Entry for `coververt`.
///
/// See [`crate`] documentation.
pub fn entry(opts: &Coververt) -> Result<()> {
    // Current indentation level for output.
    let indent = Cell::new(0);

    let cols = Colors::new();

    let o = StandardStream::stdout(ColorChoice::Auto);
    let mut o = o.lock();
    let mut o = Out::new(opts.verbose, &indent, &cols, &mut o);

    let root = env::current_dir().context("Get current directory")?;

    if let Err(e) = log::init(&root.join(log::LOG_FILE)) {
        warn!(o, "Not writing log file: {e:#}");
    }

    let summary = match walk::run(&mut o, &root) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Error during directory processing: {e:#}");
            return Err(e.context("Processing directory"));
        }
    };

    summary.print(&mut o)
}
