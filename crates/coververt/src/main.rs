//! Promote embedded pictures in FLAC files to front covers.
//!
//! See [`coververt`] documentation for more information.
//!
//! [`coververt`]: https://crates.io/crates/coververt

use anyhow::Result;
use clap::Parser;

/// Promote embedded pictures in FLAC files to front covers.
#[derive(Parser)]
#[command(author, version, about, max_term_width = 80)]
pub struct Opts {
    #[command(flatten)]
    inner: coververt::cli::Coververt,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    coververt::cli::entry(&opts.inner)
}
