//! `lorem` - lorem ipsum generator
//!
//! # Usage
//!
//! ```bash
//! lorem                          # one wrapped copy at terminal width
//! lorem --chars 11 --no-nl       # "Lorem ipsum"
//! lorem --lines 2 --width 40     # first two lines at 40 columns
//! lorem -b 4096 -o filler.txt    # exactly 4 KiB
//! ```
//!
//! Set `LOREM_LOG=debug` to trace the growth loop on stderr.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use lorem::cli::Args;
use lorem::{Destination, Error, generate};
use tracing::debug;

fn main() -> ExitCode {
    lorem::logging::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Validate and generate before touching the destination, so a rejected
/// invocation writes nothing.
fn run(args: &Args) -> lorem::Result<()> {
    let config = args.to_config()?;
    debug!(size = ?config.target, width = config.wrap.width, "resolved configuration");

    let output = generate(&config)?;
    let mut destination = Destination::open(&args.output)?;
    destination.emit(&output)
}

fn report(err: &Error) {
    let mut command = Args::command();
    if err.is_usage() {
        eprintln!("{}", command.render_usage());
    }
    eprintln!("{}: error: {err}", command.get_name());
}
