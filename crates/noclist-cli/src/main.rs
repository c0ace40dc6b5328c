use clap::Parser;
use noclist_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging before any request goes out.
    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("noclist warning: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("noclist error: {:#}", err);
        std::process::exit(1);
    }
}
