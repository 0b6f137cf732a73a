//! # Hearth Desk Entry Point
//!
//! Parses the command line and hands off to [`hearth_desk::run`]; the
//! actual work lives in the library for testability.

use clap::Parser;

use hearth_desk::Cli;

fn main() {
    let cli = Cli::parse();

    hearth_desk::init_tracing();

    if let Err(e) = hearth_desk::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
