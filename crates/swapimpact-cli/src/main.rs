//! Swapimpact - environmental savings estimation for clothing swaps
//!
//! A CLI tool that trains and queries the swap-impact estimator.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
