// unsuspend - repair session exports from tab-suspension extensions
mod cli;
mod core;
mod domain;
mod infrastructure;

use clap::Parser;
use cli::args::Args;
use cli::commands::execute_command;
use infrastructure::logging::init_logging;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
