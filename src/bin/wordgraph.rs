use clap::Parser;
use colored::Colorize;
use wordgraph_core::cli::{self, Cli};
use wordgraph_core::exit::WordGraphExit;

fn main() -> WordGraphExit {
    let cli = Cli::parse();

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            WordGraphExit::from(&e)
        }
    }
}
