use clap::Parser;
use colored::Colorize;
use linkrank_core::cli::{handlers, Cli};
use linkrank_core::exit::LinkRankExit;

fn main() -> LinkRankExit {
    let cli = Cli::parse();
    handlers::init_logging(cli.verbose);

    match handlers::handle_rank(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            LinkRankExit::for_error(&e)
        }
    }
}
