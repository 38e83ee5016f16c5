mod cli;
mod commands;
mod observability;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use output::print_error;

fn main() {
    let cli = Cli::parse();
    observability::init_tracing_with_level(&cli.log_level);

    if let Err(e) = run(&cli) {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Paths(args) => {
            let paths = commands::paths::compute(args)?;
            output::print_list(&paths, args.format)?;
        }
        Commands::Types(args) => {
            let types = commands::types::list(args)?;
            output::print_list(&types, args.format)?;
        }
    }

    Ok(())
}
