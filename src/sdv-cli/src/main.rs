mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::EnvFilter;

use cli::*;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Objects {
            paths,
            sort,
            dry_run,
        } => {
            let paths = Config::load()?.resolve(&paths);
            commands::objects::build(&paths, sort, dry_run)?;
        }

        Commands::Show { ids, paths } => {
            let paths = Config::load()?.resolve(&paths);
            commands::objects::show(&paths, &ids)?;
        }

        Commands::Configure { paths, show } => {
            commands::configure::handle(&paths, show)?;
        }
    }

    Ok(())
}
