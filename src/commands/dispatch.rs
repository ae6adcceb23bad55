//! Command dispatch logic for grafo

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::helpers;
use grafo_core::error::{GrafoError, Result};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return Err(GrafoError::UsageError(
            "no command given (see --help)".to_string(),
        ));
    };

    let project = helpers::load_project(cli)?;

    if cli.verbose {
        eprintln!("load_datasets: {:?}", start.elapsed());
    }

    match command {
        Commands::Stats => commands::stats::execute(cli, &project),

        Commands::Degrees => commands::degrees::execute(cli, &project),

        Commands::Ego { node, all } => {
            commands::ego::execute(cli, &project, node.as_deref(), *all)
        }

        Commands::Bfs { source, target } => {
            commands::bfs::execute(cli, &project, source, target.as_deref())
        }

        Commands::Dfs { source } => commands::dfs::execute(cli, &project, source.as_deref()),

        Commands::Dijkstra {
            source,
            target,
            cutoff,
        } => commands::dijkstra::execute(cli, &project, source, target.as_deref(), *cutoff),

        Commands::BellmanFord { source, target } => {
            commands::bellman_ford::execute(cli, &project, source, target.as_deref())
        }

        Commands::Report { out } => commands::report::execute(cli, &project, out.as_deref()),
    }
}
