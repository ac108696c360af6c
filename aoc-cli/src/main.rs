//! aoc-run - run one part of a registered Advent of Code solution

mod cli;
mod clipboard;
mod config;
mod error;
mod output;

// Import aoc-solutions to link the solution plugins
use aoc_solutions as _;

use aoc_runner::{
    LookupError, Logger, RegistryBuilder, RunError, RunRequest, Runner, SolutionLayout,
    SolutionRegistry,
};
use clap::Parser;
use cli::Args;
use clipboard::SystemClipboard;
use config::Config;
use error::CliError;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();
    init_logging();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go through `log`, filtered by `RUST_LOG` (default: warn)
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_env()?;
    log::debug!("configuration: {:?}", config);

    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    log::debug!("{} solution class(es) registered", registry.len());

    let mut runner = Runner::new(&registry, SolutionLayout::new(&config.root), Logger::stdout())
        .with_clipboard(Box::new(SystemClipboard::new()))
        .with_change_dir(config.change_dir);

    if let Some(spec) = &config.import_paths {
        runner.add_import_paths(spec)?;
    }

    let request = args.into_request();
    let report = match runner.run(&request) {
        Ok(report) => report,
        Err(e) => {
            print_lookup_hint(&registry, &request, &e);
            return Err(e.into());
        }
    };

    OutputFormatter::new().print_report(&report);
    Ok(())
}

/// After a failed lookup, list what is available instead
fn print_lookup_hint(registry: &SolutionRegistry, request: &RunRequest, err: &RunError) {
    let RunError::Lookup(lookup) = err else {
        return;
    };

    match lookup {
        LookupError::SolutionNotFound { .. } => {
            let classes: Vec<&str> = registry.classes(request.id()).collect();
            if classes.is_empty() {
                eprintln!("No solutions are registered for {}.", request.id());
            } else {
                eprintln!(
                    "Classes registered for {}: {}",
                    request.id(),
                    classes.join(", ")
                );
            }
        }
        LookupError::PartNotFound { .. } => {
            let parts: Vec<&str> = registry
                .iter()
                .filter(|m| m.id == request.id() && m.class == request.class_name)
                .flat_map(|m| m.parts.iter().map(|p| p.name))
                .collect();
            eprintln!("Available parts: {}", parts.join(", "));
        }
    }
}
