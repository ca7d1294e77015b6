//! `graphql-alchemist` - GraphQL boilerplate generator
//!
//! Entry point for the application.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use graphql_alchemist::app::run_resolver;
use graphql_alchemist::cli::{Args, Command};
use graphql_alchemist::fs::{FileSink, OutputPaths};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = graphql_alchemist::logging::init(args.log_level) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<bool> {
    let paths = match args.out_dir {
        Some(dir) => OutputPaths::new(&dir),
        None => OutputPaths::from_cwd()?,
    };

    match args.command {
        Command::Resolver { tokens } => {
            let outcome = run_resolver(
                &tokens,
                paths,
                &mut FileSink,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?;
            Ok(outcome.is_success())
        }
    }
}
