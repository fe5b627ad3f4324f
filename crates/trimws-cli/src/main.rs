// crates/trimws-cli/src/main.rs

use clap::{CommandFactory, Parser};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

mod args;
mod exit;
mod io;
mod plan;
mod report;
mod run;

use args::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures.
            let code = if e.use_stderr() { exit::FAILURE } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.verbose);

    match run::execute(&cli) {
        Ok(counters) => std::process::exit(exit::status_for(counters.trimmed)),
        Err(e) => {
            eprintln!("trimws: {e:#}");
            if e.downcast_ref::<plan::UsageError>().is_some() {
                eprintln!("\n{}", Cli::command().render_usage());
                eprintln!("For more information, try '--help'.");
            }
            std::process::exit(exit::FAILURE);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
