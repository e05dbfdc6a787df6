// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! jg - Job argument gate CLI

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use commands::{capabilities, check};
use error::JgError;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "jg",
    version,
    about = "jg - Validate scraping job arguments against the capability matrix"
)]
struct Cli {
    /// Log resolution details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and validate job arguments
    Check(check::CheckArgs),
    /// List allowed capabilities per job type
    Capabilities(capabilities::CapabilitiesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check(args) => check::check(args),
        Commands::Capabilities(args) => capabilities::capabilities(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<JgError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
