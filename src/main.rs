//! nf CLI entry point

use std::process::ExitCode;

use clap::Parser;

use nf::cli::app::{run, EXIT_ERROR};
use nf::cli::args::Cli;
use nf::infrastructure::process::{detach, DetachOutcome};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Detach before any runtime threads exist; the parent returns
    // immediately with the detached sentinel code.
    if cli.detach {
        match detach() {
            Ok(DetachOutcome::Parent) => return ExitCode::SUCCESS,
            Ok(DetachOutcome::Child) => {}
            Err(e) => {
                eprintln!("nf: WARNING: could not detach ({}), running attached", e);
            }
        }
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("nf: failed to start runtime: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    runtime.block_on(run(cli))
}
