use clap::Parser;
use ebird_mydata::cli::{self, Args, RunOutcome};
use std::process;

fn main() {
    let args = Args::parse();

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(cli::run(args)) {
        Ok(RunOutcome::Completed) => process::exit(0),
        Ok(RunOutcome::MemberMissing) => process::exit(2),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
