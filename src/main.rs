use anyhow::Context;
use centre_finder::cli::{
    args::{Args, Commands},
    commands,
};
use clap::{CommandFactory, Parser};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help
    let Some(command) = args.command else {
        if let Err(e) = Args::command().print_help() {
            eprintln!("Failed to print help: {}", e);
        }
        println!();
        process::exit(0);
    };

    // Create async runtime and run the command
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let name = match &command {
        Commands::Merge(_) => "merge",
        Commands::Serve(_) => "serve",
    };

    let result = runtime
        .block_on(commands::run(command))
        .with_context(|| format!("{} failed", name));

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
