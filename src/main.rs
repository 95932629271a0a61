//
//  circleci-api
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use circleci_api::cli::{Cli, Commands};
use circleci_api::{exit_codes, CircleError};

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<CircleError>()
                .map_or(exit_codes::ERROR, exit_codes::for_error);
            std::process::exit(code);
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("CIRCLECI_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login(cmd) => cmd.run(&cli.global).await,
        Commands::Me(cmd) => cmd.run(&cli.global).await,
        Commands::Projects(cmd) => cmd.run(&cli.global).await,
        Commands::RecentBuilds(cmd) => cmd.run(&cli.global).await,
        Commands::Builds(cmd) => cmd.run(&cli.global).await,
        Commands::Build(cmd) => cmd.run(&cli.global).await,
        Commands::Artifacts(cmd) => cmd.run(&cli.global).await,
        Commands::LatestArtifacts(cmd) => cmd.run(&cli.global).await,
        Commands::Env(cmd) => cmd.run(&cli.global).await,
        Commands::CheckoutKeys(cmd) => cmd.run(&cli.global).await,
    }
}
