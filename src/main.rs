//! # lostfound CLI
//!
//! Command-line interface for the lostfound listings.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use clap::Parser;
use owo_colors::{OwoColorize, Stream};

use lostfound::{
    cli::{self, Cli, Commands},
    commands, logging, App, Config,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!(
            "{} {err:#}",
            "error:".if_supports_color(Stream::Stderr, |t| t.red().bold().to_string())
        );
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // These work without a store, a session or a readable config
    match cli.command {
        Commands::Setup {
            shell,
            no_completions,
        } => return commands::setup(shell, no_completions),
        Commands::Completions { shell } => return commands::completions(shell),
        _ => {}
    }

    let config = Config::load()?;
    logging::init(&config);

    let mut app = App::start(config).await;
    cli::run(&mut app, cli.command).await
}
