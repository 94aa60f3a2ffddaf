//! # Shell Command
//!
//! Interactive session: one store for many commands, so reports and status
//! changes stay visible until the shell exits.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::{OwoColorize, Stream};

use crate::{
    app::App,
    cli::{self, Cli},
};

/// One parsed shell line
#[derive(Debug)]
enum Line {
    Empty,
    Exit,
    Command(Box<Cli>),
    /// Parse failure or `--help` text
    Message(String),
}

fn parse_line(line: &str) -> Line {
    let Some(words) = shlex::split(line) else {
        return Line::Message("error: unbalanced quotes".to_string());
    };

    match words.first().map(String::as_str) {
        None => Line::Empty,
        Some("exit" | "quit") => Line::Exit,
        Some(_) => match Cli::try_parse_from(std::iter::once("lf".to_string()).chain(words)) {
            Ok(cli) => Line::Command(Box::new(cli)),
            Err(err) => Line::Message(err.render().to_string()),
        },
    }
}

/// Runs commands read from `input` until end of input or `exit`.
pub async fn run_lines(app: &mut App, input: impl BufRead, interactive: bool) -> Result<()> {
    let mut lines = input.lines();

    loop {
        if interactive {
            let prompt = match app.user {
                Some(ref user) => format!("{}> ", user.name),
                None => "lf> ".to_string(),
            };
            print!("{}", prompt.if_supports_color(Stream::Stdout, |t| t.cyan()));
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;

        match parse_line(&line) {
            Line::Empty => {}
            Line::Exit => break,
            Line::Message(text) => eprint!("{text}"),
            Line::Command(cli) => {
                if let Err(err) = cli::execute_command(app, cli.command).await {
                    eprintln!(
                        "{} {err:#}",
                        "error:".if_supports_color(Stream::Stderr, |t| t.red())
                    );
                }
            }
        }
    }

    Ok(())
}

/// Executes the shell command on stdin. Prompts only when stdin is a terminal.
pub async fn execute(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("lostfound shell. Type `help` for commands, `exit` to leave.");
    }
    run_lines(app, stdin.lock(), interactive).await
}
