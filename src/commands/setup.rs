//! # Setup Command
//!
//! One-time setup for lostfound: writes the commented config file and
//! installs shell completions.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};
use clap_complete::Shell;
use owo_colors::{OwoColorize, Stream};

use crate::{
    config::{self, Config},
    constants::{
        BASH_COMPLETIONS_DIR, BASH_COMPLETION_FILE, ELVISH_COMPLETIONS_DIR, ELVISH_COMPLETION_FILE,
        FISH_COMPLETIONS_DIR, FISH_COMPLETION_FILE, ZSH_COMPLETIONS_DIR, ZSH_COMPLETION_FILE,
    },
};

use super::completions::generate_to_string;

fn check() -> String {
    "✓"
        .if_supports_color(Stream::Stderr, |t| t.green())
        .to_string()
}

/// Executes the setup command.
///
/// `shell_override` bypasses `$SHELL` detection; `skip_completions` only
/// writes the config.
pub fn execute(shell_override: Option<Shell>, skip_completions: bool) -> Result<()> {
    eprintln!(
        "{}\n",
        "Setting up lostfound...".if_supports_color(Stream::Stderr, |t| t.bold())
    );

    setup_config()?;

    if !skip_completions {
        match shell_override.or_else(detect_shell) {
            Some(shell) => install_completions(shell)?,
            None => eprintln!(
                "  Could not detect your shell. Run: lf completions <SHELL> > <completions-file>"
            ),
        }
    }

    eprintln!("\n{} Setup complete!", check());
    Ok(())
}

fn setup_config() -> Result<()> {
    let path = Config::path().context("Could not determine home directory")?;

    if Config::create_default_if_missing()? {
        eprintln!("{} Created config: {}", check(), path.display());
    } else {
        eprintln!("{} Config already exists: {}", check(), path.display());
    }
    Ok(())
}

/// Detects the login shell from `$SHELL`.
fn detect_shell() -> Option<Shell> {
    let shell_path = env::var("SHELL").ok()?;
    let name = shell_path.rsplit('/').next().unwrap_or(&shell_path);
    // Login shells may carry a leading dash ("-zsh")
    let name = name.strip_prefix('-').unwrap_or(name);

    match name {
        "zsh" => Some(Shell::Zsh),
        "bash" => Some(Shell::Bash),
        "fish" => Some(Shell::Fish),
        "elvish" => Some(Shell::Elvish),
        "powershell" | "pwsh" => Some(Shell::PowerShell),
        _ => None,
    }
}

/// Returns the completion file path for shells with an auto-load directory.
fn completion_path(shell: Shell) -> Option<PathBuf> {
    let (dir, file) = match shell {
        Shell::Zsh => (ZSH_COMPLETIONS_DIR, ZSH_COMPLETION_FILE),
        Shell::Bash => (BASH_COMPLETIONS_DIR, BASH_COMPLETION_FILE),
        Shell::Fish => (FISH_COMPLETIONS_DIR, FISH_COMPLETION_FILE),
        Shell::Elvish => (ELVISH_COMPLETIONS_DIR, ELVISH_COMPLETION_FILE),
        _ => return None,
    };

    Some(config::home_dir()?.join(dir).join(file))
}

fn install_completions(shell: Shell) -> Result<()> {
    let Some(install_path) = completion_path(shell) else {
        eprintln!("\n  Manual setup required for {shell:?}");
        eprintln!("    Invoke-Expression (& lf completions powershell | Out-String)");
        return Ok(());
    };

    if let Some(parent) = install_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&install_path, generate_to_string(shell))
        .with_context(|| format!("Failed to write completions: {}", install_path.display()))?;

    eprintln!(
        "{} Installed {} completions: {}",
        check(),
        format!("{shell:?}").to_lowercase(),
        install_path.display()
    );

    if shell == Shell::Zsh {
        eprintln!("\n  To enable completions, add to ~/.zshrc:");
        eprintln!("    fpath=(~/.zfunc $fpath) && autoload -Uz compinit && compinit");
    }

    Ok(())
}
