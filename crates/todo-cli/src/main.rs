//! Todo CLI Application
//!
//! Builds a todo list from command-line arguments, applies the requested
//! mutations, and renders the result. No state survives between runs.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use log::{debug, info};
use renderer::TerminalRenderer;
use todo_core::TodoList;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        title,
        items,
        no_color,
        mutations,
        command,
    } = Args::parse();

    info!("todo started");

    let mut list = TodoList::new(title);
    list.extend(items);
    debug!("built list {:?} with {} items", list.title(), list.len());

    let mut cli = Cli::new(list, TerminalRenderer::for_stdout(no_color));
    cli.apply_mutations(&mutations)
        .context("Failed to apply mutations")?;
    cli.handle_command(command)
}
