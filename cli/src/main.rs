//! todo-board — interactive terminal client for a todo REST API.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! user-facing messages.

mod args;
mod shell;
mod terminal;
mod transport;

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use args::Cli;
use terminal::TerminalAlert;
use todo_core::{App, TodoClient};
use transport::UreqTransport;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = cli.client_config();
    tracing::info!(base_url = %config.base_url, "starting board");

    let mut app = App::new(
        TodoClient::from_config(&config),
        UreqTransport::new(),
        TerminalAlert,
    );
    app.init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run(&mut app, stdin.lock(), &mut stdout).context("terminal session failed")
}
