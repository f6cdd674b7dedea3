//! MTA Helper CLI - scaffold MTA Lua resources and generate meta.xml
//!
//! Usage: mta-helper [OPTIONS]
//!
//! Without options every answer is asked for interactively:
//!   1. Generate new files / Generate meta for existing files
//!   2. Resource folder
//!   3. Templates to create (new files only)
//!   4. Zoom example in client.lua (only when client.lua is picked)

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use mta_helper::presentation::Cli;

mod commands;
mod ui;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    install_interrupt_handler();

    if let Err(e) = commands::run::cmd_run(&cli) {
        ui::error::print_error(&e, cli.json);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("warn,mta_helper={}", level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Prompts hide the cursor; put it back if the operator hits Ctrl+C mid-prompt.
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        let _ = crossterm::execute!(std::io::stderr(), crossterm::cursor::Show);
        eprintln!();
        std::process::exit(130);
    });
    if let Err(e) = result {
        tracing::warn!("failed to install Ctrl+C handler: {}", e);
    }
}
