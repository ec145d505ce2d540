use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::execute;
use crossterm::style::{Print, ResetColor};
use tracing::{Level, error, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use ktop::app::{Cli, Config, Interrupt, Session};
use ktop::data::{SignalTerminator, SystemProcessSource};

/// Exit status of a process stopped by SIGINT.
const INTERRUPTED_EXIT: i32 = 130;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("ktop: {err}");
            return ExitCode::FAILURE;
        }
    };

    let interrupt = Interrupt::new();
    install_interrupt_handler(interrupt.clone());

    let source = SystemProcessSource::new();
    let terminator = SignalTerminator::new(config.kill_signal);
    let mut session = Session::new(
        source,
        terminator,
        io::stdin().lock(),
        io::stdout().lock(),
        &config,
    )
    .with_interrupt(interrupt);

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session ended");
            eprintln!("ktop error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Default level is WARN so logs stay out of the way of the table.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Ctrl+C stops an auto-refresh in progress; anywhere else it quits.
fn install_interrupt_handler(interrupt: Interrupt) {
    if let Err(err) = ctrlc::set_handler(move || {
        if interrupt.trigger() {
            return;
        }
        // stdout is locked by the session, so reset styling through stderr.
        let _ = execute!(io::stderr(), ResetColor, Print("\n"));
        std::process::exit(INTERRUPTED_EXIT);
    }) {
        warn!(%err, "failed to install Ctrl-C handler");
    }
}
