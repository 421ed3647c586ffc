mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use cli::Cli;
use config::{Config, Settings};
use error::CliResult;
use std::{
    ffi::OsString,
    io::{self, Write},
};
use tracing_subscriber::EnvFilter;

fn init_tracing(cli: &Cli) {
    // --quiet  → off
    // --verbose → RUST_LOG when set, otherwise debug
    // default  → warn
    let filter = if cli.quiet {
        EnvFilter::new("off")
    } else if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("warn")
    };

    // a subscriber may already be installed when `run` is called more than once
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let exit_code = run(std::env::args_os(), &mut stdout, &mut stderr);
    if exit_code != error::EXIT_SUCCESS {
        std::process::exit(exit_code);
    }
}

fn run<I, W, E>(args: I, out: &mut W, err: &mut E) -> i32
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(parse_err) => {
            // help and version are "errors" that belong on stdout
            let _ = if parse_err.use_stderr() {
                write!(err, "{parse_err}")
            } else {
                write!(out, "{parse_err}")
            };
            return parse_err.exit_code();
        }
    };

    init_tracing(&cli);

    match execute(&cli, out) {
        Ok(code) => code,
        Err(cli_err) => {
            let _ = writeln!(err, "error: {cli_err}");
            cli_err.exit_code()
        }
    }
}

fn execute(cli: &Cli, out: &mut impl Write) -> CliResult<i32> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, config);

    commands::dispatch(&cli.command, &settings, out)
}

///
/// TESTS
///
