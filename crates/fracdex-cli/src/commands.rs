//! Module: commands
//! Responsibility: run one parsed subcommand against the allocator.
//! Does not own: rendering (see `output`) or settings resolution (see `config`).

use crate::{
    cli::Command,
    config::Settings,
    error::{CliResult, EXIT_FAILURE, EXIT_SUCCESS},
    output::{self, KeyReport},
};
use fracdex::core::{check, check_sequence, compare, generate_many, key_between};
use std::io::Write;
use tracing::debug;

pub fn dispatch(command: &Command, settings: &Settings, out: &mut impl Write) -> CliResult<i32> {
    match command {
        Command::Between { before, after } => {
            between(settings, before.as_deref(), after.as_deref(), out)
        }
        Command::Many {
            count,
            before,
            after,
        } => many(settings, *count, before.as_deref(), after.as_deref(), out),
        Command::Validate { keys } => validate(settings, keys, out),
        Command::Check { keys } => check_run(settings, keys, out),
        Command::Compare { a, b } => compare_pair(settings, a, b, out),
    }
}

fn between(
    settings: &Settings,
    before: Option<&str>,
    after: Option<&str>,
    out: &mut impl Write,
) -> CliResult<i32> {
    let key = match &settings.allocator {
        Some(allocator) => allocator.between(before, after)?,
        None => key_between(before, after)?,
    };
    output::key(out, settings.format, &key)?;

    Ok(EXIT_SUCCESS)
}

fn many(
    settings: &Settings,
    count: usize,
    before: Option<&str>,
    after: Option<&str>,
    out: &mut impl Write,
) -> CliResult<i32> {
    let keys = match &settings.allocator {
        Some(allocator) => allocator.generate_many(count, before, after)?,
        None => generate_many(count, before, after)?,
    };
    output::keys(out, settings.format, &keys)?;

    Ok(EXIT_SUCCESS)
}

fn validate(settings: &Settings, keys: &[String], out: &mut impl Write) -> CliResult<i32> {
    let reports: Vec<KeyReport<'_>> = keys
        .iter()
        .map(|key| {
            let error = check(key).err().map(|err| err.to_string());
            KeyReport {
                key,
                valid: error.is_none(),
                error,
            }
        })
        .collect();
    output::reports(out, settings.format, &reports)?;

    let invalid = reports.iter().filter(|report| !report.valid).count();
    if invalid > 0 {
        debug!(invalid, total = keys.len(), "invalid keys found");
        return Ok(EXIT_FAILURE);
    }

    Ok(EXIT_SUCCESS)
}

fn check_run(settings: &Settings, keys: &[String], out: &mut impl Write) -> CliResult<i32> {
    check_sequence(keys)?;
    output::check(out, settings.format, keys.len())?;

    Ok(EXIT_SUCCESS)
}

fn compare_pair(settings: &Settings, a: &str, b: &str, out: &mut impl Write) -> CliResult<i32> {
    check(a)?;
    check(b)?;
    output::ordering(out, settings.format, compare(a, b))?;

    Ok(EXIT_SUCCESS)
}
